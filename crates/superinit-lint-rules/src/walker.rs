//! Depth-first traversal over [`Node`] trees.

use std::ops::ControlFlow;

use superinit_lint_core::{Attribute, Node};

/// Visits `root` and every descendant in document order (pre-order).
///
/// `visit` receives the node and its ancestors, outermost first.
pub fn walk<'a, F>(root: &'a dyn Node, visit: &mut F)
where
    F: FnMut(&'a dyn Node, &[&'a dyn Node]),
{
    let mut ancestors = Vec::new();
    walk_inner(root, &mut ancestors, visit);
}

fn walk_inner<'a, F>(node: &'a dyn Node, ancestors: &mut Vec<&'a dyn Node>, visit: &mut F)
where
    F: FnMut(&'a dyn Node, &[&'a dyn Node]),
{
    visit(node, ancestors);
    ancestors.push(node);
    for child in node.children() {
        walk_inner(child, ancestors, visit);
    }
    ancestors.pop();
}

/// Direct children of `node`, minus those `skip` rejects.
pub fn children_where<'a, P>(node: &'a dyn Node, skip: P) -> Vec<&'a dyn Node>
where
    P: Fn(&dyn Node) -> bool,
{
    node.children().into_iter().filter(|c| !skip(*c)).collect()
}

/// Feeds attributes to `classify` until it breaks.
///
/// Returns true if the scan stopped early.
pub fn scan_attributes<F>(node: &dyn Node, mut classify: F) -> bool
where
    F: FnMut(&Attribute) -> ControlFlow<()>,
{
    node.attributes()
        .iter()
        .try_for_each(|a| classify(a))
        .is_break()
}

/// Returns true if any attribute satisfies `pred`.
pub fn any_attribute<P>(node: &dyn Node, pred: P) -> bool
where
    P: Fn(&Attribute) -> bool,
{
    node.attributes().iter().any(pred)
}

#[cfg(test)]
mod tests {
    use super::*;
    use superinit_lint_core::Element;

    fn tree() -> Element {
        Element::new("Root")
            .with_child(
                Element::new("A")
                    .with_child(Element::new("A1"))
                    .with_child(Element::new("A2")),
            )
            .with_child(Element::new("B"))
    }

    #[test]
    fn walk_is_preorder_with_ancestors() {
        let root = tree();
        let mut seen = Vec::new();
        walk(&root, &mut |node, ancestors| {
            let path: Vec<&str> = ancestors.iter().map(|a| a.kind()).collect();
            seen.push(format!("{}:{}", path.join("/"), node.kind()));
        });
        assert_eq!(seen, vec![":Root", "Root:A", "Root/A:A1", "Root/A:A2", "Root:B"]);
    }

    #[test]
    fn children_where_filters() {
        let root = tree();
        let kept = children_where(&root, |c| c.kind() == "A");
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].kind(), "B");
    }

    #[test]
    fn scan_attributes_short_circuits() {
        let el = Element::new("V").with_attr("a", "1").with_attr("b", "2").with_attr("c", "3");
        let mut visited = Vec::new();
        let stopped = scan_attributes(&el, |a| {
            visited.push(a.local_name.clone());
            if a.local_name == "b" {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert!(stopped);
        assert_eq!(visited, vec!["a", "b"]);
        assert!(any_attribute(&el, |a| a.value == "3"));
    }

    #[test]
    fn empty_tree_visits_only_root() {
        let root = Element::new("Root");
        let mut count = 0;
        walk(&root, &mut |_, _| count += 1);
        assert_eq!(count, 1);
    }
}
