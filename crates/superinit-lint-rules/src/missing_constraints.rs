//! Rule requiring both axes to be constrained inside a constraint container.
//!
//! # Rationale
//!
//! A view without a horizontal or vertical constraint jumps to the top-left
//! corner at runtime, even when the layout editor shows it in place.
//!
//! # Detected Patterns
//!
//! Direct children of a configured container (`CustomConstraintLayout` by
//! default) that lack a horizontal constraint, a vertical constraint, or both.
//!
//! # Allowed Patterns
//!
//! - Containers driven by a motion scene (`app:layoutDescription`)
//! - `Guideline`, `Group`, `include`, `requestFocus` and `tag` children
//! - A `Barrier` with a `barrierDirection`
//! - Children whose id is referenced by a `Flow` in the same container
//!
//! # Configuration
//!
//! - `containers`: container tag names (simple or fully qualified)
//!
//! # Suppression
//!
//! - `tools:ignore="MissingConstraints"` on the child or any ancestor

use std::collections::HashSet;
use std::ops::ControlFlow;

use superinit_lint_core::utils::node_ignores;
use superinit_lint_core::{
    FileContext, LayoutRule, Node, RuleConfig, Severity, Violation, AUTO_URI,
};

use crate::predicates::{
    id_suffix, is_barrier_direction, is_constraint_attribute, is_exempt_tag,
    is_horizontal_constraint, is_referenced_ids, is_vertical_constraint, BARRIER_TAG, FLOW_TAG,
};
use crate::report::Reporter;
use crate::walker::{any_attribute, children_where, scan_attributes, walk};

/// Rule id for missing-constraints.
pub const CODE: &str = "MissingConstraints";

/// Rule name for missing-constraints.
pub const NAME: &str = "missing-constraints";

/// One-line issue summary.
pub const BRIEF: &str = "ConstraintLayout에 제약 조건이 누락되었습니다";

/// Issue explanation attached to every violation.
pub const EXPLANATION: &str = "가로 및 세로 제약 조건이 모두 있는지 확인해주세요..";

/// Reported when only the vertical axis is constrained.
pub const MESSAGE_HORIZONTAL_MISSING: &str =
    "이 뷰는 가로로 제약 조건이 없습니다. 가로 제약 조건을 추가해주세요.";

/// Reported when only the horizontal axis is constrained.
pub const MESSAGE_VERTICAL_MISSING: &str =
    "이 뷰는 세로로 제약 조건이 없습니다. 세로 제약 조건을 추가해주세요.";

/// Reported when neither axis is constrained.
pub const MESSAGE_UNCONSTRAINED: &str = "이 뷰는 제약 조건이 없습니다. 제약 조건을 추가해주세요.";

/// Container tags checked when none are configured.
pub const DEFAULT_CONTAINERS: &[&str] = &["CustomConstraintLayout"];

/// Which axes a child has satisfied so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConstraintState {
    /// A horizontal constraint was found.
    pub horizontal: bool,
    /// A vertical constraint was found.
    pub vertical: bool,
}

impl ConstraintState {
    /// Scans the `layout_constraint*` attributes of `node`, stopping once both
    /// axes are satisfied.
    #[must_use]
    pub fn of(node: &dyn Node) -> Self {
        let mut state = Self::default();
        scan_attributes(node, |attr| {
            if !is_constraint_attribute(&attr.local_name) {
                return ControlFlow::Continue(());
            }
            state.mark(&attr.local_name, &attr.value);
            if state.is_complete() {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        state
    }

    /// Records one attribute.
    pub fn mark(&mut self, name: &str, value: &str) {
        self.horizontal |= is_horizontal_constraint(name, value);
        self.vertical |= is_vertical_constraint(name, value);
    }

    /// Both axes satisfied.
    #[must_use]
    pub fn is_complete(self) -> bool {
        self.horizontal && self.vertical
    }
}

/// Requires constrained children inside constraint containers.
#[derive(Debug, Clone)]
pub struct MissingConstraints {
    /// Container tag names, simple or fully qualified.
    pub containers: Vec<String>,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for MissingConstraints {
    fn default() -> Self {
        Self::new()
    }
}

impl MissingConstraints {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            containers: DEFAULT_CONTAINERS.iter().map(|s| (*s).to_string()).collect(),
            severity: Severity::Error,
        }
    }

    /// Replaces the container tag names.
    #[must_use]
    pub fn containers<I, S>(mut self, containers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.containers = containers.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Builds the rule from its `[rules.missing-constraints]` table.
    #[must_use]
    pub fn from_config(config: Option<&RuleConfig>) -> Self {
        let mut rule = Self::new();
        let Some(config) = config else {
            return rule;
        };
        if let Some(containers) = config.get_str_array("containers") {
            rule = rule.containers(containers);
        }
        if let Some(severity) = config.severity {
            rule = rule.severity(severity);
        }
        rule
    }

    /// Returns true if `tag` names a configured container.
    #[must_use]
    pub fn is_container(&self, tag: &str) -> bool {
        let simple = tag.rsplit('.').next().unwrap_or(tag);
        self.containers.iter().any(|c| c == tag || c == simple)
    }

    /// Checks the direct children of one container.
    ///
    /// Returns one violation per child missing a constraint, in document
    /// order.
    #[must_use]
    pub fn analyze_layout(&self, ctx: &FileContext, container: &dyn Node) -> Vec<Violation> {
        if has_layout_description(container) {
            tracing::debug!(
                "Skipping {} in {}: driven by a motion scene",
                container.kind(),
                ctx.relative_path.display()
            );
            return Vec::new();
        }

        let reporter = Reporter::new(ctx, CODE, NAME, self.severity).explanation(EXPLANATION);
        let flow_ids = flow_referenced_ids(container);

        children_where(container, |child| is_exempt(child) || in_flow(child, &flow_ids))
            .into_iter()
            .filter(|child| !node_ignores(*child, CODE))
            .filter(|child| !ConstraintState::of(*child).is_complete())
            .map(|child| reporter.report(child.name_range(), select_message(child)))
            .collect()
    }
}

fn has_layout_description(container: &dyn Node) -> bool {
    container
        .attributes()
        .iter()
        .any(|a| a.local_name == "layoutDescription" && (a.namespace.is_none() || a.in_namespace(AUTO_URI)))
}

/// Ids referenced by the container's `Flow` children, split on `,` as written.
fn flow_referenced_ids(container: &dyn Node) -> HashSet<String> {
    container
        .children()
        .into_iter()
        .filter(|child| child.kind() == FLOW_TAG)
        .flat_map(|flow| flow.attributes().iter())
        .filter(|a| is_referenced_ids(&a.local_name))
        .flat_map(|a| a.value.split(','))
        .map(str::to_string)
        .collect()
}

fn is_exempt(child: &dyn Node) -> bool {
    let tag = child.kind();
    is_exempt_tag(tag)
        || (tag == BARRIER_TAG && any_attribute(child, |a| is_barrier_direction(&a.local_name)))
}

fn in_flow(child: &dyn Node, flow_ids: &HashSet<String>) -> bool {
    !flow_ids.is_empty()
        && any_attribute(child, |a| {
            a.local_name == "id" && flow_ids.contains(id_suffix(&a.value))
        })
}

/// Picks the message from every attribute of `child`, vertical axis first.
fn select_message(child: &dyn Node) -> &'static str {
    if any_attribute(child, |a| is_vertical_constraint(&a.local_name, &a.value)) {
        MESSAGE_HORIZONTAL_MISSING
    } else if any_attribute(child, |a| is_horizontal_constraint(&a.local_name, &a.value)) {
        MESSAGE_VERTICAL_MISSING
    } else {
        MESSAGE_UNCONSTRAINED
    }
}

impl LayoutRule for MissingConstraints {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        BRIEF
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check_layout(&self, ctx: &FileContext, root: &dyn Node) -> Vec<Violation> {
        let mut violations = Vec::new();
        walk(root, &mut |node, ancestors| {
            if !self.is_container(node.kind()) {
                return;
            }
            if node_ignores(node, CODE) || ancestors.iter().any(|a| node_ignores(*a, CODE)) {
                tracing::debug!("{} suppressed by tools:ignore", node.kind());
                return;
            }
            violations.extend(self.analyze_layout(ctx, node));
        });
        violations
    }
}
