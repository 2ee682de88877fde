//! Rule set construction.

use superinit_lint_core::{Config, LayoutRuleBox, Severity, SourceRuleBox};

use crate::dto_default_value::{self, DtoDefaultValue};
use crate::missing_constraints::{self, MissingConstraints};

/// Layout and source rules to run together.
#[derive(Default)]
pub struct RuleSet {
    /// Rules over layout markup.
    pub layout: Vec<LayoutRuleBox>,
    /// Rules over class declarations.
    pub source: Vec<SourceRuleBox>,
}

/// Metadata of one rule, for listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleInfo {
    /// Rule name.
    pub name: &'static str,
    /// Rule id.
    pub code: &'static str,
    /// One-line summary.
    pub description: &'static str,
    /// Severity the rule reports with.
    pub severity: Severity,
}

impl RuleSet {
    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layout.len() + self.source.len()
    }

    /// Returns true if the set holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keeps only the rules whose name or id is listed.
    #[must_use]
    pub fn only(mut self, selected: &[String]) -> Self {
        let keep = |name: &str, code: &str| selected.iter().any(|s| s == name || s == code);
        self.layout.retain(|r| keep(r.name(), r.code()));
        self.source.retain(|r| keep(r.name(), r.code()));
        self
    }

    /// Metadata of every rule in the set, layout rules first.
    #[must_use]
    pub fn infos(&self) -> Vec<RuleInfo> {
        let layout = self.layout.iter().map(|r| RuleInfo {
            name: r.name(),
            code: r.code(),
            description: r.description(),
            severity: r.default_severity(),
        });
        let source = self.source.iter().map(|r| RuleInfo {
            name: r.name(),
            code: r.code(),
            description: r.description(),
            severity: r.default_severity(),
        });
        layout.chain(source).collect()
    }
}

/// Returns every rule with default settings.
#[must_use]
pub fn all_rules() -> RuleSet {
    RuleSet {
        layout: vec![Box::new(MissingConstraints::new())],
        source: vec![Box::new(DtoDefaultValue::new())],
    }
}

/// Returns the enabled rules configured from `config`.
#[must_use]
pub fn rules_from_config(config: &Config) -> RuleSet {
    let mut set = RuleSet::default();

    if config.is_rule_enabled(missing_constraints::NAME, missing_constraints::CODE) {
        let options = config.rule(missing_constraints::NAME, missing_constraints::CODE);
        set.layout.push(Box::new(MissingConstraints::from_config(options)));
    } else {
        tracing::debug!("Rule {} disabled by config", missing_constraints::NAME);
    }

    if config.is_rule_enabled(dto_default_value::NAME, dto_default_value::CODE) {
        let options = config.rule(dto_default_value::NAME, dto_default_value::CODE);
        set.source.push(Box::new(DtoDefaultValue::from_config(options)));
    } else {
        tracing::debug!("Rule {} disabled by config", dto_default_value::NAME);
    }

    set
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_rules_has_both_families() {
        let set = all_rules();
        assert_eq!(set.len(), 2);
        let codes: Vec<&str> = set.infos().iter().map(|i| i.code).collect();
        assert_eq!(codes, vec!["MissingConstraints", "DtoDefaultValueDetector"]);
    }

    #[test]
    fn config_disables_and_configures() {
        let config = Config::parse(
            r#"
[rules.MissingConstraints]
enabled = false

[rules.dto-default-value]
severity = "warning"
"#,
        )
        .unwrap();

        let set = rules_from_config(&config);
        assert!(set.layout.is_empty());
        assert_eq!(set.source.len(), 1);
        assert_eq!(set.infos()[0].severity, Severity::Warning);
    }

    #[test]
    fn only_filters_by_name_or_code() {
        let set = all_rules().only(&["missing-constraints".to_string()]);
        assert_eq!(set.len(), 1);
        let set = all_rules().only(&["DtoDefaultValueDetector".to_string()]);
        assert_eq!(set.source.len(), 1);
        assert!(all_rules().only(&[]).is_empty());
    }
}
