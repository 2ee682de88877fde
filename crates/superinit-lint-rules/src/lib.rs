//! # superinit-lint-rules
//!
//! Lint rules for Android layouts and Kotlin DTOs.
//!
//! ## Available Rules
//!
//! | Id | Name | Description |
//! |----|------|-------------|
//! | `MissingConstraints` | `missing-constraints` | Children of a constraint container must be constrained on both axes |
//! | `DtoDefaultValueDetector` | `dto-default-value` | `@Serializable` constructor parameters must have default values |
//!
//! ## Usage
//!
//! ```ignore
//! use superinit_lint_core::Analyzer;
//! use superinit_lint_rules::{DtoDefaultValue, MissingConstraints};
//!
//! let analyzer = Analyzer::builder()
//!     .root("./app")
//!     .layout_rule(MissingConstraints::new())
//!     .source_rule(DtoDefaultValue::new().package_contains("dto"))
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod dto_default_value;
mod fix;
mod missing_constraints;
mod report;
mod rule_set;

pub mod predicates;
pub mod walker;

pub use dto_default_value::{trimmed_range, Anchor, DtoDefaultValue};
pub use fix::default_value_fix;
pub use missing_constraints::{ConstraintState, MissingConstraints};
pub use report::Reporter;
pub use rule_set::{all_rules, rules_from_config, RuleInfo, RuleSet};

/// Issue metadata of the layout rule.
pub mod layout_issue {
    pub use crate::missing_constraints::{
        BRIEF, CODE, DEFAULT_CONTAINERS, EXPLANATION, MESSAGE_HORIZONTAL_MISSING,
        MESSAGE_UNCONSTRAINED, MESSAGE_VERTICAL_MISSING, NAME,
    };
}

/// Issue metadata of the declaration rule.
pub mod dto_issue {
    pub use crate::dto_default_value::{BRIEF, CODE, DEFAULT_ANNOTATIONS, EXPLANATION, MESSAGE, NAME};
}

/// Re-export core types for convenience.
pub use superinit_lint_core::{Severity, Violation};
