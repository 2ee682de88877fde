//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const CONFIG_FILE: &str = "superinit-lint.toml";

const DEFAULT_CONFIG: &str = r#"# superinit-lint configuration

# Exit non-zero when a violation at or above this severity remains
# fail_on = "error"

[analyzer]
# Root directory to analyze (default: current directory)
# root = "./app"

# Glob patterns to exclude from analysis
exclude = [
    "**/build/**",
    "**/.gradle/**",
]

# Respect .gitignore files
respect_gitignore = true

# Abort when a file cannot be parsed instead of skipping it
fail_on_parse_error = false

# Rule configurations
# Each rule can be enabled/disabled and have its severity overridden

[rules.missing-constraints]
enabled = true
# severity = "warning"
# Container tags whose children must be constrained (simple or qualified names)
containers = ["CustomConstraintLayout"]

[rules.dto-default-value]
enabled = true
annotations = ["Serializable", "kotlinx.serialization.Serializable"]
# Only check files whose package contains this text
# package_contains = "dto"
# Where violations and fixes start: "after-annotations" or "declaration"
anchor = "after-annotations"
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new(CONFIG_FILE), force)?;

    println!("Created {CONFIG_FILE}");
    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_FILE} to configure rules");
    println!("  2. Run: superinit-lint check");

    Ok(())
}

fn write_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use superinit_lint_core::Config;
    use superinit_lint_rules::{rules_from_config, Anchor, DtoDefaultValue};

    #[test]
    fn default_config_parses_and_builds_rules() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(rules_from_config(&config).len(), 2);

        let dto = DtoDefaultValue::from_config(config.rule("dto-default-value", "DtoDefaultValueDetector"));
        assert_eq!(dto.anchor, Anchor::AfterAnnotations);
        assert!(dto.package_contains.is_none());
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        std::fs::write(&path, "custom").unwrap();

        assert!(write_config(&path, false).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "custom");

        write_config(&path, true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }
}
