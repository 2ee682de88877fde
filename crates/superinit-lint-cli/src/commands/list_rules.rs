//! List rules command implementation.

use superinit_lint_rules::all_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<26} {:<22} {:<9} Description", "Id", "Name", "Severity");
    println!("{}", "-".repeat(100));

    for info in all_rules().infos() {
        println!(
            "{:<26} {:<22} {:<9} {}",
            info.code,
            info.name,
            info.severity.to_string(),
            info.description
        );
    }

    println!("\nUse --rules to run specific rules, e.g.:");
    println!("  superinit-lint check --rules missing-constraints");
    println!("  superinit-lint check --rules DtoDefaultValueDetector");
}
