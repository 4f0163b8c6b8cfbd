//! List rules command implementation.

use holder_lint_rules::all_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<8} {:<24} {:<10} Description", "Code", "Name", "Visits");
    println!("{}", "-".repeat(96));

    for rule in all_rules() {
        let kinds: Vec<String> = rule
            .interested_kinds()
            .iter()
            .map(ToString::to_string)
            .collect();
        println!(
            "{:<8} {:<24} {:<10} {}",
            rule.code(),
            rule.name(),
            kinds.join(","),
            rule.description()
        );
    }

    println!("\nUse --rules to run specific rules, e.g.:");
    println!("  holder-lint check --rules viewholder-layout-doc");
    println!("  holder-lint check --rules VH001");
}
