//! List rules command implementation.

use inject_lint_rules::all_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!(
        "{:<42} {:<34} {:<8} Description",
        "Code", "Name", "Severity"
    );
    println!("{}", "-".repeat(120));

    for rule in all_rules() {
        println!(
            "{:<42} {:<34} {:<8} {}",
            rule.code(),
            rule.name(),
            rule.default_severity(),
            rule.description()
        );
    }

    println!("\nSuppress a rule on one element with @SuppressWarnings(\"<Code>\").");
    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  inject-lint check --rules qualifier-cardinality,scope-cardinality decls.json");
    println!("  inject-lint check --rules MoreThanOneQualifier,ProvidesNotInModule decls.json");
}
