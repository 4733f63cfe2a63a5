use crate::{
    actions::display::{print_bold, print_table, print_yellow},
    detector::{registry, CommandCategory},
};

const HEADERS: &[&str] = &["#", "category", "rule", "pattern"];

/// Registry rules in evaluation order
pub fn pattern_rows() -> Vec<Vec<String>> {
    CommandCategory::DETECTION_ORDER
        .iter()
        .flat_map(|&category| registry::rules_for(category))
        .enumerate()
        .map(|(index, rule)| {
            vec![
                (index + 1).to_string(),
                rule.category.to_string(),
                rule.name.to_string(),
                rule.pattern().trim_start_matches("(?i)").to_string(),
            ]
        })
        .collect()
}

pub fn handle_patterns() -> Result<(), String> {
    print_bold(&format!("Command patterns ({} rules, first match wins)", registry::rule_count()));
    println!();
    print_table(HEADERS, &pattern_rows());
    println!();
    print_yellow("Use 'ada detect <text>' to see how an utterance is classified.");
    Ok(())
}
