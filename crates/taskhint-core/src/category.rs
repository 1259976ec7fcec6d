//! Keyword-based category suggestion
//!
//! Each rule counts how many of its keywords occur (as substrings) in the
//! lower-cased `title description` text. The rule with the most hits wins;
//! on a tie the earlier rule wins. No hits at all yields the default.

use serde::{Deserialize, Serialize};

/// Category used when nothing matches
pub const DEFAULT_CATEGORY: &str = "personal";

/// A named category and the keywords that vote for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl CategoryRule {
    pub fn new(name: &str, keywords: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    fn matches(&self, text: &str) -> usize {
        self.keywords
            .iter()
            .filter(|keyword| !keyword.is_empty() && text.contains(&keyword.to_lowercase()))
            .count()
    }
}

/// Built-in rules
pub fn default_rules() -> Vec<CategoryRule> {
    vec![
        CategoryRule::new("work", &["work", "project", "meeting", "deadline", "office"]),
        CategoryRule::new("personal", &["home", "family", "self", "life", "personal"]),
        CategoryRule::new("shopping", &["buy", "shop", "purchase", "grocery", "store"]),
        CategoryRule::new("urgent", &["urgent", "important", "asap", "deadline", "critical"]),
    ]
}

/// Suggest a category for a title/description pair
pub fn suggest_category(
    title: &str,
    description: &str,
    rules: &[CategoryRule],
    default: &str,
) -> String {
    let text = format!("{} {}", title, description).to_lowercase();

    let mut best: Option<(&CategoryRule, usize)> = None;
    for rule in rules {
        let hits = rule.matches(&text);
        if hits > best.map_or(0, |(_, n)| n) {
            best = Some((rule, hits));
        }
    }

    match best {
        Some((rule, hits)) => {
            tracing::debug!(category = %rule.name, hits, "category suggested");
            rule.name.clone()
        }
        None => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggest(title: &str, description: &str) -> String {
        suggest_category(title, description, &default_rules(), DEFAULT_CATEGORY)
    }

    #[test]
    fn test_shopping() {
        assert_eq!(suggest("Buy milk", "at the grocery store"), "shopping");
    }

    #[test]
    fn test_work() {
        assert_eq!(suggest("Project meeting", "prepare slides"), "work");
    }

    #[test]
    fn test_no_match_falls_back_to_default() {
        assert_eq!(suggest("Water the plants", ""), "personal");
        assert_eq!(suggest("", ""), "personal");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(suggest("URGENT", "ASAP please"), "urgent");
    }

    #[test]
    fn test_tie_goes_to_earlier_rule() {
        // "deadline" votes for both work and urgent
        assert_eq!(suggest("deadline", ""), "work");
    }

    #[test]
    fn test_substring_matching() {
        // "shopping" contains "shop"
        assert_eq!(suggest("Weekend shopping", ""), "shopping");
    }

    #[test]
    fn test_custom_rules_and_default() {
        let rules = vec![
            CategoryRule::new("health", &["doctor", "dentist"]),
            CategoryRule::new("fitness", &["gym", "run"]),
        ];
        assert_eq!(suggest_category("Dentist", "", &rules, "misc"), "health");
        assert_eq!(suggest_category("Gym then run", "", &rules, "misc"), "fitness");
        assert_eq!(suggest_category("Read", "", &rules, "misc"), "misc");
    }

    #[test]
    fn test_empty_keyword_never_matches() {
        let rules = vec![CategoryRule::new("blank", &[""])];
        assert_eq!(suggest_category("anything", "", &rules, "personal"), "personal");
    }
}
