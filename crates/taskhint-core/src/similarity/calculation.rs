use std::collections::HashSet;

/// Jaccard similarity between two term sets
///
/// Returns `|a ∩ b| / |a ∪ b|`, a score between 0.0 (no shared terms) and
/// 1.0 (identical sets). Two empty sets score 0.0 rather than NaN.
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let intersection = small.iter().filter(|t| large.contains(*t)).count();
    let union = a.len() + b.len() - intersection;

    intersection as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(terms: &[&str]) -> HashSet<String> {
        terms.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_identical_sets() {
        let a = set(&["buy", "milk"]);
        assert!((jaccard(&a, &a) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_disjoint_sets() {
        assert_eq!(jaccard(&set(&["buy", "milk"]), &set(&["read", "book"])), 0.0);
    }

    #[test]
    fn test_partial_overlap() {
        let score = jaccard(&set(&["buy", "milk"]), &set(&["buy", "milk", "eggs"]));
        assert!((score - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_symmetric() {
        let a = set(&["morning", "run", "park"]);
        let b = set(&["evening", "run"]);
        assert_eq!(jaccard(&a, &b), jaccard(&b, &a));
    }

    #[test]
    fn test_empty_sets_score_zero() {
        let empty = HashSet::new();
        assert_eq!(jaccard(&empty, &empty), 0.0);
        assert_eq!(jaccard(&empty, &set(&["milk"])), 0.0);
        assert_eq!(jaccard(&set(&["milk"]), &empty), 0.0);
    }
}
