//! Complexity facade: one entry point over the age-aware scorers
//!
//! `use_children_algorithm` picks the children-optimized scorer, otherwise the
//! improved one. Comparisons always run both.

use serde::Serialize;

use super::{clamp_age, Algorithm, ChildrenScorer, ComplexityBreakdown, ComplexityScorer, ImprovedScorer};

/// Pick the age-aware scorer for a flag
pub fn scorer_for(use_children_algorithm: bool) -> &'static dyn ComplexityScorer {
    if use_children_algorithm {
        &ChildrenScorer
    } else {
        &ImprovedScorer
    }
}

/// Algorithm chosen by the facade for a flag
pub fn algorithm_for(use_children_algorithm: bool) -> Algorithm {
    scorer_for(use_children_algorithm).algorithm()
}

/// Score a text for a reader of the given age
pub fn calculate_complexity(
    text: &str,
    age: u8,
    include_cognitive_load: bool,
    use_children_algorithm: bool,
) -> u32 {
    let scorer = scorer_for(use_children_algorithm);
    tracing::debug!(
        algorithm = scorer.algorithm().name(),
        include_cognitive_load,
        "calculating complexity"
    );
    scorer.score(text, age, include_cognitive_load)
}

/// Detailed breakdown of a text's complexity
pub fn complexity_breakdown(
    text: &str,
    age: u8,
    include_cognitive_load: bool,
    use_children_algorithm: bool,
) -> ComplexityBreakdown {
    scorer_for(use_children_algorithm).breakdown(text, age, include_cognitive_load)
}

/// Improved and children-optimized scores side by side
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AlgorithmComparison {
    pub text: String,
    pub age: u8,
    pub include_cognitive_load: bool,
    pub original_score: u32,
    pub children_score: u32,
    /// `children_score - original_score`
    pub difference: i64,
    /// Difference relative to the original score; 0 when the original is 0
    pub improvement_percent: f64,
}

/// Run both age-aware scorers on the same text
pub fn compare_algorithms(text: &str, age: u8, include_cognitive_load: bool) -> AlgorithmComparison {
    let original_score = ImprovedScorer.score(text, age, include_cognitive_load);
    let children_score = ChildrenScorer.score(text, age, include_cognitive_load);
    let difference = i64::from(children_score) - i64::from(original_score);

    let improvement_percent = if original_score > 0 {
        difference as f64 / f64::from(original_score) * 100.0
    } else {
        0.0
    };

    AlgorithmComparison {
        text: text.to_string(),
        age: clamp_age(age),
        include_cognitive_load,
        original_score,
        children_score,
        difference,
        improvement_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complexity::Component;

    #[test]
    fn test_routing_by_flag() {
        let text = "Мама мыла раму";
        assert_eq!(
            calculate_complexity(text, 8, false, false),
            ImprovedScorer.score(text, 8, false)
        );
        assert_eq!(
            calculate_complexity(text, 8, false, true),
            ChildrenScorer.score(text, 8, false)
        );
        assert_eq!(algorithm_for(true), Algorithm::Children);
        assert_eq!(algorithm_for(false), Algorithm::Improved);
    }

    #[test]
    fn test_breakdown_routing() {
        let improved = complexity_breakdown("Кот спит", 8, true, false);
        assert!(improved.component(Component::Phonetic).is_some());

        let children = complexity_breakdown("Кот спит", 8, true, true);
        assert!(children.component(Component::Bigram).is_some());
    }

    #[test]
    fn test_empty_text_everywhere() {
        for children in [false, true] {
            assert_eq!(calculate_complexity("", 8, true, children), 0);
            let breakdown = complexity_breakdown("", 8, true, children);
            assert_eq!(breakdown.words, 0);
            assert_eq!(breakdown.total_complexity, 0.0);
        }
    }

    #[test]
    fn test_compare_algorithms() {
        let comparison = compare_algorithms("Мама мыла раму", 8, true);
        assert_eq!(comparison.original_score, 18);
        assert_eq!(comparison.children_score, 19);
        assert_eq!(comparison.difference, 1);
        assert!((comparison.improvement_percent - 100.0 / 18.0).abs() < 1e-9);
    }

    #[test]
    fn test_compare_empty_text() {
        let comparison = compare_algorithms("", 8, true);
        assert_eq!(comparison.difference, 0);
        assert_eq!(comparison.improvement_percent, 0.0);
    }
}
