//! Improved age-aware complexity scorer
//!
//! Linguistic complexity (0-100) from five components:
//! - syllable shape (0-30)
//! - structure: syllables per word and word length (0-20)
//! - lexical: logarithmic letter-rank difficulty (0-25)
//! - morphological: long words and abstract suffixes (0-15)
//! - phonetic: difficult letter combinations (0-10)
//!
//! With cognitive load the score reaches up to 150.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;
use serde::Serialize;

use super::tables::GENERAL_LETTER_RANKS;
use super::{
    words, Algorithm, Component, ComplexityBreakdown, ComplexityScorer, LegacyScorer,
    SyllableShape,
};
use crate::text::split_syllables;

/// Lexical difficulty of a character outside the alphabet
const UNKNOWN_LETTER_COMPLEXITY: f64 = 5.0;

/// Suffixes of abstract nouns that are hard to decode
pub(crate) const COMPLEX_SUFFIXES: [&str; 5] = ["ость", "ение", "ание", "ция", "сия"];

/// Letter combinations with their penalty
const DIFFICULT_COMBINATIONS: [(&str, f64); 11] = [
    ("жы", 8.0),
    ("шы", 8.0),
    ("чя", 6.0),
    ("щя", 6.0),
    ("чю", 6.0),
    ("щю", 6.0),
    ("тся", 4.0),
    ("ться", 4.0),
    ("ство", 3.0),
    ("ння", 5.0),
    ("льн", 4.0),
];

static COMPONENT_WEIGHTS: [(Component, f64); 5] = [
    (Component::Syllable, 0.3),
    (Component::Structural, 0.2),
    (Component::Lexical, 0.25),
    (Component::Morphological, 0.15),
    (Component::Phonetic, 0.1),
];

/// Letter difficulty: ln(rank + 2) * 2 over the general frequency ranking
static LETTER_COMPLEXITY: LazyLock<FxHashMap<char, f64>> = LazyLock::new(|| {
    GENERAL_LETTER_RANKS
        .iter()
        .map(|(&letter, &rank)| (letter, ((rank + 2) as f64).ln() * 2.0))
        .collect()
});

/// Age-aware scorer on general-corpus letter frequencies
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImprovedScorer;

impl ComplexityScorer for ImprovedScorer {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Improved
    }

    fn linguistic_complexity(&self, text: &str, _age: u8) -> f64 {
        let words = words(text);
        if words.is_empty() {
            return 0.0;
        }

        let total_words = words.len() as f64;
        let total_chars: usize = words.iter().map(|w| w.chars().count()).sum();

        let mut syllable_complexities = Vec::new();
        let mut syllable_count = 0usize;
        let mut lexical = 0.0;
        let mut morphological = 0.0;
        let mut phonetic = 0.0;

        for word in &words {
            let lower = word.to_lowercase();
            let syllables = split_syllables(&lower);
            syllable_count += syllables.len();

            syllable_complexities.extend(
                syllables
                    .iter()
                    .map(|s| syllable_complexity(&SyllableShape::of(s))),
            );

            lexical += word_lexical_complexity(&lower);
            morphological += morphological_penalty(&lower);
            phonetic += phonetic_penalty(&lower);
        }

        let syllable_score = if syllable_complexities.is_empty() {
            0.0
        } else {
            let avg = syllable_complexities.iter().sum::<f64>() / syllable_complexities.len() as f64;
            (avg * 4.0).min(30.0)
        };

        let avg_syllables_per_word = syllable_count as f64 / total_words;
        let avg_word_length = total_chars as f64 / total_words;
        let structural_score =
            ((avg_syllables_per_word - 1.0) * 5.0 + (avg_word_length - 3.0) * 2.0).min(20.0);

        let lexical_score = (lexical / total_words * 2.0).min(25.0);
        let morphological_score = (morphological * 0.5).min(15.0);
        let phonetic_score = (phonetic * 0.3).min(10.0);

        tracing::trace!(
            syllable_score,
            structural_score,
            lexical_score,
            morphological_score,
            phonetic_score,
            "improved components"
        );

        syllable_score + structural_score + lexical_score + morphological_score + phonetic_score
    }

    fn component_weights(&self) -> &'static [(Component, f64)] {
        &COMPONENT_WEIGHTS
    }
}

/// Syllable difficulty: consonant clusters, signs, vowel pairs, length buckets
fn syllable_complexity(shape: &SyllableShape) -> f64 {
    let mut complexity = 0usize;

    complexity += match shape.consonants {
        0 | 1 => 0,
        2 => 1,
        _ => 3,
    };
    complexity += shape.signs * 2;
    complexity += shape.vowel_pairs * 2;
    complexity += match shape.len {
        0..=3 => 0,
        4 => 1,
        _ => 2,
    };

    complexity as f64
}

/// Mean letter difficulty of a lower-case word
fn word_lexical_complexity(word: &str) -> f64 {
    let len = word.chars().count();
    if len == 0 {
        return 0.0;
    }
    let sum: f64 = word
        .chars()
        .map(|c| {
            LETTER_COMPLEXITY
                .get(&c)
                .copied()
                .unwrap_or(UNKNOWN_LETTER_COMPLEXITY)
        })
        .sum();
    sum / len as f64
}

/// Long-word and suffix penalty of a lower-case word
fn morphological_penalty(word: &str) -> f64 {
    let len = word.chars().count();
    let mut penalty = if len > 7 {
        2.0
    } else if len > 5 {
        1.0
    } else {
        0.0
    };

    if COMPLEX_SUFFIXES.iter().any(|suffix| word.ends_with(suffix)) {
        penalty += 2.0;
    }
    penalty
}

/// Sum of penalties for every difficult combination present in the word
fn phonetic_penalty(word: &str) -> f64 {
    DIFFICULT_COMBINATIONS
        .iter()
        .filter(|(combination, _)| word.contains(combination))
        .map(|&(_, penalty)| penalty)
        .sum()
}

/// Legacy score next to the improved score for the same text
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LegacyComparison {
    pub text: String,
    pub age: u8,
    pub include_cognitive_load: bool,
    pub old_algorithm: u32,
    pub new_algorithm: u32,
    pub difference: i64,
}

/// Compare the legacy scorer with the improved scorer
pub fn compare_with_legacy(text: &str, age: u8, include_cognitive_load: bool) -> LegacyComparison {
    let old_algorithm = LegacyScorer::default().score(text);
    let new_algorithm = ImprovedScorer.score(text, age, include_cognitive_load);

    LegacyComparison {
        text: text.to_string(),
        age,
        include_cognitive_load,
        old_algorithm,
        new_algorithm,
        difference: i64::from(new_algorithm) - i64::from(old_algorithm),
    }
}

/// Full assessment for an age: the improved breakdown with cognitive load
pub fn complexity_for_age(text: &str, age: u8) -> ComplexityBreakdown {
    ImprovedScorer.breakdown(text, age, true)
}
