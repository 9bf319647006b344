//! Complexity scorer tuned on children's literature
//!
//! Same structure as the improved scorer, with:
//! - letter ranks from a children's corpus, scaled by per-age letter multipliers
//! - a letter-pair component (0-15) from children's bigram frequencies
//! - age factors on syllables and morphology
//! - rebalanced caps: syllable 0-30, structure 0-20, lexical 0-25, morphology 0-10

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use super::improved::COMPLEX_SUFFIXES;
use super::tables::{age_adjustment_table, children_bigram_frequency, CHILDREN_LETTER_RANKS};
use super::{words, AgeBand, Algorithm, Component, ComplexityScorer, SyllableShape};
use crate::text::split_syllables;

/// Lexical difficulty of a character outside the alphabet
const UNKNOWN_LETTER_COMPLEXITY: f64 = 6.0;

static COMPONENT_WEIGHTS: [(Component, f64); 5] = [
    (Component::Syllable, 0.30),
    (Component::Structural, 0.20),
    (Component::Lexical, 0.25),
    (Component::Bigram, 0.15),
    (Component::Morphological, 0.10),
];

/// Letter difficulty per age band: ln(rank + 2) * 1.8 * age multiplier
static LETTER_COMPLEXITY: LazyLock<[FxHashMap<char, f64>; 3]> = LazyLock::new(|| {
    [
        AgeBand::UpToSix,
        AgeBand::SevenToEight,
        AgeBand::NineAndOlder,
    ]
    .map(letter_complexity_for)
});

fn letter_complexity_for(band: AgeBand) -> FxHashMap<char, f64> {
    let adjustment = age_adjustment_table(band);
    CHILDREN_LETTER_RANKS
        .iter()
        .map(|(&letter, &rank)| {
            let base = ((rank + 2) as f64).ln() * 1.8;
            let factor = adjustment.get(&letter).copied().unwrap_or(1.0);
            (letter, base * factor)
        })
        .collect()
}

fn letter_complexity(band: AgeBand) -> &'static FxHashMap<char, f64> {
    let index = match band {
        AgeBand::UpToSix => 0,
        AgeBand::SevenToEight => 1,
        AgeBand::NineAndOlder => 2,
    };
    &LETTER_COMPLEXITY[index]
}

/// Syllables read harder for younger children
fn syllable_age_factor(age: u8) -> f64 {
    if age <= 6 {
        1.3
    } else if age <= 8 {
        1.1
    } else {
        1.0
    }
}

/// Age-aware scorer on children's-literature frequencies
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChildrenScorer;

impl ComplexityScorer for ChildrenScorer {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Children
    }

    fn linguistic_complexity(&self, text: &str, age: u8) -> f64 {
        let words = words(text);
        if words.is_empty() {
            return 0.0;
        }

        let letters = letter_complexity(AgeBand::from_age(age));
        let syllable_factor = syllable_age_factor(age);

        let total_words = words.len() as f64;
        let total_chars: usize = words.iter().map(|w| w.chars().count()).sum();

        let mut syllable_complexities = Vec::new();
        let mut syllable_count = 0usize;
        let mut lexical = 0.0;
        let mut bigram = 0.0;
        let mut morphological = 0.0;

        for word in &words {
            let lower = word.to_lowercase();
            let syllables = split_syllables(&lower);
            syllable_count += syllables.len();

            syllable_complexities.extend(
                syllables
                    .iter()
                    .map(|s| syllable_complexity(&SyllableShape::of(s)) * syllable_factor),
            );

            lexical += word_lexical_complexity(&lower, letters);
            bigram += word_bigram_complexity(&lower);
            morphological += morphological_penalty(&lower, age);
        }

        let syllable_score = if syllable_complexities.is_empty() {
            0.0
        } else {
            let avg = syllable_complexities.iter().sum::<f64>() / syllable_complexities.len() as f64;
            (avg * 3.5).min(30.0)
        };

        let avg_syllables_per_word = syllable_count as f64 / total_words;
        let avg_word_length = total_chars as f64 / total_words;
        let structural_score =
            ((avg_syllables_per_word - 1.0) * 4.0 + (avg_word_length - 3.0) * 1.5).min(20.0);

        let lexical_score = (lexical / total_words * 1.8).min(25.0);
        let bigram_score = (bigram / total_words * 0.8).min(15.0);
        let morphological_score = (morphological * 0.4).min(10.0);

        tracing::trace!(
            age,
            syllable_score,
            structural_score,
            lexical_score,
            bigram_score,
            morphological_score,
            "children components"
        );

        syllable_score + structural_score + lexical_score + bigram_score + morphological_score
    }

    fn component_weights(&self) -> &'static [(Component, f64)] {
        &COMPONENT_WEIGHTS
    }
}

/// Syllable difficulty before the age factor: consonant clusters and signs
fn syllable_complexity(shape: &SyllableShape) -> f64 {
    let clusters = match shape.consonants {
        0 | 1 => 0,
        2 => 1,
        _ => 3,
    };
    (clusters + shape.signs * 2) as f64
}

/// Mean age-adjusted letter difficulty of a lower-case word
fn word_lexical_complexity(word: &str, letters: &FxHashMap<char, f64>) -> f64 {
    let len = word.chars().count();
    if len == 0 {
        return 0.0;
    }
    let sum: f64 = word
        .chars()
        .map(|c| letters.get(&c).copied().unwrap_or(UNKNOWN_LETTER_COMPLEXITY))
        .sum();
    sum / len as f64
}

/// Summed letter-pair difficulty of a lower-case word; rarer pairs are harder
fn word_bigram_complexity(word: &str) -> f64 {
    let chars: Vec<char> = word.chars().collect();
    chars
        .windows(2)
        .map(|pair| {
            let bigram: String = pair.iter().collect();
            let freq = children_bigram_frequency(&bigram);
            (-freq.ln() * 0.5).max(1.0)
        })
        .sum()
}

/// Long-word and suffix penalty, heavier for younger readers
fn morphological_penalty(word: &str, age: u8) -> f64 {
    let len = word.chars().count();
    let mut penalty = if len > 7 {
        2.0 * if age <= 7 { 1.2 } else { 1.0 }
    } else if len > 5 {
        if age <= 7 {
            1.1
        } else {
            1.0
        }
    } else {
        0.0
    };

    if COMPLEX_SUFFIXES.iter().any(|suffix| word.ends_with(suffix)) {
        let factor = if age <= 7 {
            1.5
        } else if age <= 9 {
            1.2
        } else {
            1.0
        };
        penalty += 2.0 * factor;
    }
    penalty
}
