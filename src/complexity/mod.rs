//! Complexity Module: reading-difficulty scoring for children aged 6-11
//!
//! # Components
//! - `tables.rs`: Letter, letter-pair and age tables
//! - `legacy.rs`: Fixed-weight scorer (syllables + length + structure + rare letters)
//! - `cognitive.rs`: Age-scaled reading load from text length
//! - `improved.rs`: Age-aware scorer with morphology and phonetic penalties
//! - `children.rs`: Scorer tuned on children's literature (letter pairs, age multipliers)
//! - `facade.rs`: Algorithm selection, breakdowns and comparisons
//! - `rating.rs`: Age thresholds and emoji ratings for display

pub mod children;
pub mod cognitive;
pub mod facade;
pub mod improved;
pub mod legacy;
pub mod rating;
pub mod tables;

use serde::{Deserialize, Serialize};

use crate::text::{is_sign, is_vowel};

pub use children::ChildrenScorer;
pub use cognitive::cognitive_load;
pub use facade::{
    calculate_complexity, compare_algorithms, complexity_breakdown, AlgorithmComparison,
};
pub use improved::ImprovedScorer;
pub use legacy::{LegacyScorer, RareLetterModel};
pub use rating::{age_thresholds_info, complexity_emoji, ComplexityRating};

/// Youngest supported reader age
pub const MIN_AGE: u8 = 6;
/// Oldest supported reader age
pub const MAX_AGE: u8 = 11;
/// Age used when none is configured
pub const DEFAULT_AGE: u8 = 8;

/// Clamp an age into the supported 6-11 range
pub fn clamp_age(age: u8) -> u8 {
    age.clamp(MIN_AGE, MAX_AGE)
}

/// Coarse age groups for letter multipliers and display thresholds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBand {
    /// 6 and younger
    UpToSix,
    /// 7-8
    SevenToEight,
    /// 9 and older
    NineAndOlder,
}

impl AgeBand {
    pub fn from_age(age: u8) -> Self {
        match age {
            ..=6 => AgeBand::UpToSix,
            7..=8 => AgeBand::SevenToEight,
            _ => AgeBand::NineAndOlder,
        }
    }
}

/// Scoring algorithm
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Fixed weights, no age; floors at 1
    Legacy,
    /// Age-aware scorer on general-corpus frequencies
    Improved,
    /// Age-aware scorer on children's-literature frequencies
    Children,
}

impl Algorithm {
    /// Score a text with this algorithm. Legacy ignores age and cognitive load.
    pub fn score(self, text: &str, age: u8, include_cognitive_load: bool) -> u32 {
        match self {
            Algorithm::Legacy => LegacyScorer::default().score(text),
            Algorithm::Improved => ImprovedScorer.score(text, age, include_cognitive_load),
            Algorithm::Children => ChildrenScorer.score(text, age, include_cognitive_load),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Legacy => "legacy",
            Algorithm::Improved => "improved",
            Algorithm::Children => "children",
        }
    }
}

/// Named share of the linguistic complexity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    Syllable,
    Structural,
    Lexical,
    Morphological,
    Phonetic,
    Bigram,
}

impl Component {
    pub fn label(self) -> &'static str {
        match self {
            Component::Syllable => "syllable",
            Component::Structural => "structural",
            Component::Lexical => "lexical",
            Component::Morphological => "morphological",
            Component::Phonetic => "phonetic",
            Component::Bigram => "bigram",
        }
    }
}

/// One component of a breakdown with its value
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ComponentShare {
    pub component: Component,
    pub value: f64,
}

/// Detailed view of a complexity score for display.
///
/// Component values are fixed proportions of the linguistic subtotal, not
/// independently recomputed sub-scores.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComplexityBreakdown {
    pub text: String,
    pub age: u8,
    pub algorithm: Algorithm,
    pub words: usize,
    pub linguistic_complexity: u32,
    pub cognitive_load: f64,
    pub total_complexity: f64,
    pub components: Vec<ComponentShare>,
}

impl ComplexityBreakdown {
    /// Value of a named component, if this algorithm reports it
    pub fn component(&self, component: Component) -> Option<f64> {
        self.components
            .iter()
            .find(|share| share.component == component)
            .map(|share| share.value)
    }
}

/// An age-aware scoring strategy
pub trait ComplexityScorer {
    /// Which algorithm this is
    fn algorithm(&self) -> Algorithm;

    /// Linguistic complexity before truncation, for a non-blank text.
    /// May be slightly negative for texts of very short frequent words.
    fn linguistic_complexity(&self, text: &str, age: u8) -> f64;

    /// Fixed proportions used to split the linguistic subtotal in breakdowns
    fn component_weights(&self) -> &'static [(Component, f64)];

    /// Integer score: linguistic complexity plus, optionally, cognitive load
    fn score(&self, text: &str, age: u8, include_cognitive_load: bool) -> u32 {
        if text.trim().is_empty() {
            return 0;
        }
        let age = clamp_age(age);

        let linguistic = self.linguistic_complexity(text, age);
        let total = if include_cognitive_load {
            linguistic + cognitive_load(text, age)
        } else {
            linguistic
        };

        tracing::debug!(
            algorithm = self.algorithm().name(),
            age,
            linguistic,
            total,
            "scored text"
        );

        to_score(total)
    }

    /// Breakdown of the score into linguistic, cognitive and component shares
    fn breakdown(&self, text: &str, age: u8, include_cognitive_load: bool) -> ComplexityBreakdown {
        let age = clamp_age(age);
        let linguistic_complexity = self.score(text, age, false);
        let cognitive_load = if include_cognitive_load {
            cognitive_load(text, age)
        } else {
            0.0
        };

        let components = self
            .component_weights()
            .iter()
            .map(|&(component, weight)| ComponentShare {
                component,
                value: f64::from(linguistic_complexity) * weight,
            })
            .collect();

        ComplexityBreakdown {
            text: text.to_string(),
            age,
            algorithm: self.algorithm(),
            words: text.split_whitespace().count(),
            linguistic_complexity,
            cognitive_load,
            total_complexity: f64::from(linguistic_complexity) + cognitive_load,
            components,
        }
    }
}

/// Truncate a raw score toward zero, never below zero
pub(crate) fn to_score(raw: f64) -> u32 {
    raw.max(0.0) as u32
}

/// Shape of one syllable, as used by every scorer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SyllableShape {
    /// Non-vowel characters other than ь/ъ
    pub consonants: usize,
    /// Count of ь and ъ
    pub signs: usize,
    /// Adjacent vowel pairs
    pub vowel_pairs: usize,
    /// Length in characters
    pub len: usize,
}

impl SyllableShape {
    pub fn of(syllable: &str) -> Self {
        let chars: Vec<char> = syllable.chars().collect();
        SyllableShape {
            consonants: chars
                .iter()
                .filter(|&&c| !is_vowel(c) && !is_sign(c))
                .count(),
            signs: chars.iter().filter(|&&c| is_sign(c)).count(),
            vowel_pairs: chars
                .windows(2)
                .filter(|pair| is_vowel(pair[0]) && is_vowel(pair[1]))
                .count(),
            len: chars.len(),
        }
    }
}

/// Whitespace-delimited words of a text, as written
pub(crate) fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}
