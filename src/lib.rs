//! Slogovik - syllable drills and reading difficulty for Russian phrases
//!
//! Splits words into syllables for a three-level reading drill
//! (syllables → hyphenated words → full text) and scores how hard a short
//! text is for a child aged 6-11. Everything here is pure and synchronous;
//! tables are built once and never mutated.

pub mod complexity;
pub mod config;
pub mod text;

pub use complexity::{
    age_thresholds_info, calculate_complexity, compare_algorithms, complexity_breakdown,
    complexity_emoji, Algorithm, AlgorithmComparison, ComplexityBreakdown, ComplexityRating,
};
pub use config::Settings;
pub use text::{process_text, split_syllables, TextLevels};
