//! Text Module: syllables and drill levels
//!
//! # Components
//! - `syllables.rs`: Vowel-position syllable splitter
//! - `segment.rs`: Tokenizing text into the three drill levels

pub mod segment;
pub mod syllables;

pub use segment::{
    full_text_level, hyphenate_word, process_text, split_hyphenated, unify_lines, Level,
    TextLevels,
};
pub use syllables::{is_sign, is_vowel, split_syllables};
