//! Text segmentation into the three drill levels
//!
//! Levels:
//! - 1: every syllable of every word, in reading order
//! - 2: every word split into syllables with hyphens
//! - 3: every word as written, then the whole text on one line

use serde::Serialize;

use super::syllables::split_syllables;

/// Display name of the syllables level
pub const SYLLABLES_LEVEL_NAME: &str = "Слоги";
/// Display name of the hyphenated-words level
pub const HYPHENATED_LEVEL_NAME: &str = "Слова по слогам";
/// Display name of the full-text level
pub const FULL_TEXT_LEVEL_NAME: &str = "Полный текст";

/// Quotes and ellipsis stripped alongside ASCII punctuation
const EXTRA_PUNCTUATION: [char; 5] = ['«', '»', '„', '“', '…'];

/// Line separators recognised when joining multi-line text
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}', '\u{2029}',
];

/// One drill level: a display name and its ordered entries
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    pub level_name: &'static str,
    pub words: Vec<String>,
}

impl Level {
    fn new(level_name: &'static str, words: Vec<String>) -> Self {
        Level { level_name, words }
    }
}

/// All three drill levels for one text
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TextLevels {
    #[serde(rename = "1")]
    pub syllables: Level,
    #[serde(rename = "2")]
    pub hyphenated: Level,
    #[serde(rename = "3")]
    pub full_text: Level,
}

impl TextLevels {
    /// Look up a level by its number (1, 2 or 3)
    pub fn level(&self, number: u8) -> Option<&Level> {
        match number {
            1 => Some(&self.syllables),
            2 => Some(&self.hyphenated),
            3 => Some(&self.full_text),
            _ => None,
        }
    }

    /// Iterate levels in drill order, paired with their numbers
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Level)> {
        [(1, &self.syllables), (2, &self.hyphenated), (3, &self.full_text)].into_iter()
    }
}

/// Check if a character is stripped as punctuation around a word
pub fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() || EXTRA_PUNCTUATION.contains(&c)
}

/// Display form of a token: trailing punctuation removed, case kept
pub fn display_form(token: &str) -> &str {
    token.trim_end_matches(is_punctuation)
}

/// Phonetic form of a token: surrounding punctuation removed, lower-cased
pub fn phonetic_form(token: &str) -> String {
    token.trim_matches(is_punctuation).to_lowercase()
}

/// Join the non-empty lines of a text with single spaces
pub fn unify_lines(text: &str) -> String {
    text.split(|c: char| LINE_BREAKS.contains(&c))
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Hyphenate a single token ("Семья," → "семь-я")
pub fn hyphenate_word(token: &str) -> String {
    split_syllables(&phonetic_form(token)).join("-")
}

/// Split a hyphenated word back into syllables; `""` gives `[""]`
pub fn split_hyphenated(word: &str) -> Vec<String> {
    word.split('-').map(str::to_string).collect()
}

/// Build only the full-text level
pub fn full_text_level(text: &str) -> Level {
    let mut words: Vec<String> = text
        .split_whitespace()
        .map(display_form)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect();
    words.push(unify_lines(text));

    Level::new(FULL_TEXT_LEVEL_NAME, words)
}

/// Segment a text into all three drill levels
pub fn process_text(text: &str) -> TextLevels {
    let mut all_syllables = Vec::new();
    let mut hyphenated_words = Vec::new();

    for token in text.split_whitespace() {
        let syllables = split_syllables(&phonetic_form(token));
        if syllables.is_empty() {
            continue;
        }

        hyphenated_words.push(syllables.join("-"));
        all_syllables.extend(syllables);
    }

    tracing::trace!(
        syllables = all_syllables.len(),
        words = hyphenated_words.len(),
        "segmented text"
    );

    TextLevels {
        syllables: Level::new(SYLLABLES_LEVEL_NAME, all_syllables),
        hyphenated: Level::new(HYPHENATED_LEVEL_NAME, hyphenated_words),
        full_text: full_text_level(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_sentence() {
        let levels = process_text("Мама мыла раму.");
        assert_eq!(levels.syllables.words, ["ма", "ма", "мы", "ла", "ра", "му"]);
        assert_eq!(levels.hyphenated.words, ["ма-ма", "мы-ла", "ра-му"]);
        assert_eq!(
            levels.full_text.words,
            ["Мама", "мыла", "раму", "Мама мыла раму."]
        );
    }

    #[test]
    fn test_level_names_and_lookup() {
        let levels = process_text("Саша ест кашу.");
        assert_eq!(levels.level(1).map(|l| l.level_name), Some("Слоги"));
        assert_eq!(levels.level(2).map(|l| l.level_name), Some("Слова по слогам"));
        assert_eq!(levels.level(3).map(|l| l.level_name), Some("Полный текст"));
        assert!(levels.level(4).is_none());
        assert_eq!(levels.hyphenated.words, ["са-ша", "ест", "ка-шу"]);
    }

    #[test]
    fn test_multiline_text_is_joined() {
        let text = "Мама любит папу.\n   Папа любит маму.\n\n";
        let levels = process_text(text);
        assert_eq!(
            levels.full_text.words.last().map(String::as_str),
            Some("Мама любит папу. Папа любит маму.")
        );
    }

    #[test]
    fn test_punctuation_only_tokens_are_dropped() {
        let levels = process_text("Кот ... спит !");
        assert_eq!(levels.hyphenated.words, ["кот", "спит"]);
        assert_eq!(levels.full_text.words, ["Кот", "спит", "Кот ... спит !"]);
    }

    #[test]
    fn test_leading_punctuation_kept_in_display_form() {
        assert_eq!(display_form("«Привет»,"), "«Привет");
        assert_eq!(phonetic_form("«Привет»,"), "привет");
    }

    #[test]
    fn test_full_text_level() {
        let level = full_text_level("Привет, мир!");
        assert_eq!(level.words, ["Привет", "мир", "Привет, мир!"]);
    }

    #[test]
    fn test_empty_text() {
        let levels = process_text("");
        assert!(levels.syllables.words.is_empty());
        assert!(levels.hyphenated.words.is_empty());
        assert_eq!(levels.full_text.words, [""]);
    }

    #[test]
    fn test_hyphenate_word() {
        assert_eq!(hyphenate_word("семья"), "семь-я");
        assert_eq!(hyphenate_word("кот"), "кот");
        assert_eq!(hyphenate_word(""), "");
        assert_eq!(hyphenate_word("Папа!"), "па-па");
        assert_eq!(hyphenate_word("веселятся"), "ве-се-лят-ся");
    }

    #[test]
    fn test_split_hyphenated() {
        assert_eq!(split_hyphenated("семь-я"), ["семь", "я"]);
        assert_eq!(split_hyphenated("кот"), ["кот"]);
        assert_eq!(split_hyphenated(""), [""]);
    }

    #[test]
    fn test_levels_serialize_by_number() {
        let json = serde_json::to_value(process_text("папа")).unwrap();
        assert_eq!(json["1"]["levelName"], "Слоги");
        assert_eq!(json["2"]["words"][0], "па-па");
    }
}
