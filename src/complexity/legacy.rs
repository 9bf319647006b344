//! Legacy fixed-weight complexity scorer
//!
//! Four components, no age adjustment:
//! - syllable shape (0-50)
//! - text length (0-20)
//! - word structure (0-15)
//! - rare letters / letter order (0-15)
//!
//! The total is clamped to [1, 100], so even an empty text scores 1.

use super::tables::{general_max_frequency, GENERAL_FREQUENCY_MAP, GENERAL_LETTER_RANKS};
use super::{words, SyllableShape};
use crate::text::{is_sign, split_syllables};

/// Letters counted by the rare-letter model
const RARE_LETTERS: [char; 8] = ['ё', 'э', 'ъ', 'ф', 'ц', 'щ', 'ш', 'ч'];

/// Letter pairs that earn a bonus in the letter-order model
const DIFFICULT_DIGRAPHS: [&str; 7] = ["чк", "чн", "щн", "жы", "шы", "чя", "щя"];

/// Letter-order score of a character outside the alphabet
const UNKNOWN_LETTER_ORDER: f64 = 5.0;

/// How the fourth component rates letters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RareLetterModel {
    /// Share of rare letters among all characters
    RareLetters,
    /// Rank of each letter in the general frequency ordering
    LetterOrder {
        /// Scale each rank up for letters with low frequency
        frequency_weighted: bool,
        /// Add bonuses for difficult digraphs and for ь/ъ
        digraph_bonus: bool,
    },
}

impl Default for RareLetterModel {
    fn default() -> Self {
        RareLetterModel::LetterOrder {
            frequency_weighted: true,
            digraph_bonus: true,
        }
    }
}

/// Fixed-weight scorer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LegacyScorer {
    pub rare_letter_model: RareLetterModel,
}

impl LegacyScorer {
    pub fn new(rare_letter_model: RareLetterModel) -> Self {
        LegacyScorer { rare_letter_model }
    }

    /// Score a text in [1, 100]
    pub fn score(&self, text: &str) -> u32 {
        let words = words(text);
        let total_words = words.len();
        let total_chars: usize = words.iter().map(|w| w.chars().count()).sum();

        let mut syllable_complexities = Vec::new();
        let mut syllables_per_word = Vec::with_capacity(total_words);

        for word in &words {
            let syllables = split_syllables(word);
            syllables_per_word.push(syllables.len());

            for syllable in &syllables {
                syllable_complexities.push(syllable_complexity(&SyllableShape::of(syllable)));
            }
        }

        let syllable_score = (mean(&syllable_complexities) * 3.0).min(50.0);

        let length_score =
            (((total_words as f64 + total_chars as f64 / 20.0 + 1.0).ln() * 3.0).min(20.0)).trunc();

        let per_word: Vec<f64> = syllables_per_word.iter().map(|&n| n as f64).collect();
        let structure_score = (mean(&per_word) * 3.0).min(15.0);

        let rare_score = self.rare_letter_score(&words, total_chars);

        let total = syllable_score + length_score + structure_score + rare_score;
        tracing::debug!(
            syllable_score,
            length_score,
            structure_score,
            rare_score,
            total,
            "legacy score"
        );

        (total as i64).clamp(1, 100) as u32
    }

    /// Fourth component (0-15)
    fn rare_letter_score(&self, words: &[&str], total_chars: usize) -> f64 {
        if total_chars == 0 {
            return 0.0;
        }

        match self.rare_letter_model {
            RareLetterModel::RareLetters => {
                let rare = words
                    .iter()
                    .flat_map(|w| w.to_lowercase().chars().collect::<Vec<_>>())
                    .filter(|c| RARE_LETTERS.contains(c))
                    .count();
                (rare as f64 / total_chars as f64 * 100.0).min(15.0)
            }
            RareLetterModel::LetterOrder {
                frequency_weighted,
                digraph_bonus,
            } => {
                let max_frequency = general_max_frequency();
                let mut order_sum = 0.0;
                let mut bonus = 0.0;

                for word in words {
                    let lower = word.to_lowercase();
                    for c in lower.chars() {
                        let mut order = letter_order(c);
                        if frequency_weighted {
                            if let Some(freq) = GENERAL_FREQUENCY_MAP.get(&c) {
                                order *= 1.0 + 0.5 * (1.0 - freq / max_frequency);
                            }
                        }
                        order_sum += order;
                    }

                    if digraph_bonus {
                        bonus += 2.0 * count_digraphs(&lower) as f64;
                        bonus += lower.chars().filter(|&c| is_sign(c)).count() as f64;
                    }
                }

                (order_sum / total_chars as f64 + bonus).min(15.0)
            }
        }
    }
}

/// Complexity of one syllable: capped consonants, signs, vowel pairs, length
fn syllable_complexity(shape: &SyllableShape) -> f64 {
    let length_score = if shape.len >= 3 {
        (shape.len - 2) * 5
    } else {
        0
    };
    (shape.consonants.min(3) + shape.signs + shape.vowel_pairs + length_score) as f64
}

/// Rank-based score in (0, 10]: later in the frequency ordering is harder
fn letter_order(c: char) -> f64 {
    let letters = GENERAL_LETTER_RANKS.len() as f64;
    GENERAL_LETTER_RANKS
        .get(&c)
        .map(|&rank| (rank + 1) as f64 / letters * 10.0)
        .unwrap_or(UNKNOWN_LETTER_ORDER)
}

/// Occurrences of difficult digraphs in a lower-case word
fn count_digraphs(word: &str) -> usize {
    let chars: Vec<char> = word.chars().collect();
    chars
        .windows(2)
        .filter(|pair| {
            DIFFICULT_DIGRAPHS.iter().any(|digraph| {
                let mut d = digraph.chars();
                d.next() == Some(pair[0]) && d.next() == Some(pair[1])
            })
        })
        .count()
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rare_letters() -> LegacyScorer {
        LegacyScorer::new(RareLetterModel::RareLetters)
    }

    #[test]
    fn test_empty_text_scores_one() {
        assert_eq!(LegacyScorer::default().score(""), 1);
        assert_eq!(rare_letters().score("   "), 1);
    }

    #[test]
    fn test_simple_sentence_is_near_twenty() {
        let score = LegacyScorer::default().score("Мама мыла раму");
        assert!(score.abs_diff(20) <= 10, "got {score}");
        assert_eq!(rare_letters().score("Мама мыла раму"), 13);
    }

    #[test]
    fn test_reference_sentences_within_tolerance() {
        let cases = [
            ("Кот спит на диване.", 23),
            ("собака", 22),
            ("книга", 21),
            ("семья", 21),
        ];
        for (text, expected) in cases {
            let score = rare_letters().score(text);
            assert!(score.abs_diff(expected) <= 10, "{text}: got {score}");
        }
    }

    #[test]
    fn test_letter_order_ranks() {
        assert!((letter_order('о') - 10.0 / 33.0).abs() < 1e-12);
        assert_eq!(letter_order('ё'), 10.0);
        assert_eq!(letter_order('7'), UNKNOWN_LETTER_ORDER);
    }

    #[test]
    fn test_digraph_count() {
        assert_eq!(count_digraphs("дочка"), 1);
        assert_eq!(count_digraphs("мама"), 0);
        assert_eq!(count_digraphs("чкчн"), 2);
    }

    #[test]
    fn test_digraph_bonus_raises_score() {
        let plain = LegacyScorer::new(RareLetterModel::LetterOrder {
            frequency_weighted: true,
            digraph_bonus: false,
        });
        let text = "дочка съела";
        assert!(LegacyScorer::default().score(text) > plain.score(text));
    }

    #[test]
    fn test_score_is_capped_at_hundred() {
        let text = "всхлипывающийсясверхпрочнейший ".repeat(30);
        assert!(LegacyScorer::default().score(&text) <= 100);
    }
}
