//! Static frequency and age tables
//!
//! Three corpora, all as relative frequencies in percent:
//! - general Russian letters (modern corpora)
//! - letters in children's literature
//! - letter pairs in children's literature
//!
//! Tables are listed in their source order; ties are ranked in that order.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use super::AgeBand;

/// Lower-case Russian alphabet (33 letters)
pub const RUSSIAN_ALPHABET: &str = "абвгдеёжзийклмнопрстуфхцчшщъыьэюя";

/// Letter frequencies in general Russian text
#[rustfmt::skip]
pub static GENERAL_LETTER_FREQUENCY: [(char, f64); 33] = [
    ('о', 10.97), ('е', 8.45), ('а', 8.01), ('и', 7.35), ('н', 6.70),
    ('т', 6.26), ('с', 5.47), ('р', 4.73), ('в', 4.54), ('л', 4.40),
    ('к', 3.49), ('м', 3.21), ('д', 2.98), ('п', 2.81), ('у', 2.62),
    ('я', 2.01), ('ы', 1.90), ('ь', 1.74), ('г', 1.70), ('з', 1.65),
    ('б', 1.59), ('ч', 1.44), ('й', 1.21), ('х', 0.97), ('ж', 0.94),
    ('ю', 0.64), ('ш', 0.73), ('ц', 0.48), ('щ', 0.36), ('э', 0.32),
    ('ф', 0.26), ('ъ', 0.04), ('ё', 0.04),
];

/// Letter frequencies in children's literature and primary-school textbooks
#[rustfmt::skip]
pub static CHILDREN_LETTER_FREQUENCY: [(char, f64); 33] = [
    // vowels
    ('а', 8.2), ('о', 10.8), ('е', 8.6), ('и', 7.5), ('у', 2.8),
    ('ы', 1.7), ('я', 2.2), ('ю', 0.6), ('ё', 0.05), ('э', 0.3),
    // frequent consonants
    ('н', 6.9), ('т', 6.4), ('с', 5.6), ('р', 4.9), ('в', 4.6),
    ('л', 4.7), ('к', 3.6), ('м', 3.4), ('д', 3.1), ('п', 2.9),
    // mid-frequency consonants
    ('б', 1.7), ('г', 1.8), ('з', 1.7), ('й', 1.3), ('ч', 1.5),
    ('ж', 1.0), ('ш', 0.8), ('х', 0.9),
    // rare consonants
    ('ц', 0.4), ('щ', 0.3), ('ф', 0.2),
    // signs
    ('ь', 1.8), ('ъ', 0.03),
];

/// Letter-pair frequencies in children's literature
#[rustfmt::skip]
pub static CHILDREN_BIGRAM_FREQUENCY: [(&str, f64); 30] = [
    // common and easy
    ("то", 3.2), ("на", 2.8), ("ст", 2.1), ("не", 2.0), ("ко", 1.8),
    ("ро", 1.6), ("ла", 1.5), ("во", 1.4), ("ма", 1.3), ("ле", 1.2),
    ("ра", 1.1), ("та", 1.0), ("са", 0.9), ("по", 0.9), ("ли", 0.8),
    // hard for children
    ("нн", 0.3), ("тс", 0.2), ("ск", 0.4), ("сл", 0.3), ("зн", 0.2),
    ("дн", 0.3), ("рт", 0.2), ("нт", 0.3), ("кт", 0.2), ("пт", 0.1),
    // very hard
    ("щн", 0.05), ("жн", 0.03), ("шн", 0.04), ("зч", 0.02), ("тч", 0.03),
];

/// Frequency assumed for a letter pair missing from the table
pub const UNKNOWN_BIGRAM_FREQUENCY: f64 = 0.01;

/// Per-letter difficulty multipliers for children aged 6 and younger
#[rustfmt::skip]
static AGE_SIX_ADJUSTMENT: [(char, f64); 9] = [
    ('ъ', 2.0), ('ь', 1.5), ('ё', 1.8), ('ю', 1.4), ('я', 1.3),
    ('щ', 1.6), ('ц', 1.5), ('ф', 1.7), ('х', 1.3),
];

/// Per-letter difficulty multipliers for children aged 7-8
#[rustfmt::skip]
static AGE_SEVEN_EIGHT_ADJUSTMENT: [(char, f64); 8] = [
    ('ъ', 1.8), ('ь', 1.3), ('ё', 1.5), ('ю', 1.2), ('я', 1.1),
    ('щ', 1.4), ('ц', 1.3), ('ф', 1.4),
];

/// Per-letter difficulty multipliers for children aged 9 and older
static AGE_NINE_PLUS_ADJUSTMENT: [(char, f64); 3] = [('ъ', 1.5), ('ё', 1.2), ('ф', 1.2)];

/// Letters with a difficulty multiplier above 1.0 for an age band
pub fn age_adjustments(band: AgeBand) -> &'static [(char, f64)] {
    match band {
        AgeBand::UpToSix => &AGE_SIX_ADJUSTMENT,
        AgeBand::SevenToEight => &AGE_SEVEN_EIGHT_ADJUSTMENT,
        AgeBand::NineAndOlder => &AGE_NINE_PLUS_ADJUSTMENT,
    }
}

/// Full age adjustment table: every letter of the alphabet with its multiplier
pub fn age_adjustment_table(band: AgeBand) -> FxHashMap<char, f64> {
    let mut table: FxHashMap<char, f64> = RUSSIAN_ALPHABET.chars().map(|c| (c, 1.0)).collect();
    table.extend(age_adjustments(band).iter().copied());
    table
}

/// Rank letters by descending frequency; equal frequencies keep table order
pub fn rank_by_frequency(table: &[(char, f64)]) -> Vec<char> {
    let mut sorted = table.to_vec();
    // stable sort
    sorted.sort_by(|a, b| b.1.total_cmp(&a.1));
    sorted.into_iter().map(|(letter, _)| letter).collect()
}

/// General-corpus frequency by letter
pub static GENERAL_FREQUENCY_MAP: LazyLock<FxHashMap<char, f64>> =
    LazyLock::new(|| GENERAL_LETTER_FREQUENCY.iter().copied().collect());

/// Rank (0 = most frequent) of each letter in the general corpus
pub static GENERAL_LETTER_RANKS: LazyLock<FxHashMap<char, usize>> = LazyLock::new(|| {
    rank_by_frequency(&GENERAL_LETTER_FREQUENCY)
        .into_iter()
        .enumerate()
        .map(|(rank, letter)| (letter, rank))
        .collect()
});

/// Rank (0 = most frequent) of each letter in children's literature
pub static CHILDREN_LETTER_RANKS: LazyLock<FxHashMap<char, usize>> = LazyLock::new(|| {
    rank_by_frequency(&CHILDREN_LETTER_FREQUENCY)
        .into_iter()
        .enumerate()
        .map(|(rank, letter)| (letter, rank))
        .collect()
});

/// Children's letter-pair frequencies
pub static CHILDREN_BIGRAMS: LazyLock<FxHashMap<&'static str, f64>> =
    LazyLock::new(|| CHILDREN_BIGRAM_FREQUENCY.iter().copied().collect());

/// Highest frequency in the general corpus
pub fn general_max_frequency() -> f64 {
    GENERAL_LETTER_FREQUENCY
        .iter()
        .map(|&(_, freq)| freq)
        .fold(0.0, f64::max)
}

/// Frequency of a letter pair in children's literature
pub fn children_bigram_frequency(bigram: &str) -> f64 {
    CHILDREN_BIGRAMS
        .get(bigram)
        .copied()
        .unwrap_or(UNKNOWN_BIGRAM_FREQUENCY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_cover_the_alphabet() {
        for letter in RUSSIAN_ALPHABET.chars() {
            assert!(GENERAL_LETTER_RANKS.contains_key(&letter), "{letter}");
            assert!(CHILDREN_LETTER_RANKS.contains_key(&letter), "{letter}");
        }
        assert_eq!(RUSSIAN_ALPHABET.chars().count(), 33);
    }

    #[test]
    fn test_general_ranking() {
        let ranked = rank_by_frequency(&GENERAL_LETTER_FREQUENCY);
        assert_eq!(ranked[0], 'о');
        assert_eq!(&ranked[24..27], &['ж', 'ш', 'ю']);
        // ъ and ё tie; ъ is listed first
        assert_eq!(&ranked[31..], &['ъ', 'ё']);
    }

    #[test]
    fn test_children_ranking_keeps_ties_in_order() {
        let ranked = rank_by_frequency(&CHILDREN_LETTER_FREQUENCY);
        let pos = |c: char| ranked.iter().position(|&l| l == c).unwrap();
        assert!(pos('г') < pos('ь'));
        assert!(pos('ы') < pos('б'));
        assert!(pos('б') < pos('з'));
        assert_eq!(ranked.last(), Some(&'ъ'));
    }

    #[test]
    fn test_age_adjustment_table() {
        let young = age_adjustment_table(AgeBand::UpToSix);
        assert_eq!(young.len(), 33);
        assert_eq!(young[&'ъ'], 2.0);
        assert_eq!(young[&'а'], 1.0);

        let older = age_adjustment_table(AgeBand::NineAndOlder);
        assert_eq!(older[&'ь'], 1.0);
        assert_eq!(older[&'ф'], 1.2);
    }

    #[test]
    fn test_bigram_lookup() {
        assert_eq!(children_bigram_frequency("то"), 3.2);
        assert_eq!(children_bigram_frequency("ыы"), UNKNOWN_BIGRAM_FREQUENCY);
        assert_eq!(general_max_frequency(), 10.97);
    }
}
