//! Syllable splitting for Russian words
//!
//! Vowel-position heuristic:
//! - Words with zero or one vowel (or a known monosyllable) stay whole
//! - A single consonant between vowels opens the next syllable
//! - Of a longer consonant run, only the last consonant opens the next syllable
//! - A run ending in ь/ъ stays with the previous syllable ("семья" → "семь-я")

/// Russian vowels
pub const VOWELS: &str = "аеёиоуыэюя";

/// Words that look bisyllabic to the heuristic but are read as one syllable
const SINGLE_SYLLABLE_WORDS: [&str; 5] = ["ест", "все", "в", "мяч", "суп"];

/// Check if a character is a Russian vowel (case-insensitive)
pub fn is_vowel(c: char) -> bool {
    c.to_lowercase().any(|lc| VOWELS.contains(lc))
}

/// Check if a character is the soft sign or the hard sign
pub fn is_sign(c: char) -> bool {
    matches!(c, 'ь' | 'ъ')
}

/// Split a word into syllables.
///
/// The word is lower-cased first. Concatenating the result gives back the
/// lower-cased word; an empty word gives an empty list.
pub fn split_syllables(word: &str) -> Vec<String> {
    let w = word.to_lowercase();
    if w.is_empty() {
        return vec![];
    }

    let chars: Vec<char> = w.chars().collect();
    let vowel_positions: Vec<usize> = chars
        .iter()
        .enumerate()
        .filter(|(_, &c)| is_vowel(c))
        .map(|(i, _)| i)
        .collect();

    if vowel_positions.len() <= 1 || SINGLE_SYLLABLE_WORDS.contains(&w.as_str()) {
        return vec![w];
    }

    let mut syllables = vec![chars[..=vowel_positions[0]].iter().collect::<String>()];

    for pair in vowel_positions.windows(2) {
        let (curr, next) = (pair[0], pair[1]);
        let run = &chars[curr + 1..next];
        let vowel = chars[next].to_string();

        match run {
            [] => syllables.push(vowel),
            [onset] => syllables.push(format!("{onset}{vowel}")),
            [.., last] if is_sign(*last) => {
                push_onto_last(&mut syllables, run);
                syllables.push(vowel);
            }
            [coda @ .., onset] => {
                push_onto_last(&mut syllables, coda);
                syllables.push(format!("{onset}{vowel}"));
            }
        }
    }

    // The tail (ь/ъ included) always closes the final syllable
    if let Some(&last_vowel) = vowel_positions.last() {
        push_onto_last(&mut syllables, &chars[last_vowel + 1..]);
    }

    syllables
}

fn push_onto_last(syllables: &mut [String], run: &[char]) {
    if let Some(last) = syllables.last_mut() {
        last.extend(run.iter());
    }
}
