//! Age thresholds and emoji ratings for displaying scores

use serde::Serialize;

use super::{clamp_age, AgeBand};

/// How readable a text is for a given age
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityRating {
    Ideal,
    Good,
    Hard,
    VeryHard,
}

impl ComplexityRating {
    /// Rate a score against the age band's cutoffs (upper bounds are inclusive)
    pub fn for_score(score: f64, age: u8) -> Self {
        let [ideal, good, hard] = cutoffs(AgeBand::from_age(age));
        if score <= ideal {
            ComplexityRating::Ideal
        } else if score <= good {
            ComplexityRating::Good
        } else if score <= hard {
            ComplexityRating::Hard
        } else {
            ComplexityRating::VeryHard
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            ComplexityRating::Ideal => "✅",
            ComplexityRating::Good => "👍",
            ComplexityRating::Hard => "⚠️",
            ComplexityRating::VeryHard => "❌",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ComplexityRating::Ideal => "Идеально",
            ComplexityRating::Good => "Хорошо",
            ComplexityRating::Hard => "Сложно",
            ComplexityRating::VeryHard => "Очень сложно",
        }
    }
}

/// Upper bounds of the ideal, good and hard ratings
fn cutoffs(band: AgeBand) -> [f64; 3] {
    match band {
        AgeBand::UpToSix => [20.0, 30.0, 40.0],
        AgeBand::SevenToEight => [25.0, 35.0, 45.0],
        AgeBand::NineAndOlder => [30.0, 40.0, 50.0],
    }
}

/// Emoji rating of a score for a reader of the given age
pub fn complexity_emoji(score: f64, age: u8) -> &'static str {
    ComplexityRating::for_score(score, age).emoji()
}

/// Human-readable thresholds for an age; ages outside 6-11 are clamped
pub fn age_thresholds_info(age: u8) -> &'static str {
    match AgeBand::from_age(clamp_age(age)) {
        AgeBand::UpToSix => {
            "✅ 0-20: Идеально | 👍 20-30: Хорошо | ⚠️ 30-40: Сложно | ❌ 40+: Очень сложно"
        }
        AgeBand::SevenToEight => {
            "✅ 0-25: Идеально | 👍 25-35: Хорошо | ⚠️ 35-45: Сложно | ❌ 45+: Очень сложно"
        }
        AgeBand::NineAndOlder => {
            "✅ 0-30: Идеально | 👍 30-40: Хорошо | ⚠️ 40-50: Сложно | ❌ 50+: Очень сложно"
        }
    }
}
