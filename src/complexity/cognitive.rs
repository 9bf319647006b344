//! Cognitive load: reading fatigue from text length, scaled by age
//!
//! load = min(50, ln(1 + words / divisor) * factor * 10)
//!
//! Younger readers get a larger factor and a smaller divisor, so the same
//! word count weighs more.

use super::clamp_age;

/// Upper bound of the cognitive load term
pub const MAX_COGNITIVE_LOAD: f64 = 50.0;

/// Length sensitivity for one age
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AgeLoad {
    pub factor: f64,
    pub divisor: f64,
}

/// Length sensitivity for an age; ages outside 6-11 use the nearest boundary
pub fn age_load(age: u8) -> AgeLoad {
    let (factor, divisor) = match clamp_age(age) {
        ..=6 => (1.8, 5.0),
        7 => (1.5, 7.0),
        8 => (1.0, 10.0),
        9 => (0.8, 12.0),
        10 => (0.7, 15.0),
        _ => (0.6, 18.0),
    };
    AgeLoad { factor, divisor }
}

/// Cognitive load of a text for a reader of the given age, in [0, 50]
pub fn cognitive_load(text: &str, age: u8) -> f64 {
    let words = text.split_whitespace().count();
    if words == 0 {
        return 0.0;
    }

    let AgeLoad { factor, divisor } = age_load(age);
    let load = (1.0 + words as f64 / divisor).ln() * factor * 10.0;

    load.min(MAX_COGNITIVE_LOAD)
}
