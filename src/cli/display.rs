//! Terminal display and report rendering
//!
//! Features:
//! - Drill levels with numbered headings
//! - Scores coloured by age rating
//! - Component breakdown and algorithm comparison
//! - JSON output for scripting

use std::io::{stdout, Write};

use anyhow::Result;
use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use serde::Serialize;

use slogovik::complexity::improved::LegacyComparison;
use slogovik::{Algorithm, AlgorithmComparison, ComplexityBreakdown, ComplexityRating, TextLevels};

/// Terminal display manager
pub struct Display;

fn rating_color(rating: ComplexityRating) -> Color {
    match rating {
        ComplexityRating::Ideal => Color::Green,
        ComplexityRating::Good => Color::Cyan,
        ComplexityRating::Hard => Color::Yellow,
        ComplexityRating::VeryHard => Color::Red,
    }
}

impl Display {
    /// Pretty-print any report as JSON
    pub fn json<T: Serialize>(&self, value: &T) -> Result<()> {
        let mut stdout = stdout();
        serde_json::to_writer_pretty(&mut stdout, value)?;
        writeln!(stdout)?;
        Ok(())
    }

    /// One word and its syllables
    pub fn show_syllables(&self, word: &str, syllables: &[String]) -> Result<()> {
        let mut stdout = stdout();
        execute!(
            stdout,
            SetForegroundColor(Color::Cyan),
            Print(word),
            ResetColor,
            Print(": "),
            Print(syllables.join(" - ")),
            Print("\n")
        )?;
        Ok(())
    }

    /// All three drill levels
    pub fn show_levels(&self, levels: &TextLevels) -> Result<()> {
        let mut stdout = stdout();
        for (number, level) in levels.iter() {
            execute!(
                stdout,
                SetForegroundColor(Color::Magenta),
                Print(format!("{}. {}\n", number, level.level_name)),
                ResetColor
            )?;
            for word in &level.words {
                execute!(stdout, Print("   "), Print(word), Print("\n"))?;
            }
        }
        stdout.flush()?;
        Ok(())
    }

    /// A single score, coloured by its rating for the age
    pub fn show_score(&self, algorithm: Algorithm, age: u8, score: u32) -> Result<()> {
        let mut stdout = stdout();

        execute!(
            stdout,
            SetForegroundColor(Color::Blue),
            Print(format!("Algorithm: {}  |  Age: {}\n", algorithm.name(), age)),
            ResetColor,
            Print("Score: "),
        )?;

        if algorithm == Algorithm::Legacy {
            execute!(stdout, Print(format!("{score}\n")))?;
        } else {
            let rating = ComplexityRating::for_score(f64::from(score), age);
            execute!(
                stdout,
                SetForegroundColor(rating_color(rating)),
                Print(format!("{} {} ({})\n", score, rating.emoji(), rating.label())),
                ResetColor
            )?;
        }
        stdout.flush()?;
        Ok(())
    }

    /// Components, cognitive load and total
    pub fn show_breakdown(&self, breakdown: &ComplexityBreakdown) -> Result<()> {
        let mut stdout = stdout();
        let rating = ComplexityRating::for_score(breakdown.total_complexity, breakdown.age);

        execute!(
            stdout,
            SetForegroundColor(Color::Blue),
            Print(format!(
                "Algorithm: {}  |  Age: {}  |  Words: {}\n",
                breakdown.algorithm.name(),
                breakdown.age,
                breakdown.words
            )),
            Print("─".repeat(50)),
            Print("\n"),
            ResetColor
        )?;

        for share in &breakdown.components {
            execute!(
                stdout,
                Print(format!("{:<16}{:>8.2}\n", share.component.label(), share.value))
            )?;
        }

        execute!(
            stdout,
            Print(format!(
                "{:<16}{:>8}\n{:<16}{:>8.2}\n",
                "linguistic",
                breakdown.linguistic_complexity,
                "cognitive load",
                breakdown.cognitive_load
            )),
            Print(format!("{:<16}", "total")),
            SetForegroundColor(rating_color(rating)),
            Print(format!("{:>8.2} {}\n", breakdown.total_complexity, rating.emoji())),
            ResetColor
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Improved against children-optimized scores
    pub fn show_comparison(&self, comparison: &AlgorithmComparison) -> Result<()> {
        let mut stdout = stdout();
        let color = match comparison.difference {
            d if d > 0 => Color::Yellow,
            d if d < 0 => Color::Green,
            _ => Color::White,
        };

        execute!(
            stdout,
            Print(format!(
                "improved: {}  |  children: {}  |  ",
                comparison.original_score, comparison.children_score
            )),
            SetForegroundColor(color),
            Print(format!(
                "{:+} ({:+.1}%)\n",
                comparison.difference, comparison.improvement_percent
            )),
            ResetColor
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Legacy against improved scores
    pub fn show_legacy_comparison(&self, comparison: &LegacyComparison) -> Result<()> {
        let mut stdout = stdout();
        execute!(
            stdout,
            Print(format!(
                "legacy: {}  |  improved: {}  |  {:+}\n",
                comparison.old_algorithm, comparison.new_algorithm, comparison.difference
            ))
        )?;
        Ok(())
    }

    /// Rating thresholds for an age
    pub fn show_thresholds(&self, age: u8, info: &str) -> Result<()> {
        let mut stdout = stdout();
        execute!(
            stdout,
            SetForegroundColor(Color::Magenta),
            Print(format!("Age {age}: ")),
            ResetColor,
            Print(info),
            Print("\n")
        )?;
        Ok(())
    }
}
