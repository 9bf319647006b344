//! Command line interface
//!
//! # Components
//! - `mod.rs`: argument parsing and command dispatch
//! - `display.rs`: coloured terminal rendering

pub mod display;

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use slogovik::complexity::improved::compare_with_legacy;
use slogovik::complexity::LegacyScorer;
use slogovik::{
    age_thresholds_info, complexity_emoji, process_text, split_syllables, Algorithm, Settings,
};

use display::Display;

#[derive(Parser, Debug)]
#[command(name = "slogovik")]
#[command(about = "Syllable drills and reading difficulty for Russian texts")]
pub struct Cli {
    /// Settings file (JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print JSON instead of coloured output
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Split words into syllables
    Syllables {
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Build the three drill levels for a text
    Levels(TextArgs),
    /// Score a text
    Score {
        #[command(flatten)]
        text: TextArgs,
        #[command(flatten)]
        scoring: ScoringArgs,
    },
    /// Show the component breakdown of a score
    Breakdown {
        #[command(flatten)]
        text: TextArgs,
        #[command(flatten)]
        scoring: ScoringArgs,
    },
    /// Compare scorers on the same text
    Compare {
        #[command(flatten)]
        text: TextArgs,
        #[command(flatten)]
        scoring: ScoringArgs,
    },
    /// Show the rating thresholds for an age
    Thresholds {
        /// Reader age (6-11)
        #[arg(short, long)]
        age: Option<u8>,
    },
}

/// Where the text comes from: inline, a file, or stdin
#[derive(Args, Debug)]
pub struct TextArgs {
    /// Text to process
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(short, long, conflicts_with = "text")]
    pub file: Option<PathBuf>,
}

impl TextArgs {
    pub fn read(&self) -> Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        if let Some(path) = &self.file {
            return fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()));
        }
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read text from stdin")?;
        Ok(text)
    }
}

#[derive(Args, Debug)]
pub struct ScoringArgs {
    /// Reader age (6-11)
    #[arg(short, long)]
    pub age: Option<u8>,

    /// Leave the cognitive load term out
    #[arg(long)]
    pub no_cognitive_load: bool,

    /// Scoring algorithm
    #[arg(long, value_enum)]
    pub algorithm: Option<Algorithm>,
}

impl ScoringArgs {
    /// Apply command-line overrides on top of file settings
    fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(age) = self.age {
            settings = settings.with_age(age);
        }
        if self.no_cognitive_load {
            settings.use_cognitive_load = false;
        }
        match self.algorithm {
            Some(Algorithm::Children) => settings.use_children_algorithm = true,
            Some(Algorithm::Improved) => settings.use_children_algorithm = false,
            Some(Algorithm::Legacy) | None => {}
        }
        settings
    }

    fn is_legacy(&self) -> bool {
        self.algorithm == Some(Algorithm::Legacy)
    }
}

#[derive(Serialize)]
struct ScoreReport {
    algorithm: Algorithm,
    age: u8,
    include_cognitive_load: bool,
    score: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    emoji: Option<&'static str>,
}

#[derive(Serialize)]
struct SyllableReport<'a> {
    word: &'a str,
    syllables: Vec<String>,
}

/// Run a parsed command
pub fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load_or_default(cli.config.as_deref())?;
    tracing::debug!(?settings, "resolved settings");

    let display = Display;

    match &cli.command {
        Command::Syllables { words } => {
            let reports: Vec<SyllableReport> = words
                .iter()
                .map(|word| SyllableReport {
                    word,
                    syllables: split_syllables(word),
                })
                .collect();
            if cli.json {
                return display.json(&reports);
            }
            for report in &reports {
                display.show_syllables(report.word, &report.syllables)?;
            }
        }
        Command::Levels(text) => {
            let levels = process_text(&text.read()?);
            if cli.json {
                return display.json(&levels);
            }
            display.show_levels(&levels)?;
        }
        Command::Score { text, scoring } => {
            let text = text.read()?;
            let settings = scoring.apply(settings);
            let report = if scoring.is_legacy() {
                ScoreReport {
                    algorithm: Algorithm::Legacy,
                    age: settings.child_age,
                    include_cognitive_load: false,
                    score: LegacyScorer::default().score(&text),
                    emoji: None,
                }
            } else {
                let score = settings.score(&text);
                ScoreReport {
                    algorithm: settings.algorithm(),
                    age: settings.child_age,
                    include_cognitive_load: settings.use_cognitive_load,
                    score,
                    emoji: Some(complexity_emoji(f64::from(score), settings.child_age)),
                }
            };
            if cli.json {
                return display.json(&report);
            }
            display.show_score(report.algorithm, report.age, report.score)?;
        }
        Command::Breakdown { text, scoring } => {
            if scoring.is_legacy() {
                bail!("the legacy scorer has no component breakdown");
            }
            let breakdown = scoring.apply(settings).breakdown(&text.read()?);
            if cli.json {
                return display.json(&breakdown);
            }
            display.show_breakdown(&breakdown)?;
        }
        Command::Compare { text, scoring } => {
            let text = text.read()?;
            let settings = scoring.apply(settings);
            if scoring.is_legacy() {
                let comparison =
                    compare_with_legacy(&text, settings.child_age, settings.use_cognitive_load);
                if cli.json {
                    return display.json(&comparison);
                }
                display.show_legacy_comparison(&comparison)?;
            } else {
                let comparison = settings.compare(&text);
                if cli.json {
                    return display.json(&comparison);
                }
                display.show_comparison(&comparison)?;
            }
        }
        Command::Thresholds { age } => {
            let settings = match age {
                Some(age) => settings.with_age(*age),
                None => settings,
            };
            let info = age_thresholds_info(settings.child_age);
            if cli.json {
                return display.json(&serde_json::json!({
                    "age": settings.child_age,
                    "thresholds": info,
                }));
            }
            display.show_thresholds(settings.child_age, info)?;
        }
    }

    Ok(())
}
