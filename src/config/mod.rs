//! Reader settings: the context passed to every scoring call
//!
//! Loaded from an optional JSON file such as
//! `{"child_age": 7, "use_cognitive_load": true, "use_children_algorithm": true}`.
//! Missing keys take defaults and unknown keys are ignored.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::complexity::facade::{algorithm_for, scorer_for};
use crate::complexity::{
    clamp_age, compare_algorithms, Algorithm, AlgorithmComparison, ComplexityBreakdown,
    DEFAULT_AGE,
};

/// Errors that can occur while loading settings
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Reader age and scoring options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Reader age (6-11)
    pub child_age: u8,
    /// Add the cognitive load term to scores
    pub use_cognitive_load: bool,
    /// Use the children-optimized scorer instead of the improved one
    pub use_children_algorithm: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            child_age: DEFAULT_AGE,
            use_cognitive_load: true,
            use_children_algorithm: true,
        }
    }
}

impl Settings {
    /// Parse settings from JSON text; the age is clamped to 6-11
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings.normalized())
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(
            path = %path.display(),
            age = settings.child_age,
            cognitive_load = settings.use_cognitive_load,
            children_algorithm = settings.use_children_algorithm,
            "loaded settings"
        );
        Ok(settings)
    }

    /// Load settings from a file if given; a missing file falls back to defaults
    pub fn load_or_default(path: Option<&Path>) -> ConfigResult<Self> {
        match path {
            None => Ok(Settings::default()),
            Some(path) if !path.exists() => {
                tracing::warn!(path = %path.display(), "config not found, using defaults");
                Ok(Settings::default())
            }
            Some(path) => Self::load(path),
        }
    }

    fn normalized(mut self) -> Self {
        let age = clamp_age(self.child_age);
        if age != self.child_age {
            tracing::warn!(requested = self.child_age, age, "age outside 6-11, clamped");
            self.child_age = age;
        }
        self
    }

    /// Replace the age (clamped)
    pub fn with_age(self, age: u8) -> Self {
        Settings {
            child_age: age,
            ..self
        }
        .normalized()
    }

    /// Age-aware algorithm these settings select
    pub fn algorithm(&self) -> Algorithm {
        algorithm_for(self.use_children_algorithm)
    }

    /// Score a text with these settings
    pub fn score(&self, text: &str) -> u32 {
        scorer_for(self.use_children_algorithm).score(
            text,
            self.child_age,
            self.use_cognitive_load,
        )
    }

    /// Breakdown of a text with these settings
    pub fn breakdown(&self, text: &str) -> ComplexityBreakdown {
        scorer_for(self.use_children_algorithm).breakdown(
            text,
            self.child_age,
            self.use_cognitive_load,
        )
    }

    /// Compare both age-aware scorers with these settings
    pub fn compare(&self, text: &str) -> AlgorithmComparison {
        compare_algorithms(text, self.child_age, self.use_cognitive_load)
    }
}
