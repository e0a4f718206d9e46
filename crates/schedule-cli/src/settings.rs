//! Runtime settings for the `schedule` binary.
//!
//! Values come from an optional TOML file (`--config`) and are overridden by
//! `SCHEDULE_*` environment variables, e.g. `SCHEDULE_MAX_DAYS=400`.

use std::path::Path;

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use schedule_engine::{GeneratorOptions, DEFAULT_MAX_DAYS};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Longest queried period, in days, the generator accepts.
    pub max_days: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_days: DEFAULT_MAX_DAYS,
        }
    }
}

impl Settings {
    /// ## Errors
    /// Returns an error if `path` is given but cannot be read, or if any
    /// source holds a value of the wrong type.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }

        builder
            .add_source(Environment::with_prefix("SCHEDULE").try_parsing(true))
            .build()
            .context("failed to load settings")?
            .try_deserialize()
            .context("invalid settings")
    }

    pub fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions {
            max_days: self.max_days,
        }
    }
}
