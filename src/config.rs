//! Configuration loader for rxgen.
//!
//! `defaults/rxgen.default.toml` is embedded into the crate so the documented
//! defaults and the runtime behavior cannot drift apart. Callers layer files,
//! `RXGEN_*` environment variables and explicit overrides on top via [`Loader`]
//! before deserializing into [`RxgenConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, ValueKind};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::processor::OutputFormat;

const DEFAULT_TOML: &str = include_str!("../defaults/rxgen.default.toml");

/// Repetitions allowed past the minimum of an unbounded quantifier.
pub const DEFAULT_UNBOUNDED_EXTRA: u32 = 5;

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RxgenConfig {
    pub generator: GeneratorConfig,
    pub output: OutputConfig,
}

/// Knobs that change what the generator produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// `*`, `+` and `{n,}` draw their count from `min..=min + unbounded_extra`.
    pub unbounded_extra: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            unbounded_extra: DEFAULT_UNBOUNDED_EXTRA,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub count: usize,
    pub format: OutputFormat,
}

/// Helper for layering user settings over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer `RXGEN_<SECTION>__<KEY>` environment variables,
    /// e.g. `RXGEN_GENERATOR__UNBOUNDED_EXTRA=2`.
    pub fn with_environment(mut self) -> Self {
        let source = Environment::with_prefix("RXGEN")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (used for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<RxgenConfig, ConfigError> {
        let config: RxgenConfig = self.builder.build()?.try_deserialize()?;
        log::debug!("loaded configuration: {:?}", config);
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<RxgenConfig, ConfigError> {
    Loader::new().build()
}
