pub mod toml_config;

use crate::core::consumer::DEFAULT_PULL_CAP;
use crate::core::counter::DEFAULT_LIMIT;
use crate::core::ConfigProvider;

#[cfg(feature = "cli")]
use crate::utils::{
    error::Result,
    logger::LogSettings,
    validation::{validate_path, Validate},
};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "bounded-count")]
#[command(about = "Counts through a lazy sequence under a bounded number of pulls")]
pub struct CliConfig {
    #[arg(long, help = "Number of values the sequence produces [default: 18]")]
    pub limit: Option<u64>,

    #[arg(long, help = "Maximum number of pulls [default: 20]")]
    pub cap: Option<usize>,

    #[arg(long, help = "Path to a TOML configuration file")]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads and validates the `--config` file. Call `validate` first to check the path.
    pub fn load_file(&self) -> Result<Option<TomlConfig>> {
        self.config
            .as_deref()
            .map(|path| {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Ok(file)
            })
            .transpose()
    }

    pub fn log_settings(&self, file: Option<&TomlConfig>) -> LogSettings {
        LogSettings {
            verbose: self.verbose,
            json: self.log_json || file.map(TomlConfig::log_json).unwrap_or(false),
            level: file.and_then(|f| f.log_level()).map(str::to_string),
        }
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn sequence_limit(&self) -> Option<u64> {
        self.limit
    }

    fn pull_cap(&self) -> Option<usize> {
        self.cap
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}

/// Effective settings for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSettings {
    pub limit: u64,
    pub cap: usize,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            cap: DEFAULT_PULL_CAP,
        }
    }
}

impl RunSettings {
    /// Replaces every value `provider` sets, keeping the rest.
    pub fn overlay<P: ConfigProvider>(self, provider: &P) -> Self {
        Self {
            limit: provider.sequence_limit().unwrap_or(self.limit),
            cap: provider.pull_cap().unwrap_or(self.cap),
        }
    }
}
