use crate::cli::Cli;
use crate::error::Result;
use crate::platform::Selector;
use crate::utils::path::{expand_tilde, home_dir};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = ".sam.toml";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Default platform selector; skips the interactive prompt
    #[serde(default)]
    pub platform: Option<String>,

    /// Templates tree to install from
    #[serde(default)]
    pub templates_dir: Option<PathBuf>,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct OutputConfig {
    /// Colored output, on unless disabled
    #[serde(default)]
    pub color: Option<bool>,
}

impl Config {
    /// Load configuration with precedence:
    /// 1. CLI flags and their env fallbacks (applied later via with_cli_overrides)
    /// 2. Project config (.sam.toml in the install target)
    /// 3. Global config (~/.sam.toml)
    /// 4. Built-in defaults
    pub fn load(target: &Path) -> Result<Self> {
        let mut config = Self::default();

        if let Some(home) = home_dir() {
            let global_config = home.join(CONFIG_FILE);
            if global_config.is_file() {
                config = config.merge(Self::from_file(&global_config)?);
            }
        }

        let project_config = target.join(CONFIG_FILE);
        if project_config.is_file() {
            config = config.merge(Self::from_file(&project_config)?);
        }

        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(mut self, other: Self) -> Self {
        if other.platform.is_some() {
            self.platform = other.platform;
        }
        if other.templates_dir.is_some() {
            self.templates_dir = other.templates_dir;
        }
        if other.output.color.is_some() {
            self.output.color = other.output.color;
        }
        self
    }

    /// Apply CLI overrides (highest precedence)
    pub fn with_cli_overrides(mut self, cli: &Cli) -> Self {
        if let Some(selector) = cli.platform {
            self.platform = Some(selector.to_string());
        }
        if let Some(templates) = &cli.templates {
            self.templates_dir = Some(templates.clone());
        }
        if cli.no_color {
            self.output.color = Some(false);
        }

        self
    }

    /// The configured selector, if any. Unknown names are a hard error.
    pub fn selector(&self) -> Result<Option<Selector>> {
        self.platform.as_deref().map(Selector::parse).transpose()
    }

    /// Templates directory with `~` expanded
    pub fn templates_path(&self) -> Option<PathBuf> {
        self.templates_dir
            .as_ref()
            .map(|dir| expand_tilde(dir).unwrap_or_else(|| dir.clone()))
    }

    pub fn color(&self) -> bool {
        self.output.color.unwrap_or(true)
    }
}
