use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SamError {
    #[error("Templates directory not found: {}", .0.display())]
    TemplatesNotFound(PathBuf),

    #[error("Unknown platform '{0}'. Expected one of: claude, cursor, codex, all")]
    UnknownPlatform(String),

    #[error("No platform selected")]
    NoPlatformSelected,

    #[error("Duplicate agent id in registry: {0}")]
    DuplicateAgent(String),

    #[error("Invalid agent definition: {0}")]
    InvalidAgent(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Frontmatter error: {0}")]
    Frontmatter(#[from] serde_yaml::Error),

    #[error("Failed to walk template tree: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SamError>;
