//! Generated artifacts: a relative path plus the bytes to put there.

use crate::error::Result;
use crate::utils::fs::ensure_parent;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Synthesized text
    Text(String),
    /// Synthesized document wrapping raw template bytes
    Bytes(Vec<u8>),
    /// Verbatim copy of a templates file
    CopyOf(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Destination, relative to the install target
    pub path: PathBuf,
    pub content: Content,
    /// Reporting category, e.g. "agent rules"
    pub group: String,
}

impl Artifact {
    pub fn text(path: impl Into<PathBuf>, group: &str, text: String) -> Self {
        Self {
            path: path.into(),
            content: Content::Text(text),
            group: group.to_string(),
        }
    }

    pub fn bytes(path: impl Into<PathBuf>, group: &str, bytes: Vec<u8>) -> Self {
        Self {
            path: path.into(),
            content: Content::Bytes(bytes),
            group: group.to_string(),
        }
    }

    pub fn copy(path: impl Into<PathBuf>, group: &str, source: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            content: Content::CopyOf(source.into()),
            group: group.to_string(),
        }
    }

    /// Write the artifact under `target`, replacing any existing file
    pub fn write_to(&self, target: &Path) -> Result<()> {
        let dest = target.join(&self.path);
        ensure_parent(&dest)?;

        match &self.content {
            Content::Text(text) => fs::write(&dest, text)?,
            Content::Bytes(bytes) => fs::write(&dest, bytes)?,
            Content::CopyOf(source) => {
                fs::copy(source, &dest)?;
            }
        }

        tracing::debug!(path = %self.path.display(), "wrote artifact");
        Ok(())
    }
}
