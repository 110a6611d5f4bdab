//! Supported host platforms and the selector used to pick them.

use crate::error::{Result, SamError};
use clap::ValueEnum;
use std::fmt;

/// A host that consumes generated artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Claude Code: templates mirrored verbatim
    Claude,
    /// Cursor: one `.mdc` rule file per agent
    Cursor,
    /// Codex: one skill package per agent
    Codex,
}

impl Platform {
    /// Install order used when several platforms are selected
    pub const ALL: [Platform; 3] = [Platform::Claude, Platform::Cursor, Platform::Codex];

    pub fn id(&self) -> &'static str {
        match self {
            Platform::Claude => "claude",
            Platform::Cursor => "cursor",
            Platform::Codex => "codex",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Claude => "Claude Code",
            Platform::Cursor => "Cursor",
            Platform::Codex => "Codex",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.id())
    }
}

/// What the user asked to install: one platform or all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Selector {
    /// Claude Code slash commands (`_sam/` + `.claude/commands/sam/`)
    Claude,
    /// Cursor rules (`.cursor/rules/`)
    Cursor,
    /// Codex skills (`.codex/skills/`)
    Codex,
    /// Every supported platform
    All,
}

impl Selector {
    /// Parse a selector from config, env or prompt input (case-insensitive)
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        <Self as ValueEnum>::from_str(trimmed, true)
            .map_err(|_| SamError::UnknownPlatform(trimmed.to_string()))
    }

    /// Platforms to install, in the fixed install order
    pub fn platforms(&self) -> Vec<Platform> {
        match self {
            Selector::Claude => vec![Platform::Claude],
            Selector::Cursor => vec![Platform::Cursor],
            Selector::Codex => vec![Platform::Codex],
            Selector::All => Platform::ALL.to_vec(),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_possible_value() {
            Some(value) => f.pad(value.get_name()),
            None => Ok(()),
        }
    }
}
