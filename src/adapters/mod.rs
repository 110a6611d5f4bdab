//! Platform adapters.
//!
//! Each adapter turns the agent registry and the templates tree into the
//! files one host platform expects. Adapters are pure: they only read the
//! templates and return [`Artifact`]s; the installer writes them.
//!
//! | Platform | Output                                                  |
//! |----------|---------------------------------------------------------|
//! | claude   | `_sam/` and `.claude/commands/sam/`, copied verbatim    |
//! | cursor   | `.cursor/rules/sam-<id>.mdc` + `sam-workflow.mdc`       |
//! | codex    | `.codex/skills/sam-<id>/` + `sam-tdd-pipeline/`         |
//!
//! Supporting a new host means adding a [`Platform`] variant and an adapter
//! here; the installer does not change.

pub mod artifact;
pub mod claude;
pub mod codex;
pub mod cursor;
pub mod markdown;
pub mod pipeline;

pub use artifact::{Artifact, Content};

use crate::agents::AgentRegistry;
use crate::error::Result;
use crate::platform::Platform;
use crate::templates::TemplateStore;
use std::path::PathBuf;

/// How to invoke one installed agent or workflow on a platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageHint {
    pub invocation: String,
    pub label: String,
}

pub trait PlatformAdapter {
    fn platform(&self) -> Platform;

    /// Directories, relative to the target, this adapter writes into
    fn install_roots(&self) -> Vec<PathBuf>;

    /// Build every artifact for this platform
    fn generate(&self, registry: &AgentRegistry, store: &TemplateStore) -> Result<Vec<Artifact>>;

    /// Invocations to show the user once installed
    fn usage(&self, registry: &AgentRegistry, store: &TemplateStore) -> Vec<UsageHint>;

    fn restart_note(&self) -> String {
        format!(
            "Restart {} to load the new agents.",
            self.platform().display_name()
        )
    }
}

/// The adapter that installs for `platform`
pub fn adapter_for(platform: Platform) -> Box<dyn PlatformAdapter> {
    match platform {
        Platform::Claude => Box::new(claude::ClaudeAdapter),
        Platform::Cursor => Box::new(cursor::CursorAdapter),
        Platform::Codex => Box::new(codex::CodexAdapter),
    }
}
