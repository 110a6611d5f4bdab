//! Read-only access to the canonical templates tree.
//!
//! ```text
//! templates/
//! ├── _sam/                          agent bodies, addressed by AgentRecord::source
//! │   └── core/workflows/autonomous-tdd/workflow.md
//! └── .claude/commands/sam/          Claude Code command loaders
//! ```

use crate::agents::AgentRecord;
use crate::error::{Result, SamError};
use std::path::{Path, PathBuf};

/// Directory holding agent bodies, relative to the templates root
pub const AGENTS_DIR: &str = "_sam";

/// Claude Code command loaders, relative to the templates root
pub const CLAUDE_COMMANDS_DIR: &str = ".claude/commands/sam";

/// Workflow document, relative to [`AGENTS_DIR`]
pub const WORKFLOW_DOC: &str = "core/workflows/autonomous-tdd/workflow.md";

#[derive(Debug, Clone)]
pub struct TemplateStore {
    root: PathBuf,
}

impl TemplateStore {
    /// Open a templates tree. Fails if the root is not a directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(SamError::TemplatesNotFound(root));
        }
        Ok(Self { root })
    }

    /// Open the explicit root if given, otherwise the first default location that exists
    pub fn locate(explicit: Option<&Path>) -> Result<Self> {
        if let Some(root) = explicit {
            return Self::open(root);
        }

        let candidates = default_locations();
        for candidate in &candidates {
            if candidate.is_dir() {
                tracing::debug!(path = %candidate.display(), "using templates directory");
                return Self::open(candidate.clone());
            }
        }

        let first = candidates
            .into_iter()
            .next()
            .unwrap_or_else(|| PathBuf::from("templates"));
        Err(SamError::TemplatesNotFound(first))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn agents_dir(&self) -> PathBuf {
        self.root.join(AGENTS_DIR)
    }

    pub fn claude_commands_dir(&self) -> PathBuf {
        self.root.join(CLAUDE_COMMANDS_DIR)
    }

    /// Absolute path of an agent's markdown body
    pub fn agent_source(&self, agent: &AgentRecord) -> PathBuf {
        self.agents_dir().join(&agent.source)
    }

    /// Whether the agent's body exists; agents without one are skipped
    pub fn has_agent(&self, agent: &AgentRecord) -> bool {
        let exists = self.agent_source(agent).is_file();
        if !exists {
            tracing::debug!(agent = %agent.id, source = %agent.source, "agent source missing, skipping");
        }
        exists
    }

    /// Raw bytes of an agent's body, or `None` when the source file is absent.
    /// The content is not validated or decoded.
    pub fn read_agent(&self, agent: &AgentRecord) -> Result<Option<Vec<u8>>> {
        if !self.has_agent(agent) {
            return Ok(None);
        }
        let body = std::fs::read(self.agent_source(agent))?;
        Ok(Some(body))
    }

    /// Path of the workflow document, if the tree has one
    pub fn workflow_doc(&self) -> Option<PathBuf> {
        let path = self.agents_dir().join(WORKFLOW_DOC);
        path.is_file().then_some(path)
    }
}

/// Default template locations, in lookup order
fn default_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();

    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        locations.push(exe_dir.join("../share/sam/templates"));
        locations.push(exe_dir.join("templates"));
    }

    locations.push(PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/templates")));
    locations
}
