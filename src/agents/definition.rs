//! Data structures for the embedded agent catalog.

use serde::Deserialize;

/// Prefix shared by every generated rule file and skill package.
pub const NAME_PREFIX: &str = "sam-";

/// Suffix appended to an agent's display name in generated descriptions.
pub const DESCRIPTION_SUFFIX: &str = "SAM Agent for TDD development";

/// One agent persona: a markdown body in the templates tree plus the
/// metadata each platform needs to present it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AgentRecord {
    /// Short unique name, used as the mention token (`@atlas`)
    pub id: String,

    /// Markdown body path, relative to the `_sam/` directory
    pub source: String,

    /// Human label, e.g. "Atlas - System Architect"
    pub name: String,

    /// One-line capability summary
    #[serde(default)]
    pub description: Option<String>,
}

impl AgentRecord {
    pub fn new(id: impl Into<String>, source: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// `@<id>`, the chat mention that activates the agent.
    pub fn mention(&self) -> String {
        format!("@{}", self.id)
    }

    /// `sam-<id>`, the namespaced name of generated files and packages.
    pub fn package_name(&self) -> String {
        format!("{}{}", NAME_PREFIX, self.id)
    }

    /// "<name> - SAM Agent for TDD development"
    pub fn rule_description(&self) -> String {
        format!("{} - {}", self.name, DESCRIPTION_SUFFIX)
    }

    /// The capability summary, falling back to the rule description.
    pub fn summary(&self) -> String {
        match &self.description {
            Some(description) if !description.trim().is_empty() => description.clone(),
            _ => self.rule_description(),
        }
    }
}

/// Top-level shape of `registry/agents.toml`.
#[derive(Debug, Deserialize)]
pub struct AgentCatalog {
    #[serde(rename = "agent", default)]
    pub agents: Vec<AgentRecord>,
}
