//! Agent registry: the ordered, validated catalog every platform installs.

use super::definition::{AgentCatalog, AgentRecord};
use crate::error::{Result, SamError};
use std::collections::HashSet;
use std::path::{Component, Path};

/// Ordered list of agents. Built once per process and never mutated.
#[derive(Debug, Clone)]
pub struct AgentRegistry {
    agents: Vec<AgentRecord>,
}

impl AgentRegistry {
    /// Load the built-in catalog embedded at compile time
    pub fn load() -> Result<Self> {
        let content = include_str!("../../registry/agents.toml");
        let catalog: AgentCatalog = toml::from_str(content).map_err(|e| {
            SamError::InvalidAgent(format!("Failed to parse built-in agent catalog: {}", e))
        })?;
        Self::new(catalog.agents)
    }

    /// Build a registry from explicit records, rejecting invalid or duplicate entries
    pub fn new(agents: Vec<AgentRecord>) -> Result<Self> {
        let mut seen = HashSet::new();
        for agent in &agents {
            validate_agent(agent)?;
            if !seen.insert(agent.id.as_str()) {
                return Err(SamError::DuplicateAgent(agent.id.clone()));
            }
        }

        Ok(Self { agents })
    }

    /// Get an agent by ID
    pub fn get(&self, id: &str) -> Option<&AgentRecord> {
        self.agents.iter().find(|agent| agent.id == id)
    }

    /// Agents in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, AgentRecord> {
        self.agents.iter()
    }

    /// List all agent IDs in catalog order
    pub fn list_available(&self) -> Vec<String> {
        self.agents.iter().map(|agent| agent.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

impl<'a> IntoIterator for &'a AgentRegistry {
    type Item = &'a AgentRecord;
    type IntoIter = std::slice::Iter<'a, AgentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Validate that an agent definition is complete and safe to install
fn validate_agent(agent: &AgentRecord) -> Result<()> {
    if agent.id.is_empty() {
        return Err(SamError::InvalidAgent("Agent id cannot be empty".to_string()));
    }
    if !agent
        .id
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(SamError::InvalidAgent(format!(
            "Agent id '{}' must use lowercase letters, digits and dashes only",
            agent.id
        )));
    }
    if agent.name.trim().is_empty() {
        return Err(SamError::InvalidAgent(format!(
            "Agent '{}' name cannot be empty",
            agent.id
        )));
    }

    // Sources are joined onto the templates tree, so they must stay inside it
    let source = Path::new(&agent.source);
    let escapes = source
        .components()
        .any(|c| !matches!(c, Component::Normal(_)));
    if agent.source.is_empty() || escapes || !agent.source.ends_with(".md") {
        return Err(SamError::InvalidAgent(format!(
            "Agent '{}' source must be a relative markdown path, got '{}'",
            agent.id, agent.source
        )));
    }

    Ok(())
}
