//! Cursor: one opt-in rule file per agent plus a workflow rule.
//!
//! Rules are never applied automatically (`alwaysApply: false`); Cursor
//! pulls one in when the user mentions it, e.g. `@atlas`.

use super::markdown::{with_footer, with_frontmatter};
use super::{pipeline, Artifact, PlatformAdapter, UsageHint};
use crate::agents::{AgentRecord, AgentRegistry, NAME_PREFIX};
use crate::error::Result;
use crate::platform::Platform;
use crate::templates::TemplateStore;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const RULES_DIR: &str = ".cursor/rules";
pub const RULE_EXTENSION: &str = "mdc";
pub const WORKFLOW_RULE: &str = "workflow";

/// Glob scope matching every file in the project
const MATCH_ALL: &str = "**/*";

const AGENT_GROUP: &str = "agent rules";
const WORKFLOW_GROUP: &str = "workflow rule";

/// Frontmatter schema of a `.mdc` rule file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleFrontmatter {
    pub description: String,
    pub globs: String,
    pub always_apply: bool,
}

impl RuleFrontmatter {
    /// A rule scoped to every file, active only when mentioned
    pub fn on_mention(description: String) -> Self {
        Self {
            description,
            globs: MATCH_ALL.to_string(),
            always_apply: false,
        }
    }
}

pub struct CursorAdapter;

impl CursorAdapter {
    fn rule_path(name: &str) -> PathBuf {
        PathBuf::from(RULES_DIR).join(format!("{}.{}", name, RULE_EXTENSION))
    }
}

impl PlatformAdapter for CursorAdapter {
    fn platform(&self) -> Platform {
        Platform::Cursor
    }

    fn install_roots(&self) -> Vec<PathBuf> {
        vec![PathBuf::from(RULES_DIR)]
    }

    fn generate(&self, registry: &AgentRegistry, store: &TemplateStore) -> Result<Vec<Artifact>> {
        let mut artifacts = Vec::new();

        for agent in registry {
            let Some(body) = store.read_agent(agent)? else {
                continue;
            };
            artifacts.push(Artifact::bytes(
                Self::rule_path(&agent.package_name()),
                AGENT_GROUP,
                render_agent_rule(agent, &body)?,
            ));
        }

        artifacts.push(Artifact::bytes(
            Self::rule_path(&format!("{}{}", NAME_PREFIX, WORKFLOW_RULE)),
            WORKFLOW_GROUP,
            render_workflow_rule()?,
        ));

        tracing::info!(rules = artifacts.len(), "generated cursor rules");
        Ok(artifacts)
    }

    fn usage(&self, registry: &AgentRegistry, store: &TemplateStore) -> Vec<UsageHint> {
        let mut hints: Vec<UsageHint> = registry
            .iter()
            .filter(|agent| store.has_agent(agent))
            .map(|agent| UsageHint {
                invocation: agent.mention(),
                label: agent.name.clone(),
            })
            .collect();

        hints.push(UsageHint {
            invocation: format!("@{}{}", NAME_PREFIX, WORKFLOW_RULE),
            label: "Full TDD Pipeline".to_string(),
        });
        hints
    }
}

/// Wrap an agent body into a rule file. The body bytes pass through untouched.
pub fn render_agent_rule(agent: &AgentRecord, body: &[u8]) -> Result<Vec<u8>> {
    let meta = RuleFrontmatter::on_mention(agent.rule_description());
    let footer = format!(
        "Invoke this agent by mentioning `{}` in chat.",
        agent.mention()
    );
    with_frontmatter(&meta, &with_footer(body, &footer))
}

/// The aggregate rule describing the whole pipeline
pub fn render_workflow_rule() -> Result<Vec<u8>> {
    let meta = RuleFrontmatter::on_mention(format!(
        "{} - SAM Workflow for TDD development",
        pipeline::TITLE
    ));

    let mut body = format!(
        "# {}\n\nRun the full test-driven pipeline by mentioning each agent in turn.\n\n",
        pipeline::TITLE
    );
    body.push_str(&pipeline::render(|id| format!("@{}", id)));

    let footer = "Start the pipeline by mentioning `@sam` together with your requirements.";
    with_frontmatter(&meta, &with_footer(body.trim_end().as_bytes(), footer))
}
