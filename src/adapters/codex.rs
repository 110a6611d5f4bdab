//! Codex: one skill package per agent plus a pipeline package.
//!
//! ```text
//! .codex/skills/
//! ├── sam-atlas/
//! │   ├── SKILL.md             short manifest, loaded eagerly
//! │   └── references/agent.md  full body, loaded on demand
//! └── sam-tdd-pipeline/
//!     ├── SKILL.md
//!     └── references/workflow.md   (when the templates ship one)
//! ```

use super::markdown::frontmatter;
use super::{pipeline, Artifact, PlatformAdapter, UsageHint};
use crate::agents::{AgentRecord, AgentRegistry, NAME_PREFIX};
use crate::error::Result;
use crate::platform::Platform;
use crate::templates::TemplateStore;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const SKILLS_DIR: &str = ".codex/skills";
pub const MANIFEST_FILE: &str = "SKILL.md";
pub const REFERENCES_DIR: &str = "references";
pub const AGENT_REFERENCE: &str = "agent.md";
pub const WORKFLOW_REFERENCE: &str = "workflow.md";
pub const PIPELINE_PACKAGE: &str = "sam-tdd-pipeline";

const AGENT_GROUP: &str = "agent skills";
const PIPELINE_GROUP: &str = "pipeline skill";

/// Frontmatter schema of `SKILL.md`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillManifest {
    pub name: String,
    pub description: String,
}

pub struct CodexAdapter;

impl CodexAdapter {
    fn package_dir(name: &str) -> PathBuf {
        PathBuf::from(SKILLS_DIR).join(name)
    }
}

impl PlatformAdapter for CodexAdapter {
    fn platform(&self) -> Platform {
        Platform::Codex
    }

    fn install_roots(&self) -> Vec<PathBuf> {
        vec![PathBuf::from(SKILLS_DIR)]
    }

    fn generate(&self, registry: &AgentRegistry, store: &TemplateStore) -> Result<Vec<Artifact>> {
        let mut artifacts = Vec::new();

        for agent in registry {
            if !store.has_agent(agent) {
                continue;
            }
            let dir = Self::package_dir(&agent.package_name());
            artifacts.push(Artifact::text(
                dir.join(MANIFEST_FILE),
                AGENT_GROUP,
                render_agent_manifest(agent)?,
            ));
            artifacts.push(Artifact::copy(
                dir.join(REFERENCES_DIR).join(AGENT_REFERENCE),
                AGENT_GROUP,
                store.agent_source(agent),
            ));
        }

        let dir = Self::package_dir(PIPELINE_PACKAGE);
        let workflow = store.workflow_doc();
        artifacts.push(Artifact::text(
            dir.join(MANIFEST_FILE),
            PIPELINE_GROUP,
            render_pipeline_manifest(workflow.is_some())?,
        ));
        if let Some(workflow) = workflow {
            artifacts.push(Artifact::copy(
                dir.join(REFERENCES_DIR).join(WORKFLOW_REFERENCE),
                PIPELINE_GROUP,
                workflow,
            ));
        }

        tracing::info!(files = artifacts.len(), "generated codex skills");
        Ok(artifacts)
    }

    fn usage(&self, registry: &AgentRegistry, store: &TemplateStore) -> Vec<UsageHint> {
        let mut hints: Vec<UsageHint> = registry
            .iter()
            .filter(|agent| store.has_agent(agent))
            .map(|agent| UsageHint {
                invocation: format!("/{}", agent.package_name()),
                label: agent.name.clone(),
            })
            .collect();

        hints.push(UsageHint {
            invocation: format!("/{}", PIPELINE_PACKAGE),
            label: "Full TDD Pipeline".to_string(),
        });
        hints
    }
}

/// Manifest of a single agent's skill package
pub fn render_agent_manifest(agent: &AgentRecord) -> Result<String> {
    let meta = SkillManifest {
        name: agent.package_name(),
        description: agent.summary(),
    };

    let mut body = format!("# {}\n\n", agent.name);
    if let Some(description) = &agent.description {
        body.push_str(description.trim());
        body.push_str("\n\n");
    }
    body.push_str(&format!(
        "Load the full agent definition from `{}/{}` and follow it for the rest of the task.\n",
        REFERENCES_DIR, AGENT_REFERENCE
    ));

    Ok(frontmatter(&meta)? + &body)
}

/// Manifest of the aggregate pipeline package
pub fn render_pipeline_manifest(has_workflow: bool) -> Result<String> {
    let meta = SkillManifest {
        name: PIPELINE_PACKAGE.to_string(),
        description: "Run the SAM autonomous TDD pipeline: validate requirements, generate stories, red/green/refactor each story, then document".to_string(),
    };

    let mut body = format!(
        "# {}\n\nRun the full test-driven pipeline by invoking each skill in turn.\n\n",
        pipeline::TITLE
    );
    body.push_str(&pipeline::render(|id| format!("/{}{}", NAME_PREFIX, id)));
    if has_workflow {
        body.push_str(&format!(
            "Load the detailed workflow from `{}/{}` before starting.\n",
            REFERENCES_DIR, WORKFLOW_REFERENCE
        ));
    }

    Ok(frontmatter(&meta)? + &body)
}
