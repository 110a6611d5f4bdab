//! Claude Code: mirror the templates verbatim.
//!
//! Claude Code reads slash commands straight from `.claude/commands/`, and
//! those commands load the agent bodies from `_sam/`, so both trees are
//! copied byte-for-byte without any rewriting.

use super::{Artifact, PlatformAdapter, UsageHint};
use crate::agents::AgentRegistry;
use crate::error::Result;
use crate::platform::Platform;
use crate::templates::{TemplateStore, AGENTS_DIR, CLAUDE_COMMANDS_DIR, WORKFLOW_DOC};
use crate::utils::fs::plan_tree_copy;
use std::path::{Path, PathBuf};

/// Subtrees mirrored into the target, relative to both roots
const MIRRORED: [&str; 2] = [AGENTS_DIR, CLAUDE_COMMANDS_DIR];

pub struct ClaudeAdapter;

impl PlatformAdapter for ClaudeAdapter {
    fn platform(&self) -> Platform {
        Platform::Claude
    }

    fn install_roots(&self) -> Vec<PathBuf> {
        MIRRORED.into_iter().map(PathBuf::from).collect()
    }

    fn generate(&self, _registry: &AgentRegistry, store: &TemplateStore) -> Result<Vec<Artifact>> {
        let mut artifacts = Vec::new();

        for subtree in MIRRORED {
            let source = store.root().join(subtree);
            if !source.is_dir() {
                tracing::debug!(subtree, "template subtree missing, skipping");
                continue;
            }

            let group = format!("{}/", subtree);
            for (from, to) in plan_tree_copy(&source, Path::new(subtree))? {
                artifacts.push(Artifact::copy(to, &group, from));
            }
        }

        Ok(artifacts)
    }

    fn usage(&self, registry: &AgentRegistry, store: &TemplateStore) -> Vec<UsageHint> {
        let mut hints: Vec<UsageHint> = registry
            .iter()
            .filter(|agent| store.has_agent(agent))
            .map(|agent| UsageHint {
                invocation: slash_command(&agent.source),
                label: agent.name.clone(),
            })
            .collect();

        if store.workflow_doc().is_some() {
            let workflow = WORKFLOW_DOC.trim_end_matches("/workflow.md");
            hints.push(UsageHint {
                invocation: slash_command(workflow),
                label: "Full TDD Pipeline".to_string(),
            });
        }

        hints
    }
}

/// `sam/agents/atlas.md` -> `/sam:sam:agents:atlas`
fn slash_command(source: &str) -> String {
    let stem = source.trim_end_matches(".md");
    format!("/sam:{}", stem.replace('/', ":"))
}
