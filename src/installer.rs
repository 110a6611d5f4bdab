//! Runs the selected platform adapters against a target directory.

use crate::adapters::{adapter_for, Artifact, UsageHint};
use crate::agents::AgentRegistry;
use crate::error::Result;
use crate::platform::{Platform, Selector};
use crate::templates::TemplateStore;
use crate::utils::fs::count_files;
use std::path::{Path, PathBuf};

/// Files written for one reporting category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCount {
    pub group: String,
    pub files: usize,
}

/// Outcome of installing one platform
#[derive(Debug, Clone)]
pub struct InstallReport {
    pub platform: Platform,
    pub groups: Vec<GroupCount>,
    pub usage: Vec<UsageHint>,
    pub restart_note: String,
}

impl InstallReport {
    pub fn total_files(&self) -> usize {
        self.groups.iter().map(|g| g.files).sum()
    }
}

/// An install root that already exists in the target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExistingInstall {
    pub path: PathBuf,
    pub files: usize,
}

pub struct Installer<'a> {
    registry: &'a AgentRegistry,
    store: &'a TemplateStore,
    target: PathBuf,
}

impl<'a> Installer<'a> {
    pub fn new(registry: &'a AgentRegistry, store: &'a TemplateStore, target: &Path) -> Self {
        Self {
            registry,
            store,
            target: target.to_path_buf(),
        }
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Install roots of the selected platforms that are already present
    pub fn existing_installs(&self, selector: Selector) -> Result<Vec<ExistingInstall>> {
        let mut existing = Vec::new();
        for platform in selector.platforms() {
            for root in adapter_for(platform).install_roots() {
                let path = self.target.join(&root);
                if path.exists() {
                    existing.push(ExistingInstall {
                        files: count_files(&path)?,
                        path: root,
                    });
                }
            }
        }
        Ok(existing)
    }

    /// Install every selected platform, in order, overwriting existing files.
    ///
    /// Writes are not transactional: an IO error stops the run and leaves
    /// whatever was already written in place.
    pub fn install(&self, selector: Selector) -> Result<Vec<InstallReport>> {
        std::fs::create_dir_all(&self.target)?;

        let mut reports = Vec::new();
        for platform in selector.platforms() {
            let adapter = adapter_for(platform);
            let artifacts = adapter.generate(self.registry, self.store)?;

            for artifact in &artifacts {
                artifact.write_to(&self.target)?;
            }

            tracing::info!(%platform, files = artifacts.len(), "installed platform");
            reports.push(InstallReport {
                platform,
                groups: count_by_group(&artifacts),
                usage: adapter.usage(self.registry, self.store),
                restart_note: adapter.restart_note(),
            });
        }

        Ok(reports)
    }
}

/// Count artifacts per group, keeping first-seen group order
fn count_by_group(artifacts: &[Artifact]) -> Vec<GroupCount> {
    let mut groups: Vec<GroupCount> = Vec::new();
    for artifact in artifacts {
        match groups.iter_mut().find(|g| g.group == artifact.group) {
            Some(existing) => existing.files += 1,
            None => groups.push(GroupCount {
                group: artifact.group.clone(),
                files: 1,
            }),
        }
    }
    groups
}
