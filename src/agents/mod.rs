//! SAM agent catalog.
//!
//! Agents are declared in `registry/agents.toml`, embedded in the binary and
//! validated on load. Each record points at its markdown body inside the
//! templates tree:
//!
//! ```toml
//! [[agent]]
//! id = "atlas"
//! source = "sam/agents/atlas.md"
//! name = "Atlas - System Architect"
//! description = "Validates requirements and designs the system architecture"
//! ```

pub mod definition;
pub mod registry;

pub use definition::{AgentRecord, DESCRIPTION_SUFFIX, NAME_PREFIX};
pub use registry::AgentRegistry;
