pub mod install;
pub mod list_agents;
