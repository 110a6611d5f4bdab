#![forbid(unsafe_code)]

pub mod adapters;
pub mod agents;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod installer;
pub mod logging;
pub mod output;
pub mod platform;
pub mod templates;
pub mod utils;
pub mod version;
