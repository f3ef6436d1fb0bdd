//! The export orchestrator and its supporting pieces.

pub mod builder;
pub mod config;
pub mod orchestrator;
pub mod registry;
