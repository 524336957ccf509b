//! Host-side helpers around the core engine.

pub mod config_discovery;
pub mod file_gate;
pub mod formatter;
