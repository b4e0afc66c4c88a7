//! CLI Module Organization
//!
//! - args: CLI argument structures
//! - commands: command execution (config layering, generation, check mode)

pub mod args;
pub mod commands;

pub use args::*;
pub use commands::*;
