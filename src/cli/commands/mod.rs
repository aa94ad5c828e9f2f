//! CLI command handlers for `polystanding`.
//!
//! Each subcommand lives in its own submodule. Handlers print their output
//! and return `Err(message)` when the process should exit with status 1.

pub mod config;
pub mod register;
pub mod standing;
pub mod transcript;
