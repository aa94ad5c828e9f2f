//! Core module: models, the standing engine, and the I/O around it

pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod report;
pub mod standing;

/// Returns the current version of the `poly-standing` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
