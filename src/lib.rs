//! Academic-standing library for `poly-standing`
//!
//! Carry-over detection, GPA/CGPA rollup, and registration-load validation
//! over a student's result history, plus the CSV loaders, transcript
//! reports, and configuration used by the `polystanding` CLI.

pub mod core;
pub mod logger;

pub use crate::core::{config, get_version};
