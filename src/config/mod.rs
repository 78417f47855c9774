//! Configuration module for the payday calculator
//!
//! This module provides:
//! - Config file location (explicit path, working directory, user config dir)
//! - Loading the budget document from JSON or YAML

pub mod loader;
pub mod paths;

pub use loader::load_config;
pub use paths::PaydayPaths;
