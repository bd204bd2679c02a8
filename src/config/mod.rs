// src/config/mod.rs

//! Configuration loading and validation for copyplay.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk and layer CLI flags on top (`loader.rs`).
//! - Validate the result (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{apply_overrides, load_and_validate, load_from_path, resolve};
pub use model::{ClientSection, ConfigFile, LogsSection, MatchSection, RawConfigFile};
