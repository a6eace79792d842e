//! Shared test utilities for the profile registry workspace.
//!
//! Dev-dependency only; never published.
//!
//! - [`config`]: [`TestConfig`], a temporary directory holding a config file
//!   and registry source documents

pub mod config;

pub use config::TestConfig;
