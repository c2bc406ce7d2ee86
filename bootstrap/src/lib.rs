//! Startup gate for localegate.
//!
//! Resolves the client locale, fetches its translation bundle when it differs
//! from the default, and only then hands the translation store to session
//! initialisation. The `localegate` binary wraps the gate in a small probe CLI.
//!
//! # Modules
//!
//! - [`cli`] - Command-line argument definitions for the probe
//! - [`error`] - Errors surfaced by the probe binary
//! - [`fetch`] - Translation resource retrieval over HTTP
//! - [`loader`] - Conditional loading into the translation store
//! - [`startup`] - Sequencing of resolution, loading, and session start

pub mod cli;
pub mod error;
pub mod fetch;
pub mod loader;
pub mod startup;
