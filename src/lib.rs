//! localegate resolves the locale a web client should start in and describes
//! how its translation bundle is fetched.
//!
//! This crate owns the configuration surface; the negotiation primitives live
//! in `localegate_common` and are re-exported here for convenience.

pub mod config;

pub use config::{ConfigError, DEFAULT_RESOURCE_BASE, GateConfig, MarkerConfig};
pub use localegate_common::i18n;
