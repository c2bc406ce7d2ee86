//! Shared helpers for the behaviour suites.
pub mod locale;
