//! reel-insights crate
//!
//! This crate is an implementation detail of the `reel-insights` tool. This crate's API is fluid and may change without warning
//! and in a semver-incompatible way.
//!
//! # Module Organization
//!
//! - [`graph`]: Graph API client and the media, insight, and demographics fetchers
//! - [`metrics`]: The fixed metric schema and per-media aggregated entries
//! - [`aggregate`]: Joins listing fields and insight values into aggregated entries
//! - [`reports`]: CSV and Excel export, including thumbnail embedding
//! - [`config`]: Configuration file loading and validation
//! - [`commands`]: Command-line interface and orchestration

/// Result type alias using `ohno::AppError` as the default error type.
pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

#[doc(hidden)]
pub mod aggregate;

#[doc(hidden)]
pub mod commands;

#[doc(hidden)]
pub mod config;

#[doc(hidden)]
pub mod error;

#[doc(hidden)]
pub mod graph;

#[doc(hidden)]
pub mod metrics;

#[doc(hidden)]
pub mod reports;

pub use commands::{Host, run};
