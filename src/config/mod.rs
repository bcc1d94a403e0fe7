//! Tool configuration, loaded from `reel-insights.toml`

#[expect(clippy::module_inception, reason = "config module contains Config type")]
mod config;
mod insight_error_policy;

pub use config::{CONFIG_FILE_NAME, Config, DEFAULT_CONFIG_TOML};
pub use insight_error_policy::InsightErrorPolicy;
