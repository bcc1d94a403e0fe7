//! Command-line interface and orchestration for reel-insights
//!
//! The tool has a single command. `run` parses the arguments and either writes the
//! default configuration file or performs an export:
//!
//! 1. Load `reel-insights.toml` (or the `--config` file) and apply CLI overrides
//! 2. Fetch the media listing of the account
//! 3. Aggregate the insights of every reel
//! 4. Export the aggregated reels to Excel or CSV
//! 5. Export the city breakdowns of the audience to CSV
//!
//! Progress is reported through the [`Host`] so the whole flow can run against
//! in-memory buffers. Typed errors from the lower layers are turned into
//! `ohno::AppError` here, with context naming the failing stage.

mod common;
mod host;
mod insights;
mod run;

pub use common::{LogLevel, export_file_name, resolve_output_dir};
pub use host::Host;
pub use insights::{InsightsArgs, export_insights, init_config};
pub use run::run;
