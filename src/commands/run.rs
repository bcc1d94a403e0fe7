//! Command dispatch logic for reel-insights

use super::{InsightsArgs, export_insights, init_config};
use crate::{Host, Result};
use clap::Parser;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "reel-insights", author, version, long_about = None, display_name = "reel-insights")]
#[command(about = "Export Instagram reel and audience insights to Excel or CSV")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(flatten)]
    args: InsightsArgs,
}

/// Parse command-line arguments and run the export
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if the configuration is invalid, or if fetching or exporting fails
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let cli = Cli::parse_from(args);

    match &cli.args.default_config {
        Some(path) => init_config(host, path),
        None => export_insights(host, &cli.args).await,
    }
}
