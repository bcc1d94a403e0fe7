use super::common::{LogLevel, export_file_name, init_logging, resolve_output_dir};
use super::Host;
use crate::Result;
use crate::aggregate::aggregate;
use crate::config::{Config, InsightErrorPolicy};
use crate::error::Chain;
use crate::graph::{DemographicMetric, GraphClient, fetch_demographics, fetch_media};
use crate::reports::{ExportFormat, export, export_demographics};
use camino::{Utf8Path, Utf8PathBuf};
use chrono::{Local, NaiveDateTime};
use clap::Args;
use ohno::IntoAppError;
use std::fs;
use std::io::Write;
use strum::IntoEnumIterator;

#[derive(Args, Debug)]
pub struct InsightsArgs {
    /// Graph API access token
    #[arg(long, value_name = "TOKEN", env = "IG_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// Instagram account whose media is exported
    #[arg(long, value_name = "ID", env = "IG_USER_ID")]
    pub account_id: Option<String>,

    /// Follow the listing through every page instead of stopping after the first
    #[arg(long)]
    pub paginate: bool,

    /// Do not embed thumbnails in the Excel export
    #[arg(long)]
    pub no_images: bool,

    /// Format of the insights export
    #[arg(long, value_name = "FORMAT", default_value = "xlsx")]
    pub format: ExportFormat,

    /// Directory receiving the exported files (default is `<Documents>/reel_insights`)
    #[arg(long, value_name = "PATH")]
    pub output_dir: Option<Utf8PathBuf>,

    /// Path to configuration file (default is `reel-insights.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Leave out reels whose insights cannot be fetched instead of failing
    #[arg(long)]
    pub skip_failed_insights: bool,

    /// Do not export the city breakdowns of the audience
    #[arg(long)]
    pub no_demographics: bool,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,

    /// Write the default configuration file to PATH and exit
    #[arg(long, value_name = "PATH")]
    pub default_config: Option<Utf8PathBuf>,
}

/// Write the default configuration file.
pub fn init_config<H: Host>(host: &mut H, output: &Utf8Path) -> Result<()> {
    Config::save_default(output)?;
    let _ = writeln!(host.output(), "Generated default configuration file: {output}");
    Ok(())
}

/// Fetch, aggregate, and export the account's reels, then its audience breakdowns.
pub async fn export_insights<H: Host>(host: &mut H, args: &InsightsArgs) -> Result<()> {
    init_logging(args.log_level);

    let cwd = std::env::current_dir().into_app_err("determining the current directory")?;
    let cwd = Utf8PathBuf::try_from(cwd).into_app_err("current directory is not valid UTF-8")?;
    let config = Config::load(&cwd, args.config.as_ref())?;

    let policy = if args.skip_failed_insights {
        InsightErrorPolicy::Skip
    } else {
        config.insight_errors
    };

    let access_token = args.access_token.as_deref().unwrap_or_default();
    let account_id = args.account_id.as_deref().unwrap_or_default();

    let output_dir = resolve_output_dir(args.output_dir.as_ref(), config.output_dir.as_ref());
    fs::create_dir_all(&output_dir).into_app_err_with(|| format!("creating output directory '{output_dir}'"))?;

    let client = GraphClient::new(config.graph_api_base.as_str()).into_app_err("creating graph API client")?;
    let now = Local::now().naive_local();

    let _ = writeln!(host.output(), "Fetching media data");
    let media_items = fetch_media(&client, access_token, account_id, args.paginate, config.page_size)
        .await
        .into_app_err("fetching the media listing")?;
    let _ = writeln!(host.output(), "Fetched {} media items", media_items.len());

    let _ = writeln!(host.output(), "Aggregating data");
    let aggregated = aggregate(&client, &media_items, access_token, policy)
        .await
        .into_app_err("aggregating reel insights")?;
    let _ = writeln!(host.output(), "Aggregated {} items", aggregated.len());

    let file_name = export_file_name("insights", now, config.include_time_in_filename, args.format.extension());
    let destination = output_dir.join(file_name);
    let include_images = !args.no_images;

    let _ = writeln!(host.output(), "Writing to {}", args.format.extension());
    let summary = export(&aggregated, &destination, args.format, include_images, &client)
        .await
        .into_app_err("exporting reel insights")?;
    let _ = writeln!(
        host.output(),
        "Successfully wrote {} rows ({} images) to {destination}",
        summary.rows,
        summary.images_embedded
    );

    if config.demographics && !args.no_demographics {
        export_audience(host, &client, access_token, account_id, &output_dir, now).await?;
    }

    Ok(())
}

/// A breakdown that cannot be fetched is reported and skipped; one that cannot be written fails the run.
async fn export_audience<H: Host>(
    host: &mut H,
    client: &GraphClient,
    access_token: &str,
    account_id: &str,
    output_dir: &Utf8Path,
    now: NaiveDateTime,
) -> Result<()> {
    for metric in DemographicMetric::iter() {
        let _ = writeln!(host.output(), "Grabbing {metric} data");

        let cities = match fetch_demographics(client, account_id, access_token, metric).await {
            Ok(cities) => cities,
            Err(e) => {
                let _ = writeln!(host.error(), "Unable to fetch {metric}: {}", Chain(&e));
                continue;
            }
        };

        let destination = output_dir.join(export_file_name(metric.file_stem(), now, false, "csv"));
        export_demographics(&cities, &destination).into_app_err_with(|| format!("exporting {metric}"))?;
        let _ = writeln!(host.output(), "Data written to {destination}");
    }

    Ok(())
}
