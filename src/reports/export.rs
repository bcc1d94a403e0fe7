use super::{Thumbnail, demographics, excel, fetch_thumbnail};
use crate::error::{Chain, ExportError};
use crate::graph::{CityBreakdown, GraphClient};
use crate::metrics::{AggregatedMedia, THUMBNAIL_URL};
use camino::Utf8Path;
use clap::ValueEnum;
use std::fs::File;
use std::io::BufWriter;

const LOG_TARGET: &str = "   reports";

/// File format of the insights export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// Excel workbook, optionally with embedded thumbnails
    #[default]
    Xlsx,

    /// Plain CSV
    Csv,
}

impl ExportFormat {
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Xlsx => "xlsx",
            Self::Csv => "csv",
        }
    }
}

/// What an export produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExportSummary {
    pub rows: usize,
    pub images_embedded: usize,
}

/// Write `aggregated` to `destination`.
///
/// The parent directory of `destination` must already exist. With `include_images`, each
/// entry's thumbnail is downloaded through `client` and embedded in the workbook; thumbnail
/// failures are logged and never fail the export. CSV exports carry no images.
pub async fn export(
    aggregated: &AggregatedMedia,
    destination: &Utf8Path,
    format: ExportFormat,
    include_images: bool,
    client: &GraphClient,
) -> Result<ExportSummary, ExportError> {
    let summary = match format {
        ExportFormat::Csv => {
            let file = create(destination)?;
            super::generate_csv(aggregated, BufWriter::new(file)).map_err(|source| ExportError::Csv {
                path: destination.to_owned(),
                source,
            })?;

            ExportSummary {
                rows: aggregated.len(),
                images_embedded: 0,
            }
        }

        ExportFormat::Xlsx => {
            let thumbnails = if include_images {
                Some(download_thumbnails(aggregated, client).await)
            } else {
                None
            };

            let xlsx_error = |source| ExportError::Xlsx {
                path: destination.to_owned(),
                source,
            };

            let mut sheet = excel::generate(aggregated, thumbnails.as_deref()).map_err(xlsx_error)?;
            sheet.workbook.save(destination).map_err(xlsx_error)?;

            ExportSummary {
                rows: aggregated.len(),
                images_embedded: sheet.images_embedded,
            }
        }
    };

    log::info!(
        target: LOG_TARGET,
        "Wrote {} rows ({} images) to '{destination}'",
        summary.rows,
        summary.images_embedded
    );

    Ok(summary)
}

/// Write the city breakdown `rows` as CSV to `destination`.
pub fn export_demographics(rows: &[CityBreakdown], destination: &Utf8Path) -> Result<(), ExportError> {
    let file = create(destination)?;
    demographics::generate(rows, BufWriter::new(file)).map_err(|source| ExportError::Csv {
        path: destination.to_owned(),
        source,
    })?;

    log::info!(target: LOG_TARGET, "Wrote {} cities to '{destination}'", rows.len());
    Ok(())
}

fn create(destination: &Utf8Path) -> Result<File, ExportError> {
    File::create(destination).map_err(|source| ExportError::Io {
        path: destination.to_owned(),
        source,
    })
}

/// One slot per entry, in entry order. Entries without a thumbnail URL, or whose
/// thumbnail could not be fetched, get `None`.
async fn download_thumbnails(aggregated: &AggregatedMedia, client: &GraphClient) -> Vec<Option<Thumbnail>> {
    let mut thumbnails = Vec::with_capacity(aggregated.len());

    for (media_id, entry) in aggregated.iter() {
        let thumbnail = match entry.text(THUMBNAIL_URL).filter(|url| !url.is_empty()) {
            Some(url) => match fetch_thumbnail(client, url).await {
                Ok(thumbnail) => Some(thumbnail),
                Err(e) => {
                    log::warn!(target: LOG_TARGET, "No thumbnail for media '{media_id}': {}", Chain(&e));
                    None
                }
            },
            None => None,
        };

        thumbnails.push(thumbnail);
    }

    thumbnails
}
