//! Export of aggregated insights to CSV and Excel files
//!
//! Both formats share the column layout of [`METRIC_SCHEMA`](crate::metrics::METRIC_SCHEMA),
//! preceded by the media id. The Excel sheet can additionally start with a column of
//! embedded thumbnails, which are downloaded and downscaled at export time. Thumbnail
//! failures only ever cost the affected row its image.
//!
//! The city breakdowns of the audience are exported separately, always as CSV.

mod csv;
mod demographics;
mod excel;
mod export;
mod thumbnail;

pub use csv::generate as generate_csv;
pub use export::{ExportFormat, ExportSummary, export, export_demographics};
pub use thumbnail::{Thumbnail, fetch as fetch_thumbnail};
