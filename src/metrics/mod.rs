//! The fixed output schema and per-media aggregated values
//!
//! Every export row follows [`METRIC_SCHEMA`], a static ordered table of [`MetricDef`]
//! entries. Each definition names its output column, says where its value comes from
//! ([`MetricSource`]), and optionally fixes the column width used by the Excel report.
//!
//! An [`AggregatedEntry`] holds exactly one slot per schema column. A slot is either a
//! [`MetricValue`] or `None`, so "no data" never collapses into a zero. The entries for a
//! run are kept in an [`AggregatedMedia`], keyed by media id in insertion order.

mod aggregated_entry;
mod metric_def;
mod metric_value;

pub use aggregated_entry::{AggregatedEntry, AggregatedMedia};
pub use metric_def::{
    CAPTION, HASHTAGS, MEDIA_ID_COLUMN, MEDIA_URL, METRIC_SCHEMA, MetricDef, MetricSource, THUMBNAIL_URL, TIMESTAMP, TOTAL_PLAYS, schema_index,
};
pub use metric_value::MetricValue;
