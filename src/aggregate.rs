//! Turns the media listing and per-reel insights into schema-shaped entries
//!
//! Only `VIDEO` items are kept. For each of them the caption, publication date, hashtags,
//! and URLs come from the listing, the insight columns come from the item's insight
//! records, and the `* PCT` columns are derived from those insights relative to total plays.

use crate::config::InsightErrorPolicy;
use crate::error::{Chain, InsightError};
use crate::graph::{InsightRecord, InsightSource, MediaItem, MediaType};
use crate::metrics::{
    AggregatedEntry, AggregatedMedia, CAPTION, HASHTAGS, MEDIA_URL, METRIC_SCHEMA, MetricSource, MetricValue, THUMBNAIL_URL, TIMESTAMP,
    TOTAL_PLAYS,
};
use chrono::DateTime;
use regex::Regex;
use std::sync::LazyLock;

const LOG_TARGET: &str = " aggregate";

static HASHTAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#\w+").expect("invalid regex"));

/// Aggregate the reels among `media_items`, fetching the insights of each one from `source`.
///
/// Entries keep the order of `media_items`. With [`InsightErrorPolicy::Abort`] the first
/// failing insights request fails the whole aggregation; with [`InsightErrorPolicy::Skip`]
/// the failing item is left out and aggregation continues.
pub async fn aggregate<S: InsightSource>(
    source: &S,
    media_items: &[MediaItem],
    access_token: &str,
    policy: InsightErrorPolicy,
) -> Result<AggregatedMedia, InsightError> {
    let mut aggregated = AggregatedMedia::default();

    for item in media_items.iter().filter(|item| item.media_type == MediaType::Video) {
        let insights = match source.insights_for(&item.id, access_token).await {
            Ok(insights) => insights,
            Err(e) if policy == InsightErrorPolicy::Skip => {
                log::warn!(target: LOG_TARGET, "Skipping media '{}': {}", item.id, Chain(&e));
                continue;
            }
            Err(e) => return Err(e),
        };

        aggregated.insert(item.id.clone(), build_entry(item, &insights));
    }

    log::info!(
        target: LOG_TARGET,
        "Aggregated {} of {} media items",
        aggregated.len(),
        media_items.len()
    );

    Ok(aggregated)
}

/// Build the entry of a single media item from its listing data and insight records.
#[must_use]
pub fn build_entry(item: &MediaItem, insights: &[InsightRecord]) -> AggregatedEntry {
    let mut entry = AggregatedEntry::new();

    if let Some(caption) = &item.caption {
        let first_line = caption.split('\n').next().unwrap_or_default();
        let _ = entry.set(CAPTION, Some(MetricValue::String(first_line.to_string())));
        let _ = entry.set(HASHTAGS, Some(MetricValue::String(extract_hashtags(caption))));
    }

    let _ = entry.set(TIMESTAMP, item.timestamp.as_deref().and_then(format_timestamp).map(MetricValue::String));

    let _ = entry.set(MEDIA_URL, item.media_url.clone().map(MetricValue::String));
    let _ = entry.set(THUMBNAIL_URL, item.thumbnail_url.clone().map(MetricValue::String));

    for record in insights {
        merge_insight(&mut entry, record);
    }

    apply_play_ratios(&mut entry);
    entry
}

/// Every `#tag` of `caption`, in order of appearance, space separated.
#[must_use]
pub fn extract_hashtags(caption: &str) -> String {
    HASHTAG_REGEX.find_iter(caption).map(|m| m.as_str()).collect::<Vec<_>>().join(" ")
}

/// Reduce a graph API timestamp such as `2024-05-01T12:00:00+0000` to `2024-05-01`.
#[must_use]
pub fn format_timestamp(raw: &str) -> Option<String> {
    DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z")
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .ok()
        .map(|ts| ts.format("%Y-%m-%d").to_string())
}

fn merge_insight(entry: &mut AggregatedEntry, record: &InsightRecord) {
    let column = METRIC_SCHEMA
        .iter()
        .filter(|def| matches!(def.source, MetricSource::Insight(_)))
        .find(|def| def.name == record.title)
        .or_else(|| {
            let name = record.name.as_deref()?;
            METRIC_SCHEMA
                .iter()
                .find(|def| matches!(def.source, MetricSource::Insight(api_name) if api_name == name))
        });

    match column {
        Some(def) => {
            let _ = entry.set(def.name, Some(record.value.clone()));
        }
        None => log::debug!(target: LOG_TARGET, "Ignoring insight '{}' with no matching column", record.title),
    }
}

fn apply_play_ratios(entry: &mut AggregatedEntry) {
    let total_plays = entry
        .get(TOTAL_PLAYS)
        .and_then(MetricValue::as_f64)
        .filter(|plays| *plays > 0.0)
        .unwrap_or(1.0);

    for def in METRIC_SCHEMA {
        if let MetricSource::ShareOfPlays(metric) = def.source {
            let count = entry.get(metric).and_then(MetricValue::as_f64).unwrap_or(0.0);
            let pct = format!("{:.2}%", count / total_plays * 100.0);
            let _ = entry.set(def.name, Some(MetricValue::String(pct)));
        }
    }
}
