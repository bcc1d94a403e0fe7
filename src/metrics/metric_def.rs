/// Where the value of a schema column comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricSource {
    /// First line of the media caption
    Caption,
    /// Publication date as `YYYY-MM-DD`
    Timestamp,
    /// Every `#tag` of the caption, space separated
    Hashtags,
    MediaUrl,
    ThumbnailUrl,
    /// An insight metric, identified by its API metric name
    Insight(&'static str),
    /// Percentage of total plays for the named column
    ShareOfPlays(&'static str),
}

#[derive(Debug)]
pub struct MetricDef {
    /// Column header, also the insight title matched during aggregation
    pub name: &'static str,
    pub source: MetricSource,
    /// Fixed width of the column in Excel reports
    pub column_width: Option<f64>,
}

macro_rules! metric_def {
    ($name:expr, $source:expr) => {
        MetricDef {
            name: $name,
            source: $source,
            column_width: None,
        }
    };
    ($name:expr, $source:expr, $width:expr) => {
        MetricDef {
            name: $name,
            source: $source,
            column_width: Some($width),
        }
    };
}

/// Header of the media identifier column that precedes the schema columns.
pub const MEDIA_ID_COLUMN: &str = "media_id";

pub const CAPTION: &str = "Caption";
pub const TIMESTAMP: &str = "Timestamp";
pub const HASHTAGS: &str = "Hashtags";
pub const MEDIA_URL: &str = "Media URL";
pub const THUMBNAIL_URL: &str = "Thumbnail URL";
pub const TOTAL_PLAYS: &str = "Total Plays";

const LIKES: &str = "Likes";
const COMMENTS: &str = "Comments";
const SHARES: &str = "Shares";
const SAVED: &str = "Saved";

/// Output columns, in export order.
pub const METRIC_SCHEMA: &[MetricDef] = &[
    metric_def!(CAPTION, MetricSource::Caption, 40.0),
    metric_def!(TIMESTAMP, MetricSource::Timestamp, 12.0),
    metric_def!("Total Interactions", MetricSource::Insight("total_interactions")),
    metric_def!("Accounts Reached", MetricSource::Insight("reach"), 15.0),
    metric_def!(COMMENTS, MetricSource::Insight("comments"), 9.0),
    metric_def!(LIKES, MetricSource::Insight("likes"), 9.0),
    metric_def!(SAVED, MetricSource::Insight("saved"), 6.17),
    metric_def!(SHARES, MetricSource::Insight("shares"), 6.17),
    metric_def!("Initial Plays", MetricSource::Insight("plays"), 9.0),
    metric_def!(TOTAL_PLAYS, MetricSource::Insight("ig_reels_aggregated_all_plays_count")),
    metric_def!("Replays", MetricSource::Insight("clips_replays_count")),
    metric_def!("Watch Time", MetricSource::Insight("ig_reels_video_view_total_time")),
    metric_def!("Average Watch Time", MetricSource::Insight("ig_reels_avg_watch_time")),
    metric_def!("Like PCT", MetricSource::ShareOfPlays(LIKES)),
    metric_def!("Comment PCT", MetricSource::ShareOfPlays(COMMENTS)),
    metric_def!("Share PCT", MetricSource::ShareOfPlays(SHARES)),
    metric_def!("Save PCT", MetricSource::ShareOfPlays(SAVED)),
    metric_def!(HASHTAGS, MetricSource::Hashtags, 104.0),
    metric_def!(MEDIA_URL, MetricSource::MediaUrl),
    metric_def!(THUMBNAIL_URL, MetricSource::ThumbnailUrl),
];

/// Position of the column called `name` in [`METRIC_SCHEMA`].
#[must_use]
pub fn schema_index(name: &str) -> Option<usize> {
    METRIC_SCHEMA.iter().position(|def| def.name == name)
}
