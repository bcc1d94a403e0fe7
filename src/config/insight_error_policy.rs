use serde::Deserialize;

/// What aggregation does when the insights of one media item cannot be fetched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightErrorPolicy {
    /// Fail the whole run
    #[default]
    Abort,

    /// Log a warning and leave the item out
    Skip,
}
