use super::client::GraphClient;
use crate::error::InsightError;
use crate::metrics::MetricValue;
use serde::Deserialize;
use serde_json::Value;

const LOG_TARGET: &str = "     graph";

/// Insight metrics requested for every reel.
pub const INSIGHT_METRICS: &str = "reach,comments,likes,saved,shares,plays,total_interactions,\
ig_reels_video_view_total_time,ig_reels_avg_watch_time,ig_reels_aggregated_all_plays_count,clips_replays_count";

/// One insight metric reported for a media item
#[derive(Debug, Clone, PartialEq)]
pub struct InsightRecord {
    /// Display title, e.g. `Likes`
    pub title: String,
    /// API metric name, e.g. `likes`
    pub name: Option<String>,
    pub value: MetricValue,
}

/// Anything that can produce the insight records of a media item.
pub trait InsightSource {
    fn insights_for(&self, media_id: &str, access_token: &str) -> impl Future<Output = Result<Vec<InsightRecord>, InsightError>>;
}

impl InsightSource for GraphClient {
    async fn insights_for(&self, media_id: &str, access_token: &str) -> Result<Vec<InsightRecord>, InsightError> {
        fetch_insights(self, media_id, access_token).await
    }
}

#[derive(Debug, Deserialize)]
struct InsightsResponse {
    data: Vec<RawInsight>,
}

#[derive(Debug, Deserialize)]
struct RawInsight {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    values: Vec<RawValue>,
}

#[derive(Debug, Deserialize)]
struct RawValue {
    #[serde(default)]
    value: Option<Value>,
}

impl From<RawInsight> for InsightRecord {
    fn from(raw: RawInsight) -> Self {
        let value = raw.values.into_iter().next().and_then(|v| v.value);
        Self {
            title: raw.title,
            name: raw.name,
            value: metric_value(value),
        }
    }
}

/// Missing values count as zero.
fn metric_value(value: Option<Value>) -> MetricValue {
    match value {
        None | Some(Value::Null) => MetricValue::UInt(0),
        Some(Value::Number(n)) => n.as_u64().map_or_else(|| MetricValue::Float(n.as_f64().unwrap_or_default()), MetricValue::UInt),
        Some(Value::Bool(b)) => MetricValue::UInt(u64::from(b)),
        Some(Value::String(s)) => MetricValue::String(s),
        Some(other) => MetricValue::String(other.to_string()),
    }
}

/// Fetch the insight metrics of a single media item
pub async fn fetch_insights(client: &GraphClient, media_id: &str, access_token: &str) -> Result<Vec<InsightRecord>, InsightError> {
    let to_error = |source| InsightError {
        media_id: media_id.to_string(),
        source,
    };

    let url = client
        .endpoint(
            &format!("{media_id}/insights"),
            &[("metric", INSIGHT_METRICS), ("access_token", access_token)],
        )
        .map_err(to_error)?;

    let response: InsightsResponse = client.get_json(url.as_str()).await.map_err(to_error)?;

    log::debug!(target: LOG_TARGET, "Media '{media_id}' reported {} insight metrics", response.data.len());
    Ok(response.data.into_iter().map(InsightRecord::from).collect())
}
