use super::client::{GraphClient, redact};
use crate::error::FetchError;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

const LOG_TARGET: &str = "     graph";

/// Account-level audience metrics broken down by city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum DemographicMetric {
    #[strum(to_string = "follower_demographics")]
    Followers,
    #[strum(to_string = "engaged_audience_demographics")]
    EngagedAudience,
}

impl DemographicMetric {
    /// Stem of the export file holding this breakdown.
    #[must_use]
    pub const fn file_stem(self) -> &'static str {
        match self {
            Self::Followers => "follower_cities",
            Self::EngagedAudience => "engaged_audience_cities",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityBreakdown {
    pub city: String,
    pub region: String,
    pub value: u64,
}

impl CityBreakdown {
    /// Split a `City, Region` dimension value. A missing region becomes empty.
    fn from_dimension(dimension: &str, value: u64) -> Self {
        let mut parts = dimension.split(", ");
        let city = parts.next().unwrap_or_default().to_string();
        let region = parts.next().unwrap_or_default().to_string();
        Self { city, region, value }
    }
}

#[derive(Debug, Deserialize)]
struct DemographicsResponse {
    data: Vec<DemographicData>,
}

#[derive(Debug, Deserialize)]
struct DemographicData {
    total_value: TotalValue,
}

#[derive(Debug, Deserialize)]
struct TotalValue {
    #[serde(default)]
    breakdowns: Vec<Breakdown>,
}

#[derive(Debug, Deserialize)]
struct Breakdown {
    #[serde(default)]
    results: Vec<BreakdownResult>,
}

#[derive(Debug, Deserialize)]
struct BreakdownResult {
    dimension_values: Vec<String>,
    value: u64,
}

impl DemographicsResponse {
    fn into_cities(self) -> Vec<CityBreakdown> {
        self.data
            .into_iter()
            .next()
            .and_then(|data| data.total_value.breakdowns.into_iter().next())
            .map(|breakdown| {
                breakdown
                    .results
                    .into_iter()
                    .map(|result| {
                        let dimension = result.dimension_values.first().map_or("", String::as_str);
                        CityBreakdown::from_dimension(dimension, result.value)
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Fetch the lifetime city breakdown of `metric` for the account.
pub async fn fetch_demographics(
    client: &GraphClient,
    account_id: &str,
    access_token: &str,
    metric: DemographicMetric,
) -> Result<Vec<CityBreakdown>, FetchError> {
    if access_token.is_empty() {
        return Err(FetchError::MissingArgument("access_token"));
    }

    if account_id.is_empty() {
        return Err(FetchError::MissingArgument("account_id"));
    }

    let metric_name = metric.to_string();
    let url = client
        .endpoint(
            &format!("{account_id}/insights"),
            &[
                ("metric", metric_name.as_str()),
                ("period", "lifetime"),
                ("timeframe", "this_month"),
                ("breakdown", "city"),
                ("metric_type", "total_value"),
                ("access_token", access_token),
            ],
        )
        .map_err(|source| FetchError::Request {
            resource: metric_name.clone(),
            source,
        })?;

    let response: DemographicsResponse = client.get_json(url.as_str()).await.map_err(|source| FetchError::Request {
        resource: format!("{metric_name} ({})", redact(url.as_str())),
        source,
    })?;

    let cities = response.into_cities();
    log::info!(target: LOG_TARGET, "Fetched {} cities for {metric_name}", cities.len());
    Ok(cities)
}
