//! Integration tests for the audience city breakdowns

use camino::Utf8PathBuf;
use reel_insights::error::FetchError;
use reel_insights::graph::{CityBreakdown, DemographicMetric, GraphClient, fetch_demographics};
use reel_insights::reports::export_demographics;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "secret-token";
const ACCOUNT: &str = "17841400000000000";

#[tokio::test]
async fn test_fetch_and_export_followers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/{ACCOUNT}/insights")))
        .and(query_param("metric", "follower_demographics"))
        .and(query_param("period", "lifetime"))
        .and(query_param("timeframe", "this_month"))
        .and(query_param("breakdown", "city"))
        .and(query_param("metric_type", "total_value"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [ {
                "name": "follower_demographics",
                "period": "lifetime",
                "total_value": { "breakdowns": [ {
                    "dimension_keys": ["city"],
                    "results": [
                        { "dimension_values": ["Austin, Texas"], "value": 310 },
                        { "dimension_values": ["Singapore"], "value": 12 }
                    ]
                } ] }
            } ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = GraphClient::new(server.uri()).unwrap();
    let cities = fetch_demographics(&client, ACCOUNT, TOKEN, DemographicMetric::Followers).await.unwrap();

    assert_eq!(
        cities,
        [
            CityBreakdown {
                city: "Austin".into(),
                region: "Texas".into(),
                value: 310
            },
            CityBreakdown {
                city: "Singapore".into(),
                region: String::new(),
                value: 12
            },
        ]
    );

    let dir = tempfile::tempdir().unwrap();
    let destination = Utf8PathBuf::from_path_buf(dir.path().join("follower_cities.csv")).unwrap();
    export_demographics(&cities, &destination).unwrap();

    let written = std::fs::read_to_string(&destination).unwrap();
    assert_eq!(written, "city,region,value\nAustin,Texas,310\nSingapore,,12\n");
}

#[tokio::test]
async fn test_empty_data_yields_no_rows() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/{ACCOUNT}/insights")))
        .and(query_param("metric", "engaged_audience_demographics"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(&server)
        .await;

    let client = GraphClient::new(server.uri()).unwrap();
    let cities = fetch_demographics(&client, ACCOUNT, TOKEN, DemographicMetric::EngagedAudience)
        .await
        .unwrap();
    assert!(cities.is_empty());
}

#[tokio::test]
async fn test_http_failure_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/{ACCOUNT}/insights")))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let client = GraphClient::new(server.uri()).unwrap();
    let err = fetch_demographics(&client, ACCOUNT, TOKEN, DemographicMetric::Followers).await.unwrap_err();

    let FetchError::Request { resource, .. } = &err else {
        panic!("expected a request failure, got {err:?}");
    };
    assert!(resource.starts_with("follower_demographics"));
    assert!(!resource.contains(TOKEN));
}
