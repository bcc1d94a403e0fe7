//! Integration tests for insight fetching and aggregation against a mocked graph API

use reel_insights::aggregate::aggregate;
use reel_insights::config::InsightErrorPolicy;
use reel_insights::error::{InsightError, RequestFailure};
use reel_insights::graph::{GraphClient, INSIGHT_METRICS, MediaItem, MediaType, fetch_insights};
use reel_insights::metrics::{CAPTION, HASHTAGS, MetricValue, TIMESTAMP, TOTAL_PLAYS};
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "secret-token";

fn insight(name: &str, title: &str, value: Value) -> Value {
    json!({
        "name": name,
        "period": "lifetime",
        "title": title,
        "values": [ { "value": value } ],
        "id": format!("x/insights/{name}/lifetime")
    })
}

fn reel(id: &str, caption: &str) -> MediaItem {
    serde_json::from_value(json!({
        "id": id,
        "media_type": "VIDEO",
        "caption": caption,
        "timestamp": "2024-05-01T12:00:00+0000",
        "media_url": format!("https://cdn.example.com/{id}.mp4"),
        "thumbnail_url": format!("https://cdn.example.com/{id}.jpg")
    }))
    .unwrap()
}

async fn mount_insights(server: &MockServer, media_id: &str, data: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/{media_id}/insights")))
        .and(query_param("metric", INSIGHT_METRICS))
        .and(query_param("access_token", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": data })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_fetch_insights() {
    let server = MockServer::start().await;
    mount_insights(
        &server,
        "m1",
        json!([insight("likes", "Likes", json!(50)), insight("reach", "Accounts Reached", json!(900))]),
    )
    .await;

    let client = GraphClient::new(server.uri()).unwrap();
    let records = fetch_insights(&client, "m1", TOKEN).await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].title, "Likes");
    assert_eq!(records[0].value, MetricValue::UInt(50));
    assert_eq!(records[1].name.as_deref(), Some("reach"));
}

#[tokio::test]
async fn test_fetch_insights_failure_names_media() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/m1/insights"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "error": { "message": "unsupported" } })))
        .mount(&server)
        .await;

    let client = GraphClient::new(server.uri()).unwrap();
    let err = fetch_insights(&client, "m1", TOKEN).await.unwrap_err();

    assert_eq!(err.media_id, "m1");
    assert!(matches!(err.source, RequestFailure::Status(status) if status.as_u16() == 400));
}

#[tokio::test]
async fn test_aggregate_end_to_end() {
    let server = MockServer::start().await;
    mount_insights(
        &server,
        "m1",
        json!([
            insight("likes", "Likes", json!(50)),
            insight("comments", "Comments", json!(4)),
            insight("ig_reels_aggregated_all_plays_count", "Total Plays", json!(200)),
            insight("ig_reels_avg_watch_time", "Average Watch Time", json!(3.5))
        ]),
    )
    .await;
    mount_insights(&server, "m3", json!([insight("likes", "Likes", json!(10))])).await;

    let mut image: MediaItem = reel("m2", "a photo");
    image.media_type = MediaType::Image;
    let items = [reel("m1", "Great day #fun #sun #fun\nmore words"), image, reel("m3", "")];

    let client = GraphClient::new(server.uri()).unwrap();
    let aggregated = aggregate(&client, &items, TOKEN, InsightErrorPolicy::Abort).await.unwrap();

    let ids: Vec<_> = aggregated.iter().map(|(id, _)| id).collect();
    assert_eq!(ids, ["m1", "m3"]);

    let first = aggregated.get("m1").unwrap();
    assert_eq!(first.text(CAPTION), Some("Great day #fun #sun #fun"));
    assert_eq!(first.text(HASHTAGS), Some("#fun #sun #fun"));
    assert_eq!(first.text(TIMESTAMP), Some("2024-05-01"));
    assert_eq!(first.get(TOTAL_PLAYS), Some(&MetricValue::UInt(200)));
    assert_eq!(first.get("Average Watch Time"), Some(&MetricValue::Float(3.5)));
    assert_eq!(first.text("Like PCT"), Some("25.00%"));
    assert_eq!(first.text("Comment PCT"), Some("2.00%"));
    assert_eq!(first.get("Accounts Reached"), None);

    let second = aggregated.get("m3").unwrap();
    assert_eq!(second.get(TOTAL_PLAYS), None);
    assert_eq!(second.text("Like PCT"), Some("1000.00%"));

    // the image is never looked up
    let requests = server.received_requests().await.unwrap();
    assert!(requests.iter().all(|request| request.url.path() != "/m2/insights"));
}

#[tokio::test]
async fn test_aggregate_abort_and_skip() {
    let server = MockServer::start().await;
    mount_insights(&server, "m1", json!([insight("likes", "Likes", json!(1))])).await;
    mount_insights(&server, "m3", json!([insight("likes", "Likes", json!(3))])).await;

    Mock::given(method("GET"))
        .and(path("/m2/insights"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let items = [reel("m1", "one"), reel("m2", "two"), reel("m3", "three")];
    let client = GraphClient::new(server.uri()).unwrap();

    let err: InsightError = aggregate(&client, &items, TOKEN, InsightErrorPolicy::Abort).await.unwrap_err();
    assert_eq!(err.media_id, "m2");

    let aggregated = aggregate(&client, &items, TOKEN, InsightErrorPolicy::Skip).await.unwrap();
    let ids: Vec<_> = aggregated.iter().map(|(id, _)| id).collect();
    assert_eq!(ids, ["m1", "m3"]);
}
