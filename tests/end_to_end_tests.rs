use chrono::NaiveDate;
use highlights_feed::data_fetcher::api::create_http_client;
use highlights_feed::{AppError, Config, HighlightEntry, run_pipeline};
use serde_json::{Value, json};
use std::time::Duration;
use tempfile::tempdir;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

const YESTERDAY: &str = "2024-10-18";
const TODAY: &str = "2024-10-19";

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 10, 19).unwrap()
}

fn event(id: i64, status: &str, home: &str, away: &str) -> Value {
    json!({
        "id": id,
        "status": {"code": 100, "description": "Ended", "type": status},
        "homeTeam": {"name": home, "shortName": home},
        "awayTeam": {"name": away},
        "tournament": {"name": "LaLiga", "slug": "laliga"},
        "startTimestamp": 1729278000
    })
}

async fn mount_schedule(server: &MockServer, date: &str, events: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path(format!("/sport/football/scheduled-events/{date}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "events": events })))
        .mount(server)
        .await;
}

async fn mount_schedule_failure(server: &MockServer, date: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/sport/football/scheduled-events/{date}")))
        .respond_with(ResponseTemplate::new(503))
        .mount(server)
        .await;
}

async fn mount_highlight(server: &MockServer, id: i64, subtitle: &str, url: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/event/{id}/highlights")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "highlights": [{"title": "Match", "subtitle": subtitle, "url": url}]
        })))
        .mount(server)
        .await;
}

fn config_for(server: &MockServer, output: &std::path::Path) -> Config {
    Config {
        api_domain: server.uri(),
        highlights_domain: server.uri(),
        output_path: output.to_string_lossy().to_string(),
        ..Config::default()
    }
}

async fn read_feed(output: &std::path::Path) -> Vec<HighlightEntry> {
    let content = tokio::fs::read_to_string(output).await.unwrap();
    serde_json::from_str(&content).unwrap()
}

#[tokio::test]
async fn test_single_featured_match_end_to_end() {
    let server = MockServer::start().await;
    mount_schedule(
        &server,
        YESTERDAY,
        vec![event(11352451, "finished", "Real Madrid", "Villarreal")],
    )
    .await;
    mount_schedule(&server, TODAY, vec![]).await;
    mount_highlight(
        &server,
        11352451,
        "Match Highlights",
        "https://youtu.be/dQw4w9WgXcQ?t=5",
    )
    .await;

    let temp_dir = tempdir().unwrap();
    let output = temp_dir.path().join("api").join("highlights.json");
    let config = config_for(&server, &output);
    let client = create_http_client(&config).unwrap();

    let summary = run_pipeline(&client, &config, today()).await.unwrap();
    assert_eq!(summary.total, 1);
    assert_eq!(summary.priority, 1);

    let feed = read_feed(&output).await;
    assert_eq!(feed.len(), 1);
    let entry = &feed[0];
    assert!(entry.is_priority);
    assert_eq!(entry.team1, "Real Madrid");
    assert_eq!(entry.team2, "Villarreal");
    assert_eq!(entry.category, "LaLiga");
    assert_eq!(entry.date, "2024-10-18");
    assert_eq!(entry.link, "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
    assert_eq!(entry.id.len(), 10);
}

#[tokio::test]
async fn test_failed_schedule_date_does_not_abort_run() {
    let server = MockServer::start().await;
    mount_schedule_failure(&server, YESTERDAY).await;
    mount_schedule(
        &server,
        TODAY,
        vec![event(2, "finished", "Getafe", "Alaves")],
    )
    .await;
    mount_highlight(&server, 2, "Extended Highlights", "https://www.youtube.com/watch?v=ggggggggggg").await;

    let temp_dir = tempdir().unwrap();
    let output = temp_dir.path().join("highlights.json");
    let config = config_for(&server, &output);
    let client = create_http_client(&config).unwrap();

    let summary = run_pipeline(&client, &config, today()).await.unwrap();
    assert_eq!(summary.total, 1);
    assert_eq!(summary.priority, 0);

    let feed = read_feed(&output).await;
    assert_eq!(feed[0].team1, "Getafe");
    assert!(!feed[0].is_priority);
}

#[tokio::test]
async fn test_schedule_timeout_on_one_date_does_not_abort_run() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/sport/football/scheduled-events/{YESTERDAY}")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "events": [event(1, "finished", "Lost", "Match")] }))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;
    mount_schedule(
        &server,
        TODAY,
        vec![event(2, "finished", "Getafe", "Alaves")],
    )
    .await;
    mount_highlight(&server, 2, "Highlights", "https://youtu.be/ggggggggggg").await;

    let temp_dir = tempdir().unwrap();
    let output = temp_dir.path().join("highlights.json");
    let config = Config {
        http_timeout_seconds: 1,
        ..config_for(&server, &output)
    };
    let client = create_http_client(&config).unwrap();

    let summary = run_pipeline(&client, &config, today()).await.unwrap();
    assert_eq!(summary.total, 1);

    let feed = read_feed(&output).await;
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].team1, "Getafe");
}

#[tokio::test]
async fn test_unreachable_upstream_writes_empty_feed() {
    let temp_dir = tempdir().unwrap();
    let output = temp_dir.path().join("highlights.json");
    let config = Config {
        api_domain: "http://127.0.0.1:1".to_string(),
        highlights_domain: "http://127.0.0.1:1".to_string(),
        output_path: output.to_string_lossy().to_string(),
        ..Config::default()
    };
    let client = create_http_client(&config).unwrap();

    let summary = run_pipeline(&client, &config, today()).await.unwrap();
    assert_eq!(summary.total, 0);
    assert!(read_feed(&output).await.is_empty());
}

#[tokio::test]
async fn test_both_dates_failing_writes_empty_feed() {
    let server = MockServer::start().await;
    mount_schedule_failure(&server, YESTERDAY).await;
    mount_schedule_failure(&server, TODAY).await;

    let temp_dir = tempdir().unwrap();
    let output = temp_dir.path().join("highlights.json");
    let config = config_for(&server, &output);
    let client = create_http_client(&config).unwrap();

    let summary = run_pipeline(&client, &config, today()).await.unwrap();
    assert_eq!(summary.total, 0);
    assert!(read_feed(&output).await.is_empty());
}

#[tokio::test]
async fn test_match_in_both_dates_is_processed_once() {
    let server = MockServer::start().await;
    mount_schedule(
        &server,
        YESTERDAY,
        vec![event(7, "finished", "Arsenal", "Everton")],
    )
    .await;
    mount_schedule(
        &server,
        TODAY,
        vec![event(7, "ended", "Arsenal", "Everton")],
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/event/7/highlights"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "highlights": [{"subtitle": "Highlights", "url": "https://youtu.be/hhhhhhhhhhh"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let temp_dir = tempdir().unwrap();
    let output = temp_dir.path().join("highlights.json");
    let config = config_for(&server, &output);
    let client = create_http_client(&config).unwrap();

    run_pipeline(&client, &config, today()).await.unwrap();
    assert_eq!(read_feed(&output).await.len(), 1);
}

#[tokio::test]
async fn test_unfinished_and_unqualified_matches_are_dropped() {
    let server = MockServer::start().await;
    mount_schedule(
        &server,
        YESTERDAY,
        vec![
            event(1, "inprogress", "Chelsea", "Fulham"),
            event(2, "finished", "Lens", "Nantes"),
            event(3, "FINISHED", "Celta", "Osasuna"),
        ],
    )
    .await;
    mount_schedule(&server, TODAY, vec![]).await;
    mount_highlight(&server, 2, "Post-match interview", "https://youtu.be/iiiiiiiiiii").await;
    mount_highlight(&server, 3, "Highlights", "https://youtu.be/jjjjjjjjjjj").await;

    let temp_dir = tempdir().unwrap();
    let output = temp_dir.path().join("highlights.json");
    let config = config_for(&server, &output);
    let client = create_http_client(&config).unwrap();

    let summary = run_pipeline(&client, &config, today()).await.unwrap();
    assert_eq!(summary.finished_matches, 2);
    assert_eq!(summary.dropped_without_highlights, 1);

    let feed = read_feed(&output).await;
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].team1, "Celta");
}

#[tokio::test]
async fn test_highlight_lookup_failure_drops_match_only() {
    let server = MockServer::start().await;
    mount_schedule(
        &server,
        YESTERDAY,
        vec![
            event(1, "finished", "Juventus", "Torino"),
            event(2, "finished", "Genoa", "Parma"),
        ],
    )
    .await;
    mount_schedule(&server, TODAY, vec![]).await;
    Mock::given(method("GET"))
        .and(path("/event/1/highlights"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;
    mount_highlight(&server, 2, "Highlights", "https://youtu.be/kkkkkkkkkkk").await;

    let temp_dir = tempdir().unwrap();
    let output = temp_dir.path().join("highlights.json");
    let config = config_for(&server, &output);
    let client = create_http_client(&config).unwrap();

    let summary = run_pipeline(&client, &config, today()).await.unwrap();
    assert_eq!(summary.highlight_failures, 1);

    let feed = read_feed(&output).await;
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].team1, "Genoa");
}

/// A finished event missing a required field stops the whole run while a
/// failed date or lookup only skips; this pins that asymmetry.
#[tokio::test]
async fn test_malformed_finished_event_is_fatal_and_keeps_old_feed() {
    let server = MockServer::start().await;
    mount_schedule(
        &server,
        YESTERDAY,
        vec![json!({"id": 5, "status": {"type": "finished"}, "homeTeam": {"name": "Roma"}})],
    )
    .await;
    mount_schedule(&server, TODAY, vec![]).await;

    let temp_dir = tempdir().unwrap();
    let output = temp_dir.path().join("highlights.json");
    tokio::fs::write(&output, "[]").await.unwrap();
    let config = config_for(&server, &output);
    let client = create_http_client(&config).unwrap();

    let result = run_pipeline(&client, &config, today()).await;
    assert!(matches!(result, Err(AppError::MalformedEvent { .. })));
    assert_eq!(tokio::fs::read_to_string(&output).await.unwrap(), "[]");
}

#[tokio::test]
async fn test_previous_feed_is_overwritten_not_merged() {
    let server = MockServer::start().await;
    mount_schedule(
        &server,
        YESTERDAY,
        vec![event(1, "finished", "Brazil", "Chile")],
    )
    .await;
    mount_schedule(&server, TODAY, vec![]).await;
    mount_highlight(&server, 1, "Highlights", "https://youtu.be/lllllllllll").await;

    let temp_dir = tempdir().unwrap();
    let output = temp_dir.path().join("highlights.json");
    let stale = json!([{
        "id": "zzzz999999", "team1": "Old", "team2": "Entry", "category": "Cup",
        "date": "2020-01-01", "link": "https://www.youtube.com/watch?v=mmmmmmmmmmm",
        "isPriority": true
    }]);
    tokio::fs::write(&output, stale.to_string()).await.unwrap();

    let config = config_for(&server, &output);
    let client = create_http_client(&config).unwrap();
    run_pipeline(&client, &config, today()).await.unwrap();

    let feed = read_feed(&output).await;
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].team1, "Brazil");
}
