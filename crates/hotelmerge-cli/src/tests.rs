use std::collections::HashSet;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

fn test_config(base_url: &str) -> AppConfig {
    AppConfig {
        supplier_base_url: base_url.to_owned(),
        request_timeout_secs: 5,
        user_agent: "hotelmerge-test/0.1".to_owned(),
        max_retries: 0,
        retry_backoff_base_secs: 0,
        log_level: "warn".to_owned(),
    }
}

// ---------------------------------------------------------------------------
// Argument parsing
// ---------------------------------------------------------------------------

#[test]
fn parses_none_sentinels() {
    let cli = Cli::try_parse_from(["hotelmerge", "none", "none"]).expect("expected valid cli args");
    assert_eq!(cli.hotel_ids, IdFilter::Any);
    assert_eq!(cli.destination_ids, IdFilter::Any);
}

#[test]
fn parses_comma_separated_lists() {
    let cli = Cli::try_parse_from(["hotelmerge", "iJhz,SjyX", "5432,1122"])
        .expect("expected valid cli args");
    assert_eq!(
        cli.hotel_ids,
        IdFilter::Only(HashSet::from(["iJhz".to_owned(), "SjyX".to_owned()]))
    );
    assert_eq!(
        cli.destination_ids,
        IdFilter::Only(HashSet::from([5432, 1122]))
    );
}

#[test]
fn rejects_non_numeric_destination_id() {
    let err = Cli::try_parse_from(["hotelmerge", "none", "5432,abc"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    assert_ne!(err.exit_code(), 0);
}

#[test]
fn requires_both_arguments() {
    let err = Cli::try_parse_from(["hotelmerge", "iJhz"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
}

#[test]
fn rejects_extra_arguments() {
    assert!(Cli::try_parse_from(["hotelmerge", "none", "none", "extra"]).is_err());
}

// ---------------------------------------------------------------------------
// run
// ---------------------------------------------------------------------------

async fn mount(server: &MockServer, supplier: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/suppliers/{supplier}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn run_merges_filters_and_renders_snake_case_json() {
    let server = MockServer::start().await;
    mount(
        &server,
        "paperflies",
        json!([
            {"hotel_id": "iJhz", "destination_id": 5432, "hotel_name": "Beach Villas Singapore"},
            {"hotel_id": "f8c9", "destination_id": 1122, "hotel_name": "Hilton Shinjuku"}
        ]),
    )
    .await;
    mount(
        &server,
        "patagonia",
        json!([{"id": "iJhz", "destination": 5432, "lat": 1.264_751, "lng": 103.824_006}]),
    )
    .await;
    mount(
        &server,
        "acme",
        json!([{"Id": "iJhz", "DestinationId": 5432, "City": "Singapore", "Facilities": ["BusinessCenter"]}]),
    )
    .await;

    let cli = Cli::try_parse_from(["hotelmerge", "iJhz", "none"]).unwrap();
    let output = run(&cli, &test_config(&server.uri())).await.unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    let hotels = value.as_array().expect("expected a JSON array");
    assert_eq!(hotels.len(), 1);
    let hotel = &hotels[0];
    assert_eq!(hotel["id"], "iJhz");
    assert_eq!(hotel["destination_id"], 5432);
    assert_eq!(hotel["name"], "Beach Villas Singapore");
    assert_eq!(hotel["location"]["city"], "Singapore");
    assert_eq!(hotel["location"]["longitude"], 103.824_006);
    assert_eq!(hotel["amenities"]["general"], json!(["business center"]));
    assert!(hotel["booking_conditions"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn run_succeeds_when_every_supplier_fails() {
    // Nothing mounted: every endpoint answers 404.
    let server = MockServer::start().await;
    let cli = Cli::try_parse_from(["hotelmerge", "none", "none"]).unwrap();
    let output = run(&cli, &test_config(&server.uri())).await.unwrap();
    assert_eq!(output, "[]");
}
