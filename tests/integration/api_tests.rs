//! API integration tests
//!
//! These run against a live server backed by a migrated database.

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Unique suffix so repeated runs don't collide on unique columns
fn unique(prefix: &str) -> String {
    format!("{}-{}", prefix, chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default())
}

async fn post(client: &Client, path: &str, body: Value) -> (StatusCode, Value) {
    let response = client
        .post(format!("{}{}", BASE_URL, path))
        .json(&body)
        .send()
        .await
        .expect("Failed to send request");
    let status = response.status();
    let body = response.json().await.unwrap_or(Value::Null);
    (status, body)
}

async fn patch(client: &Client, path: &str, body: Value) -> (StatusCode, Value) {
    let response = client
        .patch(format!("{}{}", BASE_URL, path))
        .json(&body)
        .send()
        .await
        .expect("Failed to send request");
    let status = response.status();
    let body = response.json().await.unwrap_or(Value::Null);
    (status, body)
}

async fn get(client: &Client, path: &str) -> (StatusCode, Value) {
    let response = client
        .get(format!("{}{}", BASE_URL, path))
        .send()
        .await
        .expect("Failed to send request");
    let status = response.status();
    let body = response.json().await.unwrap_or(Value::Null);
    (status, body)
}

async fn create_team(client: &Client) -> i64 {
    let (status, body) = post(client, "/teams", json!({ "name": unique("team") })).await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().expect("No team id")
}

async fn create_user(client: &Client) -> i64 {
    let email = format!("{}@example.com", unique("tech"));
    let (status, body) = post(
        client,
        "/users",
        json!({ "name": "Technician", "email": email, "role": "technician" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().expect("No user id")
}

async fn create_equipment(client: &Client, team_id: i64) -> i64 {
    let (status, body) = post(
        client,
        "/equipment",
        json!({
            "name": "Hydraulic press",
            "serial_number": unique("SN"),
            "category": "Presses",
            "maintenance_team_id": team_id
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["is_scrapped"], false);
    body["id"].as_i64().expect("No equipment id")
}

async fn create_request(client: &Client, equipment_id: i64, created_by: i64) -> (StatusCode, Value) {
    post(
        client,
        "/requests",
        json!({
            "subject": "Oil leak",
            "type": "CORRECTIVE",
            "equipment_id": equipment_id,
            "scheduled_date": "2026-06-01",
            "created_by": created_by
        }),
    )
    .await
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let (status, body) = get(&client, "/health").await;
    assert!(status.is_success());
    assert_eq!(body["status"], "healthy");

    let (status, body) = get(&client, "/ready").await;
    assert!(status.is_success());
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
#[ignore]
async fn test_request_lifecycle_to_scrap() {
    let client = Client::new();
    let team_id = create_team(&client).await;
    let user_id = create_user(&client).await;
    let equipment_id = create_equipment(&client, team_id).await;

    let (status, _) = post(
        &client,
        &format!("/teams/{}/members", team_id),
        json!({ "user_id": user_id }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = create_request(&client, equipment_id, user_id).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["request"]["status"], "NEW");
    assert_eq!(body["request"]["maintenance_team_id"], team_id);
    let request_id = body["request_id"].as_i64().expect("No request id");

    let (status, body) = patch(
        &client,
        &format!("/requests/{}/assign", request_id),
        json!({ "technician_id": user_id }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["request"]["assigned_technician_id"], user_id);

    // Skipping IN_PROGRESS is rejected
    let (status, body) = patch(
        &client,
        &format!("/requests/{}/status", request_id),
        json!({ "status": "REPAIRED" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_kind"], "invalid_transition");

    for next in ["IN_PROGRESS", "SCRAP"] {
        let (status, body) = patch(
            &client,
            &format!("/requests/{}/status", request_id),
            json!({ "status": next }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["request"]["status"], next);
    }

    let (_, equipment) = get(&client, &format!("/equipment/{}", equipment_id)).await;
    assert_eq!(equipment["is_scrapped"], true);

    let (status, body) = create_request(&client, equipment_id, user_id).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_kind"], "equipment_scrapped");

    let (status, body) = get(&client, &format!("/equipment/{}/requests", equipment_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
#[ignore]
async fn test_assign_outside_team_is_forbidden() {
    let client = Client::new();
    let team_a = create_team(&client).await;
    let team_b = create_team(&client).await;
    let outsider = create_user(&client).await;
    post(
        &client,
        &format!("/teams/{}/members", team_a),
        json!({ "user_id": outsider }),
    )
    .await;

    let equipment_id = create_equipment(&client, team_b).await;
    let (_, body) = create_request(&client, equipment_id, outsider).await;
    let request_id = body["request_id"].as_i64().expect("No request id");

    let (status, body) = patch(
        &client,
        &format!("/requests/{}/assign", request_id),
        json!({ "technician_id": outsider }),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error_kind"], "technician_not_in_team");

    let (_, body) = get(&client, &format!("/requests/{}", request_id)).await;
    assert_eq!(body["assigned_technician_id"], Value::Null);
}

#[tokio::test]
#[ignore]
async fn test_unknown_equipment() {
    let client = Client::new();

    let (status, body) = create_request(&client, i32::MAX as i64, 1).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Equipment not found");
}

#[tokio::test]
#[ignore]
async fn test_preventive_calendar() {
    let client = Client::new();
    let team_id = create_team(&client).await;
    let user_id = create_user(&client).await;
    let equipment_id = create_equipment(&client, team_id).await;

    let (status, body) = post(
        &client,
        "/requests",
        json!({
            "subject": "Quarterly inspection",
            "type": "PREVENTIVE",
            "equipment_id": equipment_id,
            "scheduled_date": "2031-02-14",
            "created_by": user_id
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let request_id = body["request_id"].clone();

    let (status, body) = get(&client, "/requests/preventive?from=2031-02-14&to=2031-02-14").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<Value> = body
        .as_array()
        .expect("Expected an array")
        .iter()
        .map(|r| r["id"].clone())
        .collect();
    assert!(ids.contains(&request_id));
}

#[tokio::test]
#[ignore]
async fn test_stats() {
    let client = Client::new();

    let (status, body) = get(&client, "/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["equipment"]["total"].is_i64());
    assert!(body["requests"]["by_status"].is_array());
}
