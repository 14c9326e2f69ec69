use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use serial_test::serial;

#[tokio::test]
#[serial]
async fn it_should_return_empty_progress_for_an_unknown_user() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx.client.get("/api/progress/nobody").await.unwrap();

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["progress"].as_array().unwrap().len(), 0);
    assert_eq!(
        body["message"].as_str(),
        Some("No progress found for this user")
    );
}

#[tokio::test]
#[serial]
async fn it_should_keep_scenario_progress_in_append_order() {
    let ctx = TestContext::new().await.unwrap();

    for scenario in ["Order a coffee", "Ask for directions", "Job interview"] {
        let response = ctx
            .client
            .post(
                "/api/analyze",
                &json!({
                    "user_id": "u1",
                    "scenario": { "prompt": scenario, "difficulty": "Medium", "wordLimit": 100 },
                    "response": "Some spoken response."
                }),
            )
            .await
            .unwrap();
        assert_eq!(response.status, StatusCode::OK);
    }

    let first_fetch = ctx.client.get("/api/progress/u1").await.unwrap();
    let second_fetch = ctx.client.get("/api/progress/u1").await.unwrap();

    let entries = first_fetch.json()["progress"].as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["scenario"].as_str(), Some("Order a coffee"));
    assert_eq!(entries[1]["scenario"].as_str(), Some("Ask for directions"));
    assert_eq!(entries[2]["scenario"].as_str(), Some("Job interview"));

    // Fetches are idempotent
    assert_eq!(first_fetch.json(), second_fetch.json());
}

#[tokio::test]
#[serial]
async fn it_should_isolate_progress_between_users() {
    let ctx = TestContext::new().await.unwrap();

    ctx.client
        .post(
            "/api/analyze",
            &json!({
                "user_id": "u1",
                "scenario": { "prompt": "Order a coffee" },
                "response": "A latte, please."
            }),
        )
        .await
        .unwrap();

    let other = ctx.client.get("/api/progress/u2").await.unwrap();
    assert_eq!(other.status, StatusCode::OK);
    assert_eq!(other.json()["progress"].as_array().unwrap().len(), 0);
}
