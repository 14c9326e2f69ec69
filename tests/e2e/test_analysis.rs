use crate::e2e::helpers;

use helpers::doubles::STUB_REPLY;
use helpers::TestContext;
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use serial_test::serial;

#[tokio::test]
#[serial]
async fn it_should_analyze_a_response_and_record_the_attempt() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .post(
            "/api/analyze",
            &json!({
                "user_id": "u1",
                "scenario": {
                    "prompt": "Order food at a restaurant",
                    "difficulty": "Easy",
                    "wordLimit": 150
                },
                "response": "I would like the tomato soup and a glass of water, please."
            }),
        )
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(
        body["prompt"].as_str(),
        Some("Order food at a restaurant")
    );
    assert_eq!(body["difficulty"].as_str(), Some("Easy"));
    assert_eq!(body["word_limit"].as_i64(), Some(150));
    assert_eq!(
        body["analyzed_response"].as_str(),
        Some("I would like the tomato soup and a glass of water, please.")
    );
    assert_eq!(body["feedback"].as_str(), Some(STUB_REPLY));

    // The attempt is in the user's scenario progress
    let progress = ctx.client.get("/api/progress/u1").await.unwrap();
    assert_eq!(progress.status, StatusCode::OK);

    let entries = progress.json()["progress"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(
        entries[0]["scenario"].as_str(),
        Some("Order food at a restaurant")
    );
    assert_eq!(entries[0]["difficulty"].as_str(), Some("Easy"));
    assert_eq!(entries[0]["feedback"].as_str(), Some(STUB_REPLY));
    assert!(entries[0]["timestamp"].as_str().is_some());
}

#[tokio::test]
#[serial]
async fn it_should_require_a_user_id() {
    let ctx = TestContext::new().await.unwrap();

    for body in [
        json!({ "scenario": { "prompt": "x" }, "response": "y" }),
        json!({ "user_id": "", "response": "y" }),
    ] {
        let response = ctx.client.post("/api/analyze", &body).await.unwrap();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert!(response.json()["error"]
            .as_str()
            .unwrap()
            .contains("User ID is required"));
    }

    assert_eq!(ctx.count_rows("scenario_progress").await.unwrap(), 0);
}

#[tokio::test]
#[serial]
async fn it_should_tolerate_a_missing_scenario_descriptor() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .post(
            "/api/analyze",
            &json!({ "user_id": "u1", "response": "Just a response." }),
        )
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert!(body["prompt"].is_null());
    assert!(body["word_limit"].is_null());
    assert_eq!(body["feedback"].as_str(), Some(STUB_REPLY));

    // Absent descriptor fields read back as the N/A sentinel
    let progress = ctx.client.get("/api/progress/u1").await.unwrap();
    let entries = progress.json()["progress"].as_array().unwrap();
    assert_eq!(entries[0]["scenario"].as_str(), Some("N/A"));
    assert_eq!(entries[0]["difficulty"].as_str(), Some("N/A"));
    assert_eq!(entries[0]["response"].as_str(), Some("Just a response."));
}

#[tokio::test]
#[serial]
async fn it_should_surface_generation_failure_as_500_with_no_write() {
    let ctx = TestContext::with_failing_generator().await.unwrap();

    let response = ctx
        .client
        .post(
            "/api/analyze",
            &json!({
                "user_id": "u1",
                "scenario": { "prompt": "x", "difficulty": "Hard", "wordLimit": 50 },
                "response": "y"
            }),
        )
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.json()["error"]
        .as_str()
        .unwrap()
        .contains("AI generation failed"));
    assert_eq!(ctx.count_rows("scenario_progress").await.unwrap(), 0);
}
