//! Tests against a running server backed by a seeded database.
//!
//! Run with: cargo test -- --ignored

use reqwest::Client;
use serde_json::Value;

const BASE_URL: &str = "http://localhost:8080/api/v1";

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_readiness_reaches_database() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
}

#[tokio::test]
#[ignore]
async fn test_create_loan_unknown_book() {
    let client = Client::new();

    let response = client
        .post(format!("{}/create-loan/", BASE_URL))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body("book=__no_such_title__&member=__no_such_member__&loan_date=2024-01-01")
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Book not found");
}

#[tokio::test]
#[ignore]
async fn test_return_loan_requires_numeric_ids() {
    let client = Client::new();

    let response = client
        .put(format!("{}/return-loan/", BASE_URL))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body("book=Dune&member=Ann")
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}
