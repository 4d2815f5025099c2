//! Invoice schedule integration tests for subscription-service.

mod common;

use chrono::NaiveDate;
use common::TestApp;
use reqwest::StatusCode;
use serde_json::{json, Value};

fn abnormal() -> Value {
    json!({
        "status": "abnormal",
        "message": "Parameters and values are required."
    })
}

#[tokio::test]
async fn weekly_schedule_excludes_end_date() {
    let app = TestApp::spawn().await;

    let response = app
        .get_subscription(&[
            ("amount", "20.00"),
            ("subscriptionType", "WEEKLY"),
            ("dayOfWeek", "MONDAY"),
            ("startDate", "04/01/2021"),
            ("endDate", "25/01/2021"),
        ])
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .starts_with("application/json"));

    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["type"], "WEEKLY");
    assert_eq!(body["amount"].to_string(), "20.00");
    assert_eq!(
        body["invoiceDateList"],
        json!(["04/01/2021", "11/01/2021", "18/01/2021"])
    );
    assert!(body.get("dayOfWeek").is_none());
    assert!(body.get("startDate").is_none());
}

#[tokio::test]
async fn monthly_schedule_starts_after_start_month() {
    let app = TestApp::spawn().await;

    let response = app
        .get_subscription(&[
            ("amount", "15"),
            ("subscriptionType", "monthly"),
            ("dayOfMonth", "5"),
            ("startDate", "20/03/2021"),
            ("endDate", "20/06/2021"),
        ])
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["type"], "MONTHLY");
    assert_eq!(
        body["invoiceDateList"],
        json!(["05/04/2021", "05/05/2021", "05/06/2021"])
    );
}

#[tokio::test]
async fn monthly_schedule_anchors_on_today() {
    let app = TestApp::spawn_with_today(NaiveDate::from_ymd_opt(2021, 2, 1).unwrap()).await;

    let response = app
        .get_subscription(&[
            ("amount", "15"),
            ("subscriptionType", "MONTHLY"),
            ("dayOfMonth", "10"),
            ("startDate", "01/01/2021"),
            ("endDate", "01/04/2021"),
        ])
        .await;

    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(
        body["invoiceDateList"],
        json!(["10/02/2021", "10/03/2021"])
    );
}

#[tokio::test]
async fn long_range_is_clamped_to_three_months() {
    let app = TestApp::spawn().await;

    let response = app
        .get_subscription(&[
            ("amount", "5"),
            ("subscriptionType", "WEEKLY"),
            ("dayOfWeek", "friday"),
            ("startDate", "01/01/2021"),
            ("endDate", "01/01/2022"),
        ])
        .await;

    let body: Value = response.json().await.expect("Failed to parse JSON");
    let dates = body["invoiceDateList"].as_array().unwrap();
    // Fridays from 01/01/2021 up to, not including, 01/04/2021
    assert_eq!(dates.len(), 13);
    assert_eq!(dates.first().unwrap(), "01/01/2021");
    assert_eq!(dates.last().unwrap(), "26/03/2021");
}

#[tokio::test]
async fn daily_subscription_has_empty_schedule() {
    let app = TestApp::spawn().await;

    let response = app
        .get_subscription(&[
            ("amount", "1"),
            ("subscriptionType", "daily"),
            ("startDate", "01/01/2021"),
            ("endDate", "10/01/2021"),
        ])
        .await;

    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["type"], "DAILY");
    assert_eq!(body["invoiceDateList"], json!([]));
}

#[tokio::test]
async fn weekly_without_anchor_is_still_valid() {
    let app = TestApp::spawn().await;

    let response = app
        .get_subscription(&[
            ("amount", "1"),
            ("subscriptionType", "WEEKLY"),
            ("dayOfWeek", "blursday"),
            ("startDate", "01/01/2021"),
            ("endDate", "10/01/2021"),
        ])
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["type"], "WEEKLY");
    assert_eq!(body["invoiceDateList"], json!([]));
}

#[tokio::test]
async fn missing_amount_returns_abnormal_payload() {
    let app = TestApp::spawn().await;

    let response = app
        .get_subscription(&[
            ("subscriptionType", "WEEKLY"),
            ("dayOfWeek", "MONDAY"),
            ("startDate", "04/01/2021"),
            ("endDate", "25/01/2021"),
        ])
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body, abnormal());
}

#[tokio::test]
async fn unknown_subscription_type_returns_abnormal_payload() {
    let app = TestApp::spawn().await;

    let response = app
        .get_subscription(&[
            ("amount", "10"),
            ("subscriptionType", "yearly"),
            ("startDate", "04/01/2021"),
            ("endDate", "25/01/2021"),
        ])
        .await;

    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body, abnormal());
}

#[tokio::test]
async fn no_parameters_returns_abnormal_payload() {
    let app = TestApp::spawn().await;

    let response = app.get_subscription(&[]).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body, abnormal());
}

#[tokio::test]
async fn malformed_date_is_a_client_error() {
    let app = TestApp::spawn().await;

    let response = app
        .get_subscription(&[
            ("amount", "10"),
            ("subscriptionType", "WEEKLY"),
            ("startDate", "2021-01-04"),
            ("endDate", "25/01/2021"),
        ])
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert!(body["error"].as_str().unwrap().contains("startDate"));
}

#[tokio::test]
async fn monthly_without_day_of_month_is_a_client_error() {
    let app = TestApp::spawn().await;

    let response = app
        .get_subscription(&[
            ("amount", "10"),
            ("subscriptionType", "MONTHLY"),
            ("startDate", "04/01/2021"),
            ("endDate", "25/01/2021"),
        ])
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn impossible_day_of_month_is_a_client_error() {
    // Today is in February, which has no 30th
    let app = TestApp::spawn_with_today(NaiveDate::from_ymd_opt(2021, 2, 10).unwrap()).await;

    let response = app
        .get_subscription(&[
            ("amount", "10"),
            ("subscriptionType", "MONTHLY"),
            ("dayOfMonth", "30"),
            ("startDate", "01/02/2021"),
            ("endDate", "01/04/2021"),
        ])
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_amount_is_a_client_error() {
    let app = TestApp::spawn().await;

    let response = app
        .get_subscription(&[
            ("amount", "ten"),
            ("subscriptionType", "DAILY"),
            ("startDate", "04/01/2021"),
            ("endDate", "25/01/2021"),
        ])
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
