//! Test helper module for subscription-service integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;
use subscription_service::config::{ScheduleConfig, SubscriptionConfig};
use subscription_service::services::FixedClock;
use subscription_service::startup::Application;
use subscription_service::{build_router, AppState};

/// The "today" every test application reports unless told otherwise.
pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 3, 20).unwrap()
}

pub fn test_config() -> SubscriptionConfig {
    SubscriptionConfig {
        common: CoreConfig {
            host: "127.0.0.1".to_string(),
            port: 0, // Random port
        },
        service_name: "subscription-service-test".to_string(),
        service_version: "0.1.0".to_string(),
        log_level: "warn".to_string(),
        otlp_endpoint: None,
        schedule: ScheduleConfig::default(),
    }
}

/// Router backed by a fixed clock, for in-process `oneshot` tests.
pub fn test_router(today: NaiveDate) -> axum::Router {
    build_router(AppState::new(
        test_config(),
        Arc::new(FixedClock::new(today)),
    ))
}

/// Test application wrapper for integration tests.
pub struct TestApp {
    pub http_address: String,
    pub http_port: u16,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn a new test application on a random port.
    pub async fn spawn() -> Self {
        Self::spawn_with_today(test_today()).await
    }

    pub async fn spawn_with_today(today: NaiveDate) -> Self {
        let app = Application::build_with_clock(test_config(), Arc::new(FixedClock::new(today)))
            .await
            .expect("Failed to build test application");

        let http_port = app.http_port();
        let http_address = format!("http://127.0.0.1:{}", http_port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", http_address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            http_address,
            http_port,
            client,
        }
    }

    /// Call `GET /subscription` with the given query parameters.
    pub async fn get_subscription(&self, query: &[(&str, &str)]) -> reqwest::Response {
        self.client
            .get(format!("{}/subscription", self.http_address))
            .query(query)
            .send()
            .await
            .expect("Failed to execute request")
    }
}
