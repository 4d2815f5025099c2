//! Configuration module for subscription-service.

use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Longest scheduling window accepted before the end date is clamped.
pub const DEFAULT_MAX_MONTHS: u32 = 3;

#[derive(Debug, Clone)]
pub struct SubscriptionConfig {
    pub common: core_config::Config,
    pub service_name: String,
    pub service_version: String,
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
    pub schedule: ScheduleConfig,
}

#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    pub max_months: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            max_months: DEFAULT_MAX_MONTHS,
        }
    }
}

impl SubscriptionConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        Ok(Self {
            common,
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| "subscription-service".to_string()),
            service_version: env::var("SERVICE_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|s| !s.is_empty()),
            schedule: ScheduleConfig {
                max_months: parse_max_months(env::var("SCHEDULE_MAX_MONTHS").ok().as_deref())?,
            },
        })
    }
}

fn parse_max_months(raw: Option<&str>) -> Result<u32, AppError> {
    match raw {
        None => Ok(DEFAULT_MAX_MONTHS),
        Some(value) => match value.trim().parse::<u32>() {
            Ok(months) if months > 0 => Ok(months),
            _ => Err(AppError::ConfigError(anyhow::anyhow!(
                "SCHEDULE_MAX_MONTHS must be a positive integer, got '{}'",
                value
            ))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_months_defaults_to_three() {
        assert_eq!(parse_max_months(None).unwrap(), 3);
    }

    #[test]
    fn max_months_accepts_positive_values() {
        assert_eq!(parse_max_months(Some(" 6 ")).unwrap(), 6);
    }

    #[test]
    fn max_months_rejects_zero_and_garbage() {
        assert!(matches!(
            parse_max_months(Some("0")),
            Err(AppError::ConfigError(_))
        ));
        assert!(matches!(
            parse_max_months(Some("three")),
            Err(AppError::ConfigError(_))
        ));
    }
}
