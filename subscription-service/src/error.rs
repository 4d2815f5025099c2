//! Fatal request errors raised while resolving parameters or generating a schedule.

use service_core::error::AppError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SubscriptionError {
    #[error("Invalid {field}: '{value}' (expected dd/MM/yyyy)")]
    InvalidDate { field: &'static str, value: String },

    #[error("Invalid amount: '{value}'")]
    InvalidAmount { value: String },

    #[error("Invalid dayOfMonth: '{value}'")]
    InvalidDayOfMonth { value: String },

    #[error("Day of month {day_of_month} does not exist in {year}-{month:02}")]
    InvalidAnchor {
        day_of_month: u32,
        year: i32,
        month: u32,
    },

    #[error("Date arithmetic overflowed")]
    DateOverflow,
}

impl SubscriptionError {
    pub fn kind(&self) -> &'static str {
        match self {
            SubscriptionError::InvalidDate { .. } => "invalid_date",
            SubscriptionError::InvalidAmount { .. } => "invalid_amount",
            SubscriptionError::InvalidDayOfMonth { .. } => "invalid_day_of_month",
            SubscriptionError::InvalidAnchor { .. } => "invalid_anchor",
            SubscriptionError::DateOverflow => "date_overflow",
        }
    }
}

impl From<SubscriptionError> for AppError {
    fn from(err: SubscriptionError) -> Self {
        AppError::BadRequest(anyhow::Error::new(err))
    }
}
