//! Subscription model.

use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Subscription cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SubscriptionType {
    Daily,
    Weekly,
    Monthly,
}

impl SubscriptionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionType::Daily => "DAILY",
            SubscriptionType::Weekly => "WEEKLY",
            SubscriptionType::Monthly => "MONTHLY",
        }
    }

    /// Case-insensitive match on the cadence name.
    pub fn from_param(s: &str) -> Option<Self> {
        [
            SubscriptionType::Daily,
            SubscriptionType::Weekly,
            SubscriptionType::Monthly,
        ]
        .into_iter()
        .find(|t| t.as_str().eq_ignore_ascii_case(s))
    }
}

/// A request-scoped subscription record.
///
/// Built by the input resolver; `invoice_date_list` is filled only by the schedule
/// generator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Subscription {
    pub amount: Option<Decimal>,
    pub subscription_type: Option<SubscriptionType>,
    pub day_of_week: Option<Weekday>,
    pub day_of_month: Option<u32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub invoice_date_list: Vec<String>,
}

impl Subscription {
    /// Names of the required fields that were never set.
    ///
    /// The cadence anchor is deliberately not required.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.amount.is_none() {
            missing.push("amount");
        }
        if self.subscription_type.is_none() {
            missing.push("subscriptionType");
        }
        if self.start_date.is_none() {
            missing.push("startDate");
        }
        if self.end_date.is_none() {
            missing.push("endDate");
        }
        missing
    }

    pub fn is_valid(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// Why a request did not produce a schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbnormalReason {
    MissingParameters(Vec<&'static str>),
}

impl AbnormalReason {
    pub fn code(&self) -> &'static str {
        match self {
            AbnormalReason::MissingParameters(_) => "missing_parameters",
        }
    }
}

/// Result of processing one schedule request.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleOutcome {
    Scheduled(Subscription),
    Abnormal(AbnormalReason),
}

impl ScheduleOutcome {
    pub fn from_subscription(subscription: Subscription) -> Self {
        let missing = subscription.missing_fields();
        if missing.is_empty() {
            ScheduleOutcome::Scheduled(subscription)
        } else {
            ScheduleOutcome::Abnormal(AbnormalReason::MissingParameters(missing))
        }
    }
}
