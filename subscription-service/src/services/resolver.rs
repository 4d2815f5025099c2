//! Turns raw request parameters into a normalized [`Subscription`].
//!
//! Blank or absent fields leave the attribute unset. Unrecognised enum names are
//! ignored, while malformed numbers and dates are fatal.

use crate::config::DEFAULT_MAX_MONTHS;
use crate::error::SubscriptionError;
use crate::models::{
    months_between, parse_day_of_week, parse_invoice_date, Subscription, SubscriptionParams,
    SubscriptionType,
};
use chrono::{Months, NaiveDate, Weekday};
use rust_decimal::Decimal;
use std::str::FromStr;

/// How a single optional parameter was resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<T> {
    Resolved(T),
    /// Absent or blank.
    Missing,
    /// Present but not a recognised value; dropped without error.
    Ignored(String),
}

impl<T> Resolution<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            Resolution::Resolved(value) => Some(value),
            Resolution::Missing | Resolution::Ignored(_) => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct InputResolver {
    max_months: u32,
}

impl Default for InputResolver {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_MONTHS)
    }
}

impl InputResolver {
    pub fn new(max_months: u32) -> Self {
        Self { max_months }
    }

    /// Resolve every field. The invoice date list is left empty.
    pub fn resolve(&self, params: &SubscriptionParams) -> Result<Subscription, SubscriptionError> {
        let mut subscription = Subscription {
            amount: resolve_amount(params.amount.as_deref())?,
            subscription_type: log_ignored(
                "subscriptionType",
                resolve_subscription_type(params.subscription_type.as_deref()),
            ),
            ..Default::default()
        };

        if let Some((start, end)) = self.resolve_date_range(
            params.start_date.as_deref(),
            params.end_date.as_deref(),
        )? {
            subscription.start_date = Some(start);
            subscription.end_date = Some(end);
        }

        match subscription.subscription_type {
            Some(SubscriptionType::Weekly) => {
                subscription.day_of_week = log_ignored(
                    "dayOfWeek",
                    resolve_day_of_week(params.day_of_week.as_deref()),
                );
            }
            Some(SubscriptionType::Monthly) => {
                subscription.day_of_month =
                    Some(resolve_day_of_month(params.day_of_month.as_deref())?);
            }
            Some(SubscriptionType::Daily) | None => {}
        }

        Ok(subscription)
    }

    /// Both dates or neither. An inverted range, or one spanning `max_months` or more
    /// whole months, ends at `start + max_months`.
    pub fn resolve_date_range(
        &self,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<Option<(NaiveDate, NaiveDate)>, SubscriptionError> {
        let (Some(start_raw), Some(end_raw)) = (non_blank(start), non_blank(end)) else {
            return Ok(None);
        };

        let start = parse_date_param("startDate", start_raw)?;
        let end = parse_date_param("endDate", end_raw)?;

        if start > end || months_between(start, end) >= i64::from(self.max_months) {
            let clamped = start
                .checked_add_months(Months::new(self.max_months))
                .ok_or(SubscriptionError::DateOverflow)?;
            tracing::debug!(
                start_date = %start,
                requested_end_date = %end,
                end_date = %clamped,
                "Clamped subscription date range"
            );
            return Ok(Some((start, clamped)));
        }

        Ok(Some((start, end)))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn log_ignored<T>(field: &'static str, resolution: Resolution<T>) -> Option<T> {
    if let Resolution::Ignored(raw) = &resolution {
        tracing::debug!(field, value = %raw, "Ignoring unrecognised parameter value");
    }
    resolution.into_option()
}

fn parse_date_param(field: &'static str, raw: &str) -> Result<NaiveDate, SubscriptionError> {
    parse_invoice_date(raw).ok_or_else(|| SubscriptionError::InvalidDate {
        field,
        value: raw.to_string(),
    })
}

pub fn resolve_amount(raw: Option<&str>) -> Result<Option<Decimal>, SubscriptionError> {
    let Some(raw) = non_blank(raw) else {
        return Ok(None);
    };
    let invalid = || SubscriptionError::InvalidAmount {
        value: raw.to_string(),
    };
    // `Decimal::from_str` tolerates `_` separators
    if !raw
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return Err(invalid());
    }
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .map(Some)
        .map_err(|_| invalid())
}

pub fn resolve_subscription_type(raw: Option<&str>) -> Resolution<SubscriptionType> {
    match non_blank(raw) {
        None => Resolution::Missing,
        Some(raw) => SubscriptionType::from_param(raw)
            .map(Resolution::Resolved)
            .unwrap_or_else(|| Resolution::Ignored(raw.to_string())),
    }
}

pub fn resolve_day_of_week(raw: Option<&str>) -> Resolution<Weekday> {
    match non_blank(raw) {
        None => Resolution::Missing,
        Some(raw) => parse_day_of_week(raw)
            .map(Resolution::Resolved)
            .unwrap_or_else(|| Resolution::Ignored(raw.to_string())),
    }
}

/// Required for monthly subscriptions: absent or blank is as fatal as malformed.
/// The range is not checked here; an impossible day fails when the anchor is built.
pub fn resolve_day_of_month(raw: Option<&str>) -> Result<u32, SubscriptionError> {
    let raw = raw.unwrap_or_default();
    raw.parse::<u32>()
        .map_err(|_| SubscriptionError::InvalidDayOfMonth {
            value: raw.to_string(),
        })
}
