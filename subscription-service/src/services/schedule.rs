//! Invoice schedule generation.
//!
//! Every rule emits dates on the half-open window `[first, end_date)`.

use crate::error::SubscriptionError;
use crate::models::{format_invoice_date, Subscription, SubscriptionType};
use crate::services::clock::Clock;
use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use std::sync::Arc;

/// Fills a subscription's invoice dates, using the injected clock for the monthly anchor.
#[derive(Clone)]
pub struct InvoiceScheduleGenerator {
    clock: Arc<dyn Clock>,
}

impl InvoiceScheduleGenerator {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Replace `invoice_date_list` with a freshly computed schedule.
    pub fn populate(&self, subscription: &mut Subscription) -> Result<(), SubscriptionError> {
        let dates = invoice_dates(subscription, self.clock.today())?;
        subscription.invoice_date_list = dates.into_iter().map(format_invoice_date).collect();
        Ok(())
    }
}

/// Compute the ordered invoice dates for `subscription`.
///
/// The weekly rule runs whenever a weekday anchor is set and the monthly rule whenever
/// the cadence is monthly; both append to the same list. Daily cadence has no rule. A
/// record without a date range yields nothing.
pub fn invoice_dates(
    subscription: &Subscription,
    today: NaiveDate,
) -> Result<Vec<NaiveDate>, SubscriptionError> {
    let (Some(start), Some(end)) = (subscription.start_date, subscription.end_date) else {
        return Ok(Vec::new());
    };

    let mut dates = Vec::new();

    if let Some(weekday) = subscription.day_of_week {
        dates.extend(weekly_dates(start, end, weekday)?);
    }

    if subscription.subscription_type == Some(SubscriptionType::Monthly) {
        if let Some(day_of_month) = subscription.day_of_month {
            dates.extend(monthly_dates(start, end, day_of_month, today)?);
        }
    }

    Ok(dates)
}

/// First `weekday` on or after `start`, then every 7 days while before `end`.
pub fn weekly_dates(
    start: NaiveDate,
    end: NaiveDate,
    weekday: Weekday,
) -> Result<Vec<NaiveDate>, SubscriptionError> {
    let offset = (7 + weekday.num_days_from_monday() - start.weekday().num_days_from_monday()) % 7;
    let first = start
        .checked_add_days(Days::new(u64::from(offset)))
        .ok_or(SubscriptionError::DateOverflow)?;

    step_until(first, end, |day| day.checked_add_days(Days::new(7)))
}

/// Anchor on `today` with its day replaced by `day_of_month`; when `day_of_month` falls
/// before `start`'s day, anchor on the month after `start` instead. Then step one
/// calendar month at a time while before `end`, clamping in short months.
pub fn monthly_dates(
    start: NaiveDate,
    end: NaiveDate,
    day_of_month: u32,
    today: NaiveDate,
) -> Result<Vec<NaiveDate>, SubscriptionError> {
    let mut first = with_day(today, day_of_month)?;
    if day_of_month < start.day() {
        let next_month = start
            .checked_add_months(Months::new(1))
            .ok_or(SubscriptionError::DateOverflow)?;
        first = with_day(next_month, day_of_month)?;
    }

    step_until(first, end, |day| day.checked_add_months(Months::new(1)))
}

fn with_day(date: NaiveDate, day_of_month: u32) -> Result<NaiveDate, SubscriptionError> {
    date.with_day(day_of_month)
        .ok_or(SubscriptionError::InvalidAnchor {
            day_of_month,
            year: date.year(),
            month: date.month(),
        })
}

fn step_until(
    first: NaiveDate,
    end: NaiveDate,
    step: impl Fn(NaiveDate) -> Option<NaiveDate>,
) -> Result<Vec<NaiveDate>, SubscriptionError> {
    let mut dates = Vec::new();
    let mut day = first;
    while day < end {
        dates.push(day);
        day = step(day).ok_or(SubscriptionError::DateOverflow)?;
    }
    Ok(dates)
}
