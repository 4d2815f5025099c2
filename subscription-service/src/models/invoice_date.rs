//! Calendar helpers for the `dd/MM/yyyy` invoice date format.

use chrono::{Datelike, Months, NaiveDate, Weekday};

/// Textual format of request dates and of every emitted invoice date.
pub const INVOICE_DATE_FORMAT: &str = "%d/%m/%Y";

/// Parse a `dd/MM/yyyy` date.
///
/// Day and month must be exactly two digits and the year exactly four. A day in 29..=31
/// that does not exist in its month resolves to the month's last day, so `31/04/2021`
/// reads as 30 April.
pub fn parse_invoice_date(value: &str) -> Option<NaiveDate> {
    let mut parts = value.split('/');
    let (day, month, year) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() || day.len() != 2 || month.len() != 2 || year.len() != 4 {
        return None;
    }
    if ![day, month, year]
        .iter()
        .all(|part| part.bytes().all(|b| b.is_ascii_digit()))
    {
        return None;
    }

    let day: u32 = day.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    let year: i32 = year.parse().ok()?;
    if !(1..=31).contains(&day) {
        return None;
    }

    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    first.with_day(day.min(days_in_month(first)?))
}

pub fn format_invoice_date(date: NaiveDate) -> String {
    date.format(INVOICE_DATE_FORMAT).to_string()
}

/// Case-insensitive full English weekday name, e.g. `monday` or `SUNDAY`.
pub fn parse_day_of_week(value: &str) -> Option<Weekday> {
    match value.to_ascii_uppercase().as_str() {
        "MONDAY" => Some(Weekday::Mon),
        "TUESDAY" => Some(Weekday::Tue),
        "WEDNESDAY" => Some(Weekday::Wed),
        "THURSDAY" => Some(Weekday::Thu),
        "FRIDAY" => Some(Weekday::Fri),
        "SATURDAY" => Some(Weekday::Sat),
        "SUNDAY" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Whole calendar months from `start` to `end`, truncated toward zero.
///
/// Negative when `end` precedes `start`.
pub fn months_between(start: NaiveDate, end: NaiveDate) -> i64 {
    let packed = |d: NaiveDate| {
        (i64::from(d.year()) * 12 + i64::from(d.month0())) * 32 + i64::from(d.day())
    };
    (packed(end) - packed(start)) / 32
}

fn days_in_month(first: NaiveDate) -> Option<u32> {
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
}
