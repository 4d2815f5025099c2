//! Domain models for subscription-service.

mod invoice_date;
mod params;
mod subscription;

pub use invoice_date::{
    format_invoice_date, months_between, parse_day_of_week, parse_invoice_date,
    INVOICE_DATE_FORMAT,
};
pub use params::SubscriptionParams;
pub use subscription::{AbnormalReason, ScheduleOutcome, Subscription, SubscriptionType};
