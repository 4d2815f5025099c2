//! Services module for subscription-service.

pub mod clock;
pub mod metrics;
pub mod resolver;
pub mod schedule;
pub mod scheduler;

pub use clock::{Clock, FixedClock, SystemClock};
pub use metrics::{
    get_metrics, init_metrics, record_error, record_invoice_dates, record_schedule_request,
};
pub use resolver::{InputResolver, Resolution};
pub use schedule::{invoice_dates, InvoiceScheduleGenerator};
pub use scheduler::SubscriptionScheduler;
