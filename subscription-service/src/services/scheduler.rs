//! Request-level orchestration: resolve, generate, then gate on validity.

use crate::error::SubscriptionError;
use crate::models::{ScheduleOutcome, SubscriptionParams};
use crate::services::clock::Clock;
use crate::services::metrics::{record_error, record_invoice_dates, record_schedule_request};
use crate::services::resolver::InputResolver;
use crate::services::schedule::InvoiceScheduleGenerator;
use std::sync::Arc;

#[derive(Clone)]
pub struct SubscriptionScheduler {
    resolver: InputResolver,
    generator: InvoiceScheduleGenerator,
}

impl SubscriptionScheduler {
    pub fn new(max_months: u32, clock: Arc<dyn Clock>) -> Self {
        Self {
            resolver: InputResolver::new(max_months),
            generator: InvoiceScheduleGenerator::new(clock),
        }
    }

    /// Process one request.
    ///
    /// The schedule is generated before the validity check, so fatal anchor errors
    /// surface even for records that would otherwise be reported as abnormal.
    pub fn schedule(
        &self,
        params: &SubscriptionParams,
    ) -> Result<ScheduleOutcome, SubscriptionError> {
        let result = self.resolver.resolve(params).and_then(|mut subscription| {
            self.generator.populate(&mut subscription)?;
            Ok(subscription)
        });

        let subscription = match result {
            Ok(subscription) => subscription,
            Err(e) => {
                tracing::warn!(error = %e, kind = e.kind(), "Rejected subscription parameters");
                record_error(e.kind());
                return Err(e);
            }
        };

        let type_label = subscription
            .subscription_type
            .map(|t| t.as_str())
            .unwrap_or("UNSET");

        let outcome = ScheduleOutcome::from_subscription(subscription);
        match &outcome {
            ScheduleOutcome::Scheduled(subscription) => {
                tracing::info!(
                    subscription_type = type_label,
                    invoice_dates = subscription.invoice_date_list.len(),
                    "Generated invoice schedule"
                );
                record_schedule_request(type_label, "scheduled");
                record_invoice_dates(type_label, subscription.invoice_date_list.len());
            }
            ScheduleOutcome::Abnormal(reason) => {
                tracing::info!(
                    subscription_type = type_label,
                    reason = reason.code(),
                    details = ?reason,
                    "Subscription parameters incomplete"
                );
                record_schedule_request(type_label, reason.code());
            }
        }

        Ok(outcome)
    }
}
