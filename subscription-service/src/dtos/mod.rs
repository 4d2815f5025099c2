//! Response bodies for the subscription endpoint.

use crate::models::{Subscription, SubscriptionType};
use rust_decimal::Decimal;
use serde::Serialize;

pub const ABNORMAL_STATUS: &str = "abnormal";
pub const ABNORMAL_MESSAGE: &str = "Parameters and values are required.";

/// Success body. Unset fields are omitted, never `null`. `amount` keeps the
/// exact decimal text the client sent.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionResponse {
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "rust_decimal::serde::arbitrary_precision_option::serialize"
    )]
    pub amount: Option<Decimal>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub subscription_type: Option<SubscriptionType>,
    pub invoice_date_list: Vec<String>,
}

impl From<Subscription> for SubscriptionResponse {
    fn from(subscription: Subscription) -> Self {
        Self {
            amount: subscription.amount,
            subscription_type: subscription.subscription_type,
            invoice_date_list: subscription.invoice_date_list,
        }
    }
}

/// Fixed fallback body for incomplete requests.
#[derive(Debug, Serialize)]
pub struct AbnormalResponse {
    pub status: &'static str,
    pub message: &'static str,
}

impl Default for AbnormalResponse {
    fn default() -> Self {
        Self {
            status: ABNORMAL_STATUS,
            message: ABNORMAL_MESSAGE,
        }
    }
}
