//! Raw request parameters.

/// Query parameters as received; every field is optional at the transport level.
#[derive(Debug, Clone, Default)]
pub struct SubscriptionParams {
    pub amount: Option<String>,
    pub subscription_type: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub day_of_week: Option<String>,
    pub day_of_month: Option<String>,
}

impl SubscriptionParams {
    /// Build from decoded query pairs. The first occurrence of a key wins and
    /// unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "amount" => &mut params.amount,
                "subscriptionType" => &mut params.subscription_type,
                "startDate" => &mut params.start_date,
                "endDate" => &mut params.end_date,
                "dayOfWeek" => &mut params.day_of_week,
                "dayOfMonth" => &mut params.day_of_month,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        params
    }
}
