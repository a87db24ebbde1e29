use super::Identified;
use crate::domain::value_objects::RecordId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Active,
    Canceled,
    #[serde(other)]
    Other,
}

impl SubscriptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "active",
            SubscriptionStatus::Canceled => "canceled",
            SubscriptionStatus::Other => "other",
        }
    }
}

/// A billing subscription row, mirrored from the payment provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: RecordId,
    pub customer_name: String,
    pub customer_email: String,
    pub product_name: String,
    /// Billing interval label, e.g. "month" or "year".
    pub interval: String,
    #[serde(default)]
    pub quantity: u32,
    pub status: SubscriptionStatus,
    pub amount: f64,
    pub currency: String,
    pub created: DateTime<Utc>,
    pub current_period_start: DateTime<Utc>,
    pub current_period_end: DateTime<Utc>,
}

impl Identified for Subscription {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

/// Revenue window selectable on the subscriptions dashboard.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RevenuePeriod {
    Monthly,
    Quarterly,
    SixMonth,
    Yearly,
}

impl RevenuePeriod {
    pub fn label(&self) -> &'static str {
        match self {
            RevenuePeriod::Monthly => "Monthly Revenue",
            RevenuePeriod::Quarterly => "Quarterly Revenue",
            RevenuePeriod::SixMonth => "6-Month Revenue",
            RevenuePeriod::Yearly => "Yearly Revenue",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionStats {
    pub total_subscribers: u64,
    pub active_subscriptions: u64,
    pub canceled_subscriptions: u64,
    pub total_monthly_amount: f64,
    pub total_quarterly_amount: f64,
    pub total_six_month_amount: f64,
    pub total_yearly_amount: f64,
}

impl SubscriptionStats {
    pub fn revenue_for(&self, period: RevenuePeriod) -> f64 {
        match period {
            RevenuePeriod::Monthly => self.total_monthly_amount,
            RevenuePeriod::Quarterly => self.total_quarterly_amount,
            RevenuePeriod::SixMonth => self.total_six_month_amount,
            RevenuePeriod::Yearly => self.total_yearly_amount,
        }
    }
}
