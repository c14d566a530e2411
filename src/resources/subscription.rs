//! The Subscription resource: a customer's enrollment in a plan.
//!
//! Subscriptions have no standalone collection endpoint; they are managed
//! through the owning customer (see
//! [`Customer::update_subscription`](crate::resources::Customer::update_subscription)
//! and
//! [`Customer::cancel_subscription`](crate::resources::Customer::cancel_subscription)).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::resources::plan::Plan;

/// Lifecycle state of a subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    /// In the plan's free trial period.
    Trialing,
    /// Billing normally.
    Active,
    /// A renewal payment failed; the remote is retrying.
    PastDue,
    /// Canceled, by the caller or after exhausted payment retries.
    Canceled,
    /// Payment retries exhausted without cancellation.
    Unpaid,
}

/// A customer's subscription to a plan.
///
/// Each subscription references exactly one plan, embedded as a full
/// snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    /// Id of the owning customer.
    pub customer: String,
    /// The plan being billed.
    pub plan: Plan,
    /// Current lifecycle state.
    pub status: SubscriptionStatus,
    /// When the subscription started.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub start: Option<DateTime<Utc>>,
    /// Start of the current billing period.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub current_period_start: Option<DateTime<Utc>>,
    /// End of the current billing period.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub current_period_end: Option<DateTime<Utc>>,
    /// When the subscription was canceled, if it was.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub canceled_at: Option<DateTime<Utc>>,
    /// When the subscription fully ended, if it did.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub ended_at: Option<DateTime<Utc>>,
    /// When the trial started, for trialing subscriptions.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub trial_start: Option<DateTime<Utc>>,
    /// When the trial ends or ended.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub trial_end: Option<DateTime<Utc>>,
}

/// Parameters for creating or switching a customer's subscription.
#[derive(Clone, Debug, Serialize)]
pub struct SubscriptionParams {
    /// Id of the plan to subscribe to.
    pub plan: String,
    /// Unix timestamp at which the trial should end, overriding the plan's
    /// trial length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_end: Option<i64>,
    /// Whether to prorate the price difference when switching plans.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prorate: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn subscription_value(status: &str) -> serde_json::Value {
        json!({
            "object": "subscription",
            "customer": "cus_9x8y",
            "status": status,
            "start": 1_700_000_000,
            "current_period_start": 1_700_000_000,
            "current_period_end": 1_702_592_000,
            "plan": {
                "id": "gold-monthly",
                "object": "plan",
                "amount": 999,
                "currency": "usd",
                "interval": "month",
                "name": "Gold"
            }
        })
    }

    #[test]
    fn test_subscription_decodes_with_embedded_plan() {
        let subscription: Subscription =
            serde_json::from_value(subscription_value("active")).unwrap();

        assert_eq!(subscription.customer, "cus_9x8y");
        assert_eq!(subscription.status, SubscriptionStatus::Active);
        assert_eq!(subscription.plan.id, "gold-monthly");
        assert_eq!(subscription.start.unwrap().timestamp(), 1_700_000_000);
        assert_eq!(subscription.canceled_at, None);
    }

    #[test]
    fn test_status_decodes_snake_case() {
        for (wire, status) in [
            ("trialing", SubscriptionStatus::Trialing),
            ("active", SubscriptionStatus::Active),
            ("past_due", SubscriptionStatus::PastDue),
            ("canceled", SubscriptionStatus::Canceled),
            ("unpaid", SubscriptionStatus::Unpaid),
        ] {
            let subscription: Subscription =
                serde_json::from_value(subscription_value(wire)).unwrap();
            assert_eq!(subscription.status, status);
        }
    }

    #[test]
    fn test_unknown_status_fails_decoding() {
        let result: Result<Subscription, _> =
            serde_json::from_value(subscription_value("paused"));
        assert!(result.is_err());
    }

    #[test]
    fn test_params_serialize_plan_only_by_default() {
        let params = SubscriptionParams {
            plan: "gold-monthly".to_string(),
            trial_end: None,
            prorate: None,
        };

        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value, json!({"plan": "gold-monthly"}));
    }
}
