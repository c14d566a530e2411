//! The Plan resource: a billing template for subscriptions.

use serde::{Deserialize, Serialize};

use crate::resources::resource::{ApiResource, Operation};

/// How often a plan bills.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanInterval {
    /// Bills every month.
    Month,
    /// Bills every year.
    Year,
}

/// A recurring billing plan.
///
/// Plan ids are chosen by the caller at creation time, not assigned by the
/// remote. Plans are immutable once created; to change one, delete it and
/// create a replacement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Caller-chosen identifier (e.g., "gold-monthly").
    pub id: String,
    /// Amount billed per interval, in minor units of `currency`.
    pub amount: i64,
    /// Three-letter lowercase ISO currency code.
    pub currency: String,
    /// Billing cadence.
    pub interval: PlanInterval,
    /// Display name.
    pub name: String,
    /// Length of the free trial granted to new subscribers, in days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_period_days: Option<u32>,
    /// Whether the plan was created with a live key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub livemode: Option<bool>,
}

/// Parameters for creating a plan.
#[derive(Clone, Debug, Serialize)]
pub struct PlanParams {
    /// Caller-chosen identifier. Must be unique for the account.
    pub id: String,
    /// Amount billed per interval, in minor units of `currency`.
    pub amount: i64,
    /// Three-letter lowercase ISO currency code.
    pub currency: String,
    /// Billing cadence.
    pub interval: PlanInterval,
    /// Display name.
    pub name: String,
    /// Length of the free trial granted to new subscribers, in days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_period_days: Option<u32>,
}

/// Plans are immutable; there are no update parameters.
#[derive(Clone, Debug, Default, Serialize)]
pub struct PlanUpdateParams {}

impl ApiResource for Plan {
    type CreateParams = PlanParams;
    type UpdateParams = PlanUpdateParams;

    const NAME: &'static str = "Plan";
    const PATH: &'static str = "plans";
    const OBJECT: &'static str = "plan";
    const OPERATIONS: &'static [Operation] = &[
        Operation::Create,
        Operation::Retrieve,
        Operation::Delete,
        Operation::All,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::errors::ApiError;
    use serde_json::json;

    #[test]
    fn test_plan_decodes_from_wire_shape() {
        let value = json!({
            "id": "gold-monthly",
            "object": "plan",
            "amount": 999,
            "currency": "usd",
            "interval": "month",
            "name": "Gold",
            "trial_period_days": 14,
            "livemode": false
        });

        let plan: Plan = serde_json::from_value(value).unwrap();
        assert_eq!(plan.id, "gold-monthly");
        assert_eq!(plan.interval, PlanInterval::Month);
        assert_eq!(plan.trial_period_days, Some(14));
    }

    #[test]
    fn test_interval_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(PlanInterval::Year).unwrap(),
            json!("year")
        );
        assert_eq!(
            serde_json::to_value(PlanInterval::Month).unwrap(),
            json!("month")
        );
    }

    #[test]
    fn test_create_params_carry_caller_chosen_id() {
        let params = PlanParams {
            id: "silver-yearly".to_string(),
            amount: 9900,
            currency: "usd".to_string(),
            interval: PlanInterval::Year,
            name: "Silver".to_string(),
            trial_period_days: None,
        };

        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value["id"], "silver-yearly");
        assert_eq!(value["interval"], "year");
        assert!(value.get("trial_period_days").is_none());
    }

    #[test]
    fn test_plan_does_not_support_update() {
        let error = Plan::ensure_supported(Operation::Update).unwrap_err();
        assert!(matches!(error, ApiError::InvalidRequest { .. }));
        assert!(Plan::ensure_supported(Operation::Delete).is_ok());
    }
}
