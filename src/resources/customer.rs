//! The Customer resource: a stored payer with an optional card and
//! subscription.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpMethod, HttpRequest, TransportError};
use crate::resources::card::{Card, CardParams};
use crate::resources::errors::ApiError;
use crate::resources::resource::{decode_body, ApiResource, Operation};
use crate::resources::subscription::{Subscription, SubscriptionParams};

/// A customer that can hold a default card and at most one subscription.
///
/// Customers support the full CRUD surface. The embedded subscription is
/// managed through [`update_subscription`](Self::update_subscription) and
/// [`cancel_subscription`](Self::cancel_subscription), not through its own
/// endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier assigned by the remote.
    pub id: String,
    /// When the customer was created.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Masked snapshot of the stored default card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_card: Option<Card>,
    /// The customer's current subscription, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription: Option<Subscription>,
    /// Set to `true` on snapshots of deleted customers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    /// Whether the customer was created with a live key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub livemode: Option<bool>,
}

/// Parameters for creating a customer.
///
/// Passing `plan` subscribes the customer immediately; that requires a
/// `card` unless the plan has a trial period.
#[derive(Clone, Debug, Default, Serialize)]
pub struct CustomerParams {
    /// Card to store as the customer's default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<CardParams>,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Id of a plan to subscribe the customer to at creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    /// Unix timestamp at which the trial should end, when subscribing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_end: Option<i64>,
}

/// Parameters for updating a customer.
#[derive(Clone, Debug, Default, Serialize)]
pub struct CustomerUpdateParams {
    /// Replacement default card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<CardParams>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ApiResource for Customer {
    type CreateParams = CustomerParams;
    type UpdateParams = CustomerUpdateParams;

    const NAME: &'static str = "Customer";
    const PATH: &'static str = "customers";
    const OBJECT: &'static str = "customer";
    const OPERATIONS: &'static [Operation] = &[
        Operation::Create,
        Operation::Retrieve,
        Operation::Update,
        Operation::Delete,
        Operation::All,
    ];
}

impl Customer {
    /// Creates or switches the customer's subscription.
    ///
    /// A customer holds at most one subscription; calling this on a
    /// subscribed customer switches the plan in place rather than stacking
    /// a second subscription.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the customer does not exist,
    /// [`ApiError::InvalidRequest`] if the plan is unknown or the customer
    /// has no card for a no-trial plan, or another [`ApiError`] variant for
    /// other failures.
    pub async fn update_subscription(
        client: &HttpClient,
        id: &str,
        params: &SubscriptionParams,
    ) -> Result<Subscription, ApiError> {
        let body = serde_json::to_value(params).map_err(|e| ApiError::InvalidRequest {
            message: format!("Failed to serialize subscription parameters: {e}"),
            param: None,
            request_id: None,
        })?;
        let path = format!("{}/{id}/subscription", Self::PATH);
        let response = client.post(&path, body).await?;
        decode_body::<Subscription>(&response, Self::NAME, Some(id))
    }

    /// Cancels the customer's subscription immediately.
    ///
    /// Returns the final state of the subscription, with status
    /// [`Canceled`](crate::resources::SubscriptionStatus::Canceled) and the
    /// cancellation timestamps set. Canceling twice surfaces whatever the
    /// remote reports for the missing subscription.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the customer does not exist or has
    /// no subscription, or another [`ApiError`] variant for other failures.
    pub async fn cancel_subscription(
        client: &HttpClient,
        id: &str,
    ) -> Result<Subscription, ApiError> {
        let path = format!("{}/{id}/subscription", Self::PATH);
        let response = client.delete(&path).await?;
        decode_body::<Subscription>(&response, Self::NAME, Some(id))
    }

    /// Cancels the customer's subscription at the end of the current
    /// billing period.
    ///
    /// The subscription stays in its current status until the period ends;
    /// the returned snapshot carries the scheduled cancellation timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the customer does not exist or has
    /// no subscription, or another [`ApiError`] variant for other failures.
    pub async fn cancel_subscription_at_period_end(
        client: &HttpClient,
        id: &str,
    ) -> Result<Subscription, ApiError> {
        let path = format!("{}/{id}/subscription", Self::PATH);
        let request = HttpRequest::builder(HttpMethod::Delete, path)
            .query_param("at_period_end", "true")
            .build()
            .map_err(TransportError::from)?;
        let response = client.request(request).await?;
        decode_body::<Subscription>(&response, Self::NAME, Some(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_customer_decodes_with_card_and_subscription() {
        let value = json!({
            "id": "cus_9x8y",
            "object": "customer",
            "created": 1_700_000_000,
            "description": "payrail test payer",
            "email": "payer@example.com",
            "active_card": {
                "object": "card",
                "last4": "4242",
                "type": "Visa",
                "exp_month": 12,
                "exp_year": 2027
            },
            "subscription": {
                "object": "subscription",
                "customer": "cus_9x8y",
                "status": "active",
                "plan": {
                    "id": "gold-monthly",
                    "object": "plan",
                    "amount": 999,
                    "currency": "usd",
                    "interval": "month",
                    "name": "Gold"
                }
            },
            "livemode": false
        });

        let customer: Customer = serde_json::from_value(value).unwrap();
        assert_eq!(customer.id, "cus_9x8y");
        assert_eq!(customer.email.as_deref(), Some("payer@example.com"));
        assert_eq!(customer.active_card.unwrap().last4, "4242");
        assert_eq!(customer.subscription.unwrap().plan.id, "gold-monthly");
        assert_eq!(customer.deleted, None);
    }

    #[test]
    fn test_customer_decodes_bare() {
        let value = json!({"id": "cus_bare", "object": "customer"});

        let customer: Customer = serde_json::from_value(value).unwrap();
        assert_eq!(customer.id, "cus_bare");
        assert_eq!(customer.active_card, None);
        assert_eq!(customer.subscription, None);
    }

    #[test]
    fn test_deleted_snapshot_flag() {
        let value = json!({"id": "cus_gone", "deleted": true});

        let customer: Customer = serde_json::from_value(value).unwrap();
        assert_eq!(customer.deleted, Some(true));
    }

    #[test]
    fn test_create_params_serialize_sparsely() {
        let params = CustomerParams {
            email: Some("payer@example.com".to_string()),
            ..CustomerParams::default()
        };

        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value, json!({"email": "payer@example.com"}));
    }

    #[test]
    fn test_customer_supports_full_crud() {
        for op in [
            Operation::Create,
            Operation::Retrieve,
            Operation::Update,
            Operation::Delete,
            Operation::All,
        ] {
            assert!(Customer::ensure_supported(op).is_ok(), "{op} should be supported");
        }
    }
}
