//! The Charge resource: a single attempt to move money.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpClient;
use crate::resources::card::{Card, CardParams};
use crate::resources::errors::ApiError;
use crate::resources::resource::{decode_resource, ApiResource, Operation};

/// A charge against a card or a customer.
///
/// Amounts are integer minor units of the currency (cents for USD); there
/// is no fractional representation anywhere in the model.
///
/// Charges cannot be deleted. A completed charge is reversed with
/// [`refund`](Self::refund); an uncaptured charge is completed with
/// [`capture`](Self::capture).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Charge {
    /// Unique identifier assigned by the remote.
    pub id: String,
    /// Amount in minor units of `currency`.
    pub amount: i64,
    /// Three-letter lowercase ISO currency code.
    pub currency: String,
    /// When the charge was created.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,
    /// Whether the charge succeeded.
    #[serde(default)]
    pub paid: bool,
    /// Whether the charge has been fully refunded.
    #[serde(default)]
    pub refunded: bool,
    /// Whether an authorized charge has been captured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captured: Option<bool>,
    /// Total amount refunded so far, in minor units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_refunded: Option<i64>,
    /// Masked snapshot of the card that was charged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    /// Id of the customer the charge belongs to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    /// Free-form description supplied at creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Failure message from the card network, when the charge failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_message: Option<String>,
    /// Whether the charge was made with a live key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub livemode: Option<bool>,
}

/// Parameters for creating a charge.
///
/// Exactly one payment source must be given: either full `card` details or
/// a `customer` id whose stored card is charged. The remote enforces this;
/// sending both or neither comes back as an invalid request.
#[derive(Clone, Debug, Serialize)]
pub struct ChargeParams {
    /// Amount in minor units of `currency`. Must be positive.
    pub amount: i64,
    /// Three-letter lowercase ISO currency code.
    pub currency: String,
    /// Full card details to charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<CardParams>,
    /// Id of a customer whose stored card to charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Parameters for updating a charge.
///
/// Only the description is mutable after creation.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ChargeUpdateParams {
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ApiResource for Charge {
    type CreateParams = ChargeParams;
    type UpdateParams = ChargeUpdateParams;

    const NAME: &'static str = "Charge";
    const PATH: &'static str = "charges";
    const OBJECT: &'static str = "charge";
    const OPERATIONS: &'static [Operation] = &[
        Operation::Create,
        Operation::Retrieve,
        Operation::Update,
        Operation::All,
    ];
}

impl Charge {
    /// Refunds the full remaining amount of a charge.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] if the charge is already fully
    /// refunded, or another [`ApiError`] variant for other failures.
    pub async fn refund(client: &HttpClient, id: &str) -> Result<Self, ApiError> {
        let path = format!("{}/{id}/refund", Self::PATH);
        let response = client.post_empty(&path).await?;
        decode_resource::<Self>(&response, Some(id))
    }

    /// Refunds part of a charge.
    ///
    /// `amount` is in minor units and must not exceed the unrefunded
    /// remainder of the charge.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] if the amount exceeds what is
    /// refundable, or another [`ApiError`] variant for other failures.
    pub async fn refund_amount(
        client: &HttpClient,
        id: &str,
        amount: i64,
    ) -> Result<Self, ApiError> {
        let path = format!("{}/{id}/refund", Self::PATH);
        let response = client
            .post(&path, serde_json::json!({ "amount": amount }))
            .await?;
        decode_resource::<Self>(&response, Some(id))
    }

    /// Captures a previously authorized, uncaptured charge.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the charge is already captured or the request
    /// fails.
    pub async fn capture(client: &HttpClient, id: &str) -> Result<Self, ApiError> {
        let path = format!("{}/{id}/capture", Self::PATH);
        let response = client.post_empty(&path).await?;
        decode_resource::<Self>(&response, Some(id))
    }
}
