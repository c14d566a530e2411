//! Polymorphic decoding keyed on the `object` discriminator field.

use serde::Deserialize;

use crate::resources::card::Card;
use crate::resources::charge::Charge;
use crate::resources::customer::Customer;
use crate::resources::errors::ApiError;
use crate::resources::plan::Plan;
use crate::resources::subscription::Subscription;

/// Any object the remote can return, decoded by its `object` discriminator.
///
/// Useful when the concrete type of a payload is not known up front. An
/// unrecognized discriminator yields [`Unknown`](Self::Unknown) with the
/// raw value preserved rather than an error, so new remote types never
/// break existing callers.
#[derive(Clone, Debug, PartialEq)]
pub enum AnyObject {
    /// A charge (`"object": "charge"`).
    Charge(Charge),
    /// A customer (`"object": "customer"`).
    Customer(Customer),
    /// A plan (`"object": "plan"`).
    Plan(Plan),
    /// A subscription (`"object": "subscription"`).
    Subscription(Subscription),
    /// A card snapshot (`"object": "card"`).
    Card(Card),
    /// A value with a missing or unrecognized discriminator.
    Unknown(serde_json::Value),
}

impl AnyObject {
    /// Decodes a JSON value by its `object` discriminator.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decoding`] when the discriminator names a known
    /// type but the value does not match that type's shape. A missing or
    /// unrecognized discriminator is not an error.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ApiError> {
        fn decode<T: for<'de> Deserialize<'de>>(
            object: &str,
            value: serde_json::Value,
        ) -> Result<T, ApiError> {
            serde_json::from_value(value).map_err(|e| ApiError::Decoding {
                object: object.to_string(),
                message: e.to_string(),
            })
        }

        let discriminator = value
            .get("object")
            .and_then(serde_json::Value::as_str)
            .map(ToString::to_string);

        match discriminator.as_deref() {
            Some("charge") => Ok(Self::Charge(decode("charge", value)?)),
            Some("customer") => Ok(Self::Customer(decode("customer", value)?)),
            Some("plan") => Ok(Self::Plan(decode("plan", value)?)),
            Some("subscription") => Ok(Self::Subscription(decode("subscription", value)?)),
            Some("card") => Ok(Self::Card(decode("card", value)?)),
            _ => Ok(Self::Unknown(value)),
        }
    }

    /// Returns the discriminator value this variant corresponds to, or
    /// `None` for [`Unknown`](Self::Unknown).
    #[must_use]
    pub const fn object_name(&self) -> Option<&'static str> {
        match self {
            Self::Charge(_) => Some("charge"),
            Self::Customer(_) => Some("customer"),
            Self::Plan(_) => Some("plan"),
            Self::Subscription(_) => Some("subscription"),
            Self::Card(_) => Some("card"),
            Self::Unknown(_) => None,
        }
    }
}
