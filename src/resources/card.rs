//! Card types: full details on the way in, masked snapshots on the way out.

use serde::{Deserialize, Serialize};

/// Card details submitted when creating a charge or attaching a card to a
/// customer.
///
/// This is the only place full card numbers appear. The remote never echoes
/// them back; responses carry a masked [`Card`] instead. `Debug` output
/// masks the number and CVC so card data cannot leak into logs.
#[derive(Clone, Serialize)]
pub struct CardParams {
    /// The full card number.
    pub number: String,
    /// Expiration month (1-12).
    pub exp_month: u32,
    /// Four-digit expiration year.
    pub exp_year: u32,
    /// Card verification code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvc: Option<String>,
    /// Cardholder name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl std::fmt::Debug for CardParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardParams")
            .field("number", &"*****")
            .field("exp_month", &self.exp_month)
            .field("exp_year", &self.exp_year)
            .field("cvc", &self.cvc.as_ref().map(|_| "*****"))
            .field("name", &self.name)
            .finish()
    }
}

/// A masked card snapshot as returned by the remote.
///
/// Never contains the full number or CVC.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Last four digits of the card number.
    pub last4: String,
    /// Card brand (e.g., "Visa").
    #[serde(rename = "type")]
    pub brand: String,
    /// Expiration month (1-12).
    pub exp_month: u32,
    /// Four-digit expiration year.
    pub exp_year: u32,
    /// Two-letter country code of the issuing bank, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Cardholder name, when provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
