//! # Payrail API Rust SDK
//!
//! A Rust SDK for the Payrail payment API, providing type-safe
//! configuration, a typed error taxonomy, and async resource operations
//! for charges, customers, plans, and subscriptions.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`PayrailConfig`] and [`PayrailConfigBuilder`]
//! - Validated newtypes for the API key and base URL
//! - Async HTTP transport with Bearer authentication and opt-in retries
//! - Typed resources with CRUD operations via the [`ApiResource`] trait
//! - Sub-resource actions: refunds, capture, and subscription management
//! - A typed error taxonomy ([`ApiError`]) that classifies every failure
//! - Offset-based pagination via [`List`] and [`ListParams`]
//!
//! ## Quick Start
//!
//! ```rust
//! use payrail_api::{PayrailConfig, ApiKey};
//! use payrail_api::clients::HttpClient;
//!
//! // Create configuration using the builder pattern
//! let config = PayrailConfig::builder()
//!     .api_key(ApiKey::new("sk_test_abc123").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = HttpClient::new(&config);
//! ```
//!
//! ## Creating a Charge
//!
//! ```rust,ignore
//! use payrail_api::{ApiResource, Charge, ChargeParams, CardParams};
//!
//! let charge = Charge::create(&client, &ChargeParams {
//!     amount: 2000, // minor units: $20.00
//!     currency: "usd".to_string(),
//!     card: Some(CardParams {
//!         number: "4242424242424242".to_string(),
//!         exp_month: 12,
//!         exp_year: 2027,
//!         cvc: Some("123".to_string()),
//!         name: None,
//!     }),
//!     customer: None,
//!     description: Some("order 1234".to_string()),
//! })
//! .await?;
//!
//! assert!(charge.paid);
//! ```
//!
//! ## Handling Errors
//!
//! Every operation returns a single error type; match on it to decide
//! remediation:
//!
//! ```rust,ignore
//! use payrail_api::ApiError;
//!
//! match Charge::create(&client, &params).await {
//!     Ok(charge) => println!("charged {}", charge.id),
//!     Err(ApiError::Card { param, message, .. }) => {
//!         // user-fixable card problem, e.g. param == Some("number")
//!         eprintln!("card rejected on {param:?}: {message}");
//!     }
//!     Err(e) if e.is_retryable() => { /* back off and retry */ }
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
//! ## Customers and Subscriptions
//!
//! ```rust,ignore
//! use payrail_api::{ApiResource, Customer, CustomerParams, SubscriptionParams};
//!
//! let customer = Customer::create(&client, &CustomerParams {
//!     email: Some("payer@example.com".to_string()),
//!     ..CustomerParams::default()
//! })
//! .await?;
//!
//! // Subscribe (or switch plans in place on a subscribed customer)
//! let subscription = Customer::update_subscription(
//!     &client,
//!     &customer.id,
//!     &SubscriptionParams { plan: "gold-monthly".to_string(), trial_end: None, prorate: None },
//! )
//! .await?;
//!
//! // Cancel immediately
//! let canceled = Customer::cancel_subscription(&client, &customer.id).await?;
//! ```
//!
//! ## Pagination
//!
//! ```rust,ignore
//! use payrail_api::{ApiResource, Charge, ListParams};
//!
//! let mut params = ListParams { count: Some(25), ..ListParams::default() };
//! loop {
//!     let page = Charge::all(&client, Some(&params)).await?;
//!     for charge in &page {
//!         println!("{} {}", charge.id, charge.amount);
//!     }
//!     match page.next_page_params(&params) {
//!         Some(next) => params = next,
//!         None => break,
//!     }
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: the API key lives in the config and is injected
//!   into every request by the client built from it
//! - **Fail-fast validation**: all newtypes validate on construction
//! - **Thread-safe**: all types are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio async runtime
//! - **Total error classification**: every failure maps to exactly one
//!   [`ApiError`] variant; unknown failures carry their raw body
//! - **Single-shot writes**: charge creation is not idempotent, so no
//!   operation ever retries implicitly

pub mod clients;
pub mod config;
pub mod error;
pub mod resources;

// Re-export public types at crate root for convenience
pub use config::{ApiBase, ApiKey, PayrailConfig, PayrailConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    InvalidHttpRequestError, TransportError,
};

// Re-export resource types
pub use resources::{
    AnyObject, ApiError, ApiResource, Card, CardParams, Charge, ChargeParams, ChargeUpdateParams,
    Customer, CustomerParams, CustomerUpdateParams, Deleted, List, ListParams, Operation, Plan,
    PlanInterval, PlanParams, PlanUpdateParams, Subscription, SubscriptionParams,
    SubscriptionStatus,
};
