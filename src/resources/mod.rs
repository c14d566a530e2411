//! Typed resources of the Payrail API.
//!
//! Each resource implements [`ApiResource`], gaining the CRUD operations
//! the remote supports for it. Sub-resource actions (refunds, subscription
//! management) live as inherent methods on the owning resource.
//!
//! All operations return `Result<_, ApiError>`; see [`errors`] for the
//! taxonomy.

pub mod errors;

mod card;
mod charge;
mod customer;
mod list;
mod object;
mod plan;
mod resource;
mod subscription;

pub use card::{Card, CardParams};
pub use charge::{Charge, ChargeParams, ChargeUpdateParams};
pub use customer::{Customer, CustomerParams, CustomerUpdateParams};
pub use errors::ApiError;
pub use list::{List, ListParams};
pub use object::AnyObject;
pub use plan::{Plan, PlanInterval, PlanParams, PlanUpdateParams};
pub use resource::{ApiResource, Deleted, Operation};
pub use subscription::{Subscription, SubscriptionParams, SubscriptionStatus};
