//! The [`ApiResource`] trait providing CRUD operations for API resources.
//!
//! Resources implement this trait to gain `create`, `retrieve`, `update`,
//! `delete`, and `all` methods. Each resource declares which of those
//! operations the remote actually supports; calling an undeclared operation
//! fails locally with [`ApiError::InvalidRequest`] before any request is
//! sent.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpResponse};
use crate::resources::errors::ApiError;
use crate::resources::list::{List, ListParams};

/// The operations a resource can support.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// POST to the collection path.
    Create,
    /// GET a single resource by id.
    Retrieve,
    /// POST a partial update to a single resource.
    Update,
    /// DELETE a single resource by id.
    Delete,
    /// GET a page of the collection.
    All,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => write!(f, "create"),
            Self::Retrieve => write!(f, "retrieve"),
            Self::Update => write!(f, "update"),
            Self::Delete => write!(f, "delete"),
            Self::All => write!(f, "all"),
        }
    }
}

/// Confirmation snapshot returned by delete operations.
///
/// The remote does not return the full resource on deletion, only the id
/// and a deletion flag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deleted {
    /// The id of the deleted resource.
    pub id: String,
    /// Always `true` on a successful deletion.
    pub deleted: bool,
}

/// A resource exposed by the Payrail API.
///
/// Implementors declare the wire names and the supported operations; the
/// default method bodies provide the full CRUD surface. Updates go over
/// POST with a partial body, never PUT. None of the default methods retry:
/// charge creation is not idempotent, so writes are strictly single-shot.
///
/// # Example
///
/// ```rust,ignore
/// use payrail_api::clients::HttpClient;
/// use payrail_api::resources::{ApiResource, Charge};
///
/// let charge = Charge::retrieve(&client, "ch_1a2b3c").await?;
/// println!("{} {}", charge.amount, charge.currency);
/// ```
#[allow(async_fn_in_trait)]
pub trait ApiResource: DeserializeOwned + Clone + Send + Sync + Sized {
    /// Parameters accepted by [`create`](Self::create).
    type CreateParams: Serialize + Send + Sync;
    /// Parameters accepted by [`update`](Self::update).
    type UpdateParams: Serialize + Send + Sync;

    /// The type name used in error messages (e.g., "Charge").
    const NAME: &'static str;
    /// The collection path segment (e.g., "charges").
    const PATH: &'static str;
    /// The `object` discriminator value on the wire (e.g., "charge").
    const OBJECT: &'static str;
    /// The operations the remote supports for this resource.
    const OPERATIONS: &'static [Operation];

    /// Creates a new resource.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the resource does not support creation, the
    /// request fails, or the response cannot be decoded.
    async fn create(client: &HttpClient, params: &Self::CreateParams) -> Result<Self, ApiError> {
        Self::ensure_supported(Operation::Create)?;
        let body = encode_params::<Self, _>(params)?;
        let response = client.post(Self::PATH, body).await?;
        decode_resource::<Self>(&response, None)
    }

    /// Retrieves a single resource by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if no resource with the id exists, or
    /// another [`ApiError`] variant for other failures.
    async fn retrieve(client: &HttpClient, id: &str) -> Result<Self, ApiError> {
        Self::ensure_supported(Operation::Retrieve)?;
        let path = format!("{}/{id}", Self::PATH);
        let response = client.get(&path, None).await?;
        decode_resource::<Self>(&response, Some(id))
    }

    /// Applies a partial update and returns the updated resource.
    ///
    /// Fields absent from `params` keep their current values.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the resource does not support updates, the
    /// request fails, or the response cannot be decoded.
    async fn update(
        client: &HttpClient,
        id: &str,
        params: &Self::UpdateParams,
    ) -> Result<Self, ApiError> {
        Self::ensure_supported(Operation::Update)?;
        let body = encode_params::<Self, _>(params)?;
        let path = format!("{}/{id}", Self::PATH);
        let response = client.post(&path, body).await?;
        decode_resource::<Self>(&response, Some(id))
    }

    /// Deletes a resource and returns a confirmation snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the resource does not support deletion or the
    /// request fails. Deleting an already-deleted resource surfaces whatever
    /// the remote reports for it.
    async fn delete(client: &HttpClient, id: &str) -> Result<Deleted, ApiError> {
        Self::ensure_supported(Operation::Delete)?;
        let path = format!("{}/{id}", Self::PATH);
        let response = client.delete(&path).await?;
        decode_body::<Deleted>(&response, Self::NAME, Some(id))
    }

    /// Retrieves a page of the collection.
    ///
    /// The page is homogeneous: every element decodes to `Self`, and an
    /// element carrying a foreign `object` discriminator fails the whole
    /// operation with [`ApiError::Decoding`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the resource does not support listing, the
    /// request fails, or any element cannot be decoded.
    async fn all(client: &HttpClient, params: Option<&ListParams>) -> Result<List<Self>, ApiError> {
        Self::ensure_supported(Operation::All)?;
        let query = params.map(ListParams::to_query);
        let response = client.get(Self::PATH, query).await?;

        let raw: List<serde_json::Value> = decode_body(&response, Self::NAME, None)?;
        let mut data = Vec::with_capacity(raw.data.len());
        for element in raw.data {
            data.push(decode_tagged::<Self>(element)?);
        }

        Ok(List {
            object: raw.object,
            data,
            count: raw.count,
            url: raw.url,
        })
    }

    /// Fails with [`ApiError::InvalidRequest`] when `op` is not declared in
    /// [`OPERATIONS`](Self::OPERATIONS).
    fn ensure_supported(op: Operation) -> Result<(), ApiError> {
        if Self::OPERATIONS.contains(&op) {
            Ok(())
        } else {
            Err(ApiError::InvalidRequest {
                message: format!("{} does not support {op}", Self::NAME),
                param: None,
                request_id: None,
            })
        }
    }
}

/// Serializes operation parameters into a JSON body.
pub(crate) fn encode_params<R: ApiResource, P: Serialize>(
    params: &P,
) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(params).map_err(|e| ApiError::InvalidRequest {
        message: format!("Failed to serialize {} parameters: {e}", R::NAME),
        param: None,
        request_id: None,
    })
}

/// Decodes a response into a resource, checking the `object` discriminator
/// when the body carries one.
pub(crate) fn decode_resource<R: ApiResource>(
    response: &HttpResponse,
    id: Option<&str>,
) -> Result<R, ApiError> {
    if !response.is_ok() {
        return Err(ApiError::classify(
            response.code,
            &response.body,
            response.request_id(),
            R::NAME,
            id,
        ));
    }
    decode_tagged::<R>(response.body.clone())
}

/// Decodes a successful response body into `T` without a discriminator
/// check. Used for shapes that carry no `object` tag of their own, such as
/// deletion snapshots.
pub(crate) fn decode_body<T: DeserializeOwned>(
    response: &HttpResponse,
    resource: &'static str,
    id: Option<&str>,
) -> Result<T, ApiError> {
    if !response.is_ok() {
        return Err(ApiError::classify(
            response.code,
            &response.body,
            response.request_id(),
            resource,
            id,
        ));
    }
    serde_json::from_value(response.body.clone()).map_err(|e| ApiError::Decoding {
        object: resource.to_lowercase(),
        message: e.to_string(),
    })
}

/// Decodes a JSON value into a resource, rejecting values whose `object`
/// field names a different type.
pub(crate) fn decode_tagged<R: ApiResource>(value: serde_json::Value) -> Result<R, ApiError> {
    if let Some(tag) = value.get("object").and_then(serde_json::Value::as_str) {
        if tag != R::OBJECT {
            return Err(ApiError::Decoding {
                object: R::OBJECT.to_string(),
                message: format!("unexpected object discriminator `{tag}`"),
            });
        }
    }
    serde_json::from_value(value).map_err(|e| ApiError::Decoding {
        object: R::OBJECT.to_string(),
        message: e.to_string(),
    })
}
