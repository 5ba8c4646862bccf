//! The request/response pattern shared by every endpoint.
//!
//! An [`Endpoint`] is a serializable request that knows its HTTP method, path, security
//! classification and response shape. [`execute`] turns it into a [`RequestDescriptor`],
//! hands that to a [`Transport`] and decodes the returned bytes.

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StakingError;
use crate::rest::request::{Params, ParamsLocation, RequestDescriptor, RequestOptions, SecurityType};
use crate::rest::traits::Transport;

/// A typed REST endpoint.
///
/// Mandatory parameters are plain fields and are always serialized. Optional parameters are
/// `Option` fields marked `skip_serializing_if = "Option::is_none"`, so they appear in the
/// rendered parameters only when the caller set them.
pub trait Endpoint: Serialize + Sync {
    /// HTTP method.
    const METHOD: Method;
    /// Path relative to the base URL.
    const PATH: &'static str;
    /// Security classification.
    const SECURITY: SecurityType;
    /// Parameter placement.
    const LOCATION: ParamsLocation = ParamsLocation::Query;

    /// Shape of the JSON body.
    type Response: DeserializeOwned;
    /// Value handed back to the caller.
    type Output;

    /// Reduce the decoded body to the caller-facing result.
    fn extract(response: Self::Response) -> Self::Output;

    /// Render the parameter set.
    fn params(&self) -> Result<Params, StakingError> {
        Params::from_serialize(self)
    }

    /// Build the request descriptor.
    fn descriptor(&self) -> Result<RequestDescriptor, StakingError> {
        Ok(
            RequestDescriptor::new(Self::METHOD, Self::PATH, Self::SECURITY, self.params()?)
                .with_location(Self::LOCATION),
        )
    }
}

/// Decode a response body into `T`.
///
/// Unknown fields are ignored; failures keep the raw body for diagnostics.
pub fn decode<T>(body: &[u8]) -> Result<T, StakingError>
where
    T: DeserializeOwned,
{
    serde_json::from_slice(body).map_err(|source| StakingError::Decode {
        source,
        body: String::from_utf8_lossy(body).into_owned(),
    })
}

/// Run one endpoint against a transport.
///
/// Transport errors are returned as-is; only a body that fails to decode produces
/// [`StakingError::Decode`].
pub async fn execute<T, E>(transport: &T, endpoint: &E, options: &RequestOptions) -> Result<E::Output, StakingError>
where
    T: Transport,
    E: Endpoint,
{
    let request = endpoint.descriptor()?;
    tracing::debug!(
        method = %request.method(),
        path = request.path(),
        params = %request.params(),
        "dispatching request"
    );

    let body = transport.call_api(&request, options).await?;
    let response = decode::<E::Response>(&body)?;
    Ok(E::extract(response))
}
