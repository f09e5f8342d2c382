pub mod access;
pub mod auth;
mod client;
pub mod resources;

pub use client::ApiClient;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::CloudError;

/// One remote operation.
///
/// Every operation the service exposes gets its own request struct carrying
/// exactly the inputs it needs, with the wire contract (path, method, body,
/// auth, response shape) colocated in its `ApiRequest` impl. Dispatch goes
/// through [`ApiClient::call`].
pub trait ApiRequest {
    type Response;

    /// Build the HTTP request for this operation. Query parameters are
    /// interpolated verbatim; callers pre-escape path and email values.
    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder;

    /// Whether [`ApiClient::call`] should attach the stored bearer token.
    /// Only register and login go out unauthenticated.
    fn requires_auth(&self) -> bool {
        true
    }

    /// Decode the body of a 200 response. Failure means the server broke
    /// the contract and collapses to [`CloudError::Generic`] at the call
    /// boundary.
    fn decode(body: &[u8]) -> Result<Self::Response, CloudError>;
}

/// Shared decode for operations whose success body is a JSON document.
pub(crate) fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, CloudError> {
    serde_json::from_slice(body).map_err(|err| {
        tracing::debug!("success body failed to decode: {}", err);
        CloudError::Generic
    })
}
