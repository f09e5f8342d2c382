use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode};
use url::Url;

use super::ApiRequest;
use crate::error::CloudError;
use crate::store::SessionStore;

/// Dispatches typed requests against the storage service.
///
/// Holds the base URL, a shared `reqwest::Client`, and a handle to the
/// session store so the bearer token is resolved per call. Cloning is
/// cheap; clones share the connection pool and the store.
#[derive(Clone)]
pub struct ApiClient {
    base: Url,
    http: Client,
    store: Arc<dyn SessionStore>,
}

impl ApiClient {
    pub fn new(remote: &Url, store: Arc<dyn SessionStore>) -> Result<Self, reqwest::Error> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert("Content-Type", HeaderValue::from_static("application/json"));
        let http = Client::builder().default_headers(default_headers).build()?;

        Ok(Self {
            base: remote.clone(),
            http,
            store,
        })
    }

    /// Issue one operation and decode its typed result.
    ///
    /// Policy at this boundary: a 200 whose body decodes is a success; a
    /// 200 whose body does not decode is [`CloudError::Generic`] (HTTP
    /// success does not imply application success); any other status is
    /// decoded from the error envelope; transport failures with no
    /// response at all are [`CloudError::Generic`]. No retries.
    pub async fn call<T: ApiRequest>(&self, request: T) -> Result<T::Response, CloudError> {
        let needs_auth = request.requires_auth();
        let mut builder = request.build_request(&self.base, &self.http);

        if needs_auth {
            if let Some(session) = self.store.get() {
                builder = builder.bearer_auth(&session.token);
            }
            // No stored session: let the server answer missing-auth-token.
        }

        let response = builder.send().await.map_err(|err| {
            tracing::debug!("transport failure: {}", err);
            CloudError::Generic
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|err| {
            tracing::debug!("failed to read response body: {}", err);
            CloudError::Generic
        })?;

        if status == StatusCode::OK {
            T::decode(&body)
        } else {
            let error = CloudError::from_response_body(&body);
            tracing::debug!(%status, code = error.code(), "request rejected");
            Err(error)
        }
    }

    /// Base URL requests are issued against.
    pub fn base_url(&self) -> &Url {
        &self.base
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").field("base", &self.base).finish()
    }
}
