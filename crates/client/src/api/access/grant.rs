use reqwest::{Client, RequestBuilder};
use url::Url;

use crate::api::ApiRequest;
use crate::error::CloudError;

/// Grant another user access to a resource, optionally with write rights.
/// The resource is addressed by path alone; `uid` identifies the owner for
/// parity with the rest of the request model.
#[derive(Debug, Clone)]
pub struct ShareAccessRequest {
    pub uid: i64,
    /// Full path of the resource, interpolated verbatim.
    pub path: String,
    /// Grantee email, interpolated verbatim. Pre-escape if it contains
    /// query metacharacters.
    pub email: String,
    pub write: bool,
}

impl ApiRequest for ShareAccessRequest {
    type Response = ();

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url
            .join(&format!(
                "/v1/rights?path={}&email={}&write={}",
                self.path, self.email, self.write
            ))
            .unwrap();
        client.post(full_url)
    }

    fn decode(_body: &[u8]) -> Result<Self::Response, CloudError> {
        Ok(())
    }
}
