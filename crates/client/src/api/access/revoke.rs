use reqwest::{Client, RequestBuilder};
use url::Url;

use crate::api::ApiRequest;
use crate::error::CloudError;

/// Revoke a previously granted access right.
#[derive(Debug, Clone)]
pub struct DeleteAccessRequest {
    pub uid: i64,
    /// Full path of the resource, interpolated verbatim.
    pub path: String,
    /// Grantee email, interpolated verbatim.
    pub email: String,
}

impl ApiRequest for DeleteAccessRequest {
    type Response = ();

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url
            .join(&format!("/v1/rights?path={}&email={}", self.path, self.email))
            .unwrap();
        client.delete(full_url)
    }

    fn decode(_body: &[u8]) -> Result<Self::Response, CloudError> {
        Ok(())
    }
}
