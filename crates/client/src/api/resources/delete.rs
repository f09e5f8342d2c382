use reqwest::{Client, RequestBuilder};
use url::Url;

use crate::api::ApiRequest;
use crate::error::CloudError;

/// Remove a file or directory from a user's tree.
#[derive(Debug, Clone)]
pub struct DeleteRequest {
    pub uid: i64,
    /// Full path of the resource to remove, interpolated verbatim.
    pub path: String,
}

impl ApiRequest for DeleteRequest {
    type Response = ();

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url
            .join(&format!("/v1/resources/{}?path={}", self.uid, self.path))
            .unwrap();
        client.delete(full_url)
    }

    fn decode(_body: &[u8]) -> Result<Self::Response, CloudError> {
        Ok(())
    }
}
