use reqwest::{Client, RequestBuilder};
use url::Url;

use crate::api::{decode_json, ApiRequest};
use crate::error::CloudError;
use crate::models::ResourceList;

/// List the contents of one directory in a user's tree. Entries come back
/// in server order; no client-side sorting.
#[derive(Debug, Clone)]
pub struct ListDirectoryRequest {
    /// Owner of the tree being listed (not necessarily the caller).
    pub uid: i64,
    /// Directory to list, `"/"` for the root. Interpolated verbatim into
    /// the query string.
    pub path: String,
}

impl ApiRequest for ListDirectoryRequest {
    type Response = ResourceList;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url
            .join(&format!("/v1/resources/{}?path={}", self.uid, self.path))
            .unwrap();
        client.get(full_url)
    }

    fn decode(body: &[u8]) -> Result<Self::Response, CloudError> {
        decode_json(body)
    }
}
