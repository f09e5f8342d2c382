use reqwest::{Client, RequestBuilder};
use url::Url;

use crate::api::{decode_json, ApiRequest};
use crate::error::CloudError;
use crate::models::ResourceList;

/// List resources other users have shared with the caller. The server
/// scopes the listing by the bearer token; `uid` identifies the caller for
/// parity with the rest of the request model.
#[derive(Debug, Clone)]
pub struct SharedResourcesRequest {
    pub uid: i64,
}

impl ApiRequest for SharedResourcesRequest {
    type Response = ResourceList;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url.join("/v1/sharedresources").unwrap();
        client.get(full_url)
    }

    fn decode(body: &[u8]) -> Result<Self::Response, CloudError> {
        decode_json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_resources_wire_contract() {
        let base = Url::parse("http://127.0.0.1:8080").unwrap();
        let client = Client::new();
        let request = SharedResourcesRequest { uid: 7 };

        let built = request.build_request(&base, &client).build().unwrap();
        assert_eq!(built.method(), &reqwest::Method::GET);
        assert_eq!(built.url().path(), "/v1/sharedresources");
        assert_eq!(built.url().query(), None);
    }
}
