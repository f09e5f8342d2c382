use reqwest::{Client, RequestBuilder};
use url::Url;

use crate::api::{decode_json, ApiRequest};
use crate::error::CloudError;
use crate::models::UserAccessList;

/// List the users a resource has been shared with, and their write flag.
#[derive(Debug, Clone)]
pub struct SharedUsersRequest {
    pub uid: i64,
    /// Full path of the shared resource, interpolated verbatim.
    pub path: String,
}

impl ApiRequest for SharedUsersRequest {
    type Response = UserAccessList;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url
            .join(&format!("/v1/resources/{}/access?path={}", self.uid, self.path))
            .unwrap();
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
    fn test_shared_users_wire_contract() {
        let base = Url::parse("http://127.0.0.1:8080").unwrap();
        let client = Client::new();
        let request = SharedUsersRequest {
            uid: 7,
            path: "/docs".to_string(),
        };

        let built = request.build_request(&base, &client).build().unwrap();
        assert_eq!(built.method(), &reqwest::Method::GET);
        assert_eq!(built.url().path(), "/v1/resources/7/access");
        assert_eq!(built.url().query(), Some("path=/docs"));
    }
}
