use reqwest::{Client, RequestBuilder};
use url::Url;

use crate::api::{decode_json, ApiRequest};
use crate::error::CloudError;
use crate::models::{Credentials, SessionData};

/// Authenticate an existing account. Unauthenticated; the response is the
/// session for the logged-in user.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub credentials: Credentials,
}

impl ApiRequest for LoginRequest {
    type Response = SessionData;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url.join("/auth/login").unwrap();
        client.post(full_url).json(&self.credentials)
    }

    fn requires_auth(&self) -> bool {
        false
    }

    fn decode(body: &[u8]) -> Result<Self::Response, CloudError> {
        decode_json(body)
    }
}
