use reqwest::{Client, RequestBuilder};
use url::Url;

use crate::api::{decode_json, ApiRequest};
use crate::error::CloudError;
use crate::models::{Credentials, SessionData};

/// Create a new account. Unauthenticated; the response is the fresh
/// session for the registered user.
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub credentials: Credentials,
}

impl ApiRequest for RegisterRequest {
    type Response = SessionData;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url.join("/auth/register").unwrap();
        client.post(full_url).json(&self.credentials)
    }

    fn requires_auth(&self) -> bool {
        false
    }

    fn decode(body: &[u8]) -> Result<Self::Response, CloudError> {
        decode_json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_wire_contract() {
        let base = Url::parse("http://127.0.0.1:8080").unwrap();
        let client = Client::new();
        let request = RegisterRequest {
            credentials: Credentials::new("a@b.c", "hunter2"),
        };
        assert!(!request.requires_auth());

        let built = request.build_request(&base, &client).build().unwrap();
        assert_eq!(built.method(), &reqwest::Method::POST);
        assert_eq!(built.url().path(), "/auth/register");
        let body = built.body().unwrap().as_bytes().unwrap();
        assert_eq!(body, br#"{"email":"a@b.c","password":"hunter2"}"#.as_slice());
    }
}
