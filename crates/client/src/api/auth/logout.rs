use reqwest::{Client, RequestBuilder};
use url::Url;

use crate::api::ApiRequest;
use crate::error::CloudError;

/// Invalidate a session server-side.
///
/// Carries its token explicitly instead of reading the store: by the time
/// this goes out the local credential has already been erased (logout is
/// client-authoritative), so the just-removed token travels with the
/// request.
#[derive(Debug, Clone)]
pub struct LogoutRequest {
    pub token: String,
}

impl ApiRequest for LogoutRequest {
    type Response = ();

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url.join("/auth/logout").unwrap();
        client.post(full_url).bearer_auth(&self.token)
    }

    fn requires_auth(&self) -> bool {
        false
    }

    fn decode(_body: &[u8]) -> Result<Self::Response, CloudError> {
        Ok(())
    }
}
