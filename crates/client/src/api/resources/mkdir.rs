use reqwest::{Client, RequestBuilder};
use url::Url;

use crate::api::ApiRequest;
use crate::error::CloudError;

/// Create an empty directory at the given path.
#[derive(Debug, Clone)]
pub struct CreateDirectoryRequest {
    pub uid: i64,
    /// Full path of the directory to create, interpolated verbatim.
    pub path: String,
}

impl ApiRequest for CreateDirectoryRequest {
    type Response = ();

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url
            .join(&format!("/v1/resources/{}?path={}", self.uid, self.path))
            .unwrap();
        client.put(full_url)
    }

    fn decode(_body: &[u8]) -> Result<Self::Response, CloudError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mkdir_uses_put() {
        let base = Url::parse("http://127.0.0.1:8080").unwrap();
        let client = Client::new();
        let request = CreateDirectoryRequest {
            uid: 7,
            path: "/docs/new".to_string(),
        };

        let built = request.build_request(&base, &client).build().unwrap();
        assert_eq!(built.method(), &reqwest::Method::PUT);
        assert_eq!(built.url().query(), Some("path=/docs/new"));
    }
}
