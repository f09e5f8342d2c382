use std::io;
use std::path::Path;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use url::Url;

use crate::api::ApiRequest;
use crate::error::CloudError;

/// Upload one file into a directory of a user's tree.
///
/// The body is `multipart/form-data` with exactly one part named `file`:
/// original filename, MIME type guessed from the extension
/// (`application/octet-stream` when unrecognized), full bytes buffered so
/// the Content-Length is exact. The boundary is generated per request.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub uid: i64,
    /// Destination directory, interpolated verbatim into the query string.
    pub destination: String,
    file_name: String,
    data: Vec<u8>,
}

impl UploadRequest {
    /// Read a local file and stage it for upload.
    pub async fn from_path(
        uid: i64,
        file: impl AsRef<Path>,
        destination: impl Into<String>,
    ) -> io::Result<Self> {
        let file = file.as_ref();
        let data = tokio::fs::read(file).await?;
        let file_name = file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"))?;
        Ok(Self::from_bytes(uid, file_name, data, destination))
    }

    /// Stage in-memory bytes for upload under the given filename.
    pub fn from_bytes(
        uid: i64,
        file_name: impl Into<String>,
        data: Vec<u8>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            uid,
            destination: destination.into(),
            file_name: file_name.into(),
            data,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// MIME type the part is tagged with, derived from the filename.
    pub fn mime_type(&self) -> String {
        mime_guess::from_path(&self.file_name)
            .first_or_octet_stream()
            .to_string()
    }
}

impl ApiRequest for UploadRequest {
    type Response = ();

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url
            .join(&format!("/v1/resources/{}?path={}", self.uid, self.destination))
            .unwrap();
        let mime = self.mime_type();
        let part = Part::bytes(self.data)
            .file_name(self.file_name)
            .mime_str(&mime)
            .expect("mime_guess yields well-formed types");
        client.post(full_url).multipart(Form::new().part("file", part))
    }

    fn decode(_body: &[u8]) -> Result<Self::Response, CloudError> {
        Ok(())
    }
}
