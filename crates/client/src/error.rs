use serde::Deserialize;

/// Closed set of domain errors the service reports, plus [`CloudError::Generic`]
/// for everything that cannot be attributed more precisely (transport
/// failures, undecodable bodies, unknown codes).
///
/// Each kind carries a stable numeric code on the wire and a fixed
/// user-presentable message. The codes are part of the server contract and
/// must not be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CloudError {
    #[error("error")]
    Generic,
    #[error("invalid data")]
    InvalidData,
    #[error("the password must be longer than 16 characters")]
    ShortPassword,
    #[error("the password must include uppercase and lowercase letters, numbers, and special characters")]
    WeakPassword,
    #[error("email is already taken")]
    EmailTaken,
    #[error("invalid email")]
    InvalidEmail,
    #[error("registration failed")]
    Registration,
    #[error("invalid authentication token")]
    InvalidAuthToken,
    #[error("missing authentication token")]
    MissingAuthToken,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("login failed")]
    Login,
    #[error("missing filepath")]
    MissingFilePath,
    #[error("invalid filepath")]
    InvalidFilePath,
    #[error("resource with the same path already exists")]
    ResourceAlreadyExists,
}

/// `{"error":{"code":n}}` as the server sends it on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: i64,
}

impl CloudError {
    /// Wire code for this kind.
    pub fn code(&self) -> i64 {
        match self {
            CloudError::Generic => 0,
            CloudError::InvalidData => 1,
            CloudError::ShortPassword => 2,
            CloudError::WeakPassword => 3,
            CloudError::EmailTaken => 4,
            CloudError::InvalidEmail => 5,
            CloudError::Registration => 6,
            CloudError::InvalidAuthToken => 7,
            CloudError::MissingAuthToken => 8,
            CloudError::InvalidCredentials => 9,
            CloudError::Login => 10,
            CloudError::MissingFilePath => 11,
            CloudError::InvalidFilePath => 12,
            CloudError::ResourceAlreadyExists => 13,
        }
    }

    /// Map a wire code back to a kind. Codes this client does not know
    /// collapse to [`CloudError::Generic`].
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => CloudError::InvalidData,
            2 => CloudError::ShortPassword,
            3 => CloudError::WeakPassword,
            4 => CloudError::EmailTaken,
            5 => CloudError::InvalidEmail,
            6 => CloudError::Registration,
            7 => CloudError::InvalidAuthToken,
            8 => CloudError::MissingAuthToken,
            9 => CloudError::InvalidCredentials,
            10 => CloudError::Login,
            11 => CloudError::MissingFilePath,
            12 => CloudError::InvalidFilePath,
            13 => CloudError::ResourceAlreadyExists,
            _ => CloudError::Generic,
        }
    }

    /// Decode an error kind from the raw bytes of a non-2xx response body.
    /// A body that is not a well-formed envelope yields
    /// [`CloudError::Generic`].
    pub fn from_response_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<ErrorEnvelope>(body) {
            Ok(envelope) => Self::from_code(envelope.error.code),
            Err(err) => {
                tracing::debug!("unparsable error envelope: {}", err);
                CloudError::Generic
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip_for_all_kinds() {
        for code in 0..=13 {
            assert_eq!(CloudError::from_code(code).code(), code);
        }
    }

    #[test]
    fn test_known_code_maps_to_kind() {
        let body = br#"{"error":{"code":5}}"#;
        assert_eq!(CloudError::from_response_body(body), CloudError::InvalidEmail);
    }

    #[test]
    fn test_unknown_code_maps_to_generic() {
        let body = br#"{"error":{"code":99}}"#;
        assert_eq!(CloudError::from_response_body(body), CloudError::Generic);
    }

    #[test]
    fn test_garbage_body_maps_to_generic() {
        assert_eq!(CloudError::from_response_body(b"not json"), CloudError::Generic);
        assert_eq!(CloudError::from_response_body(b""), CloudError::Generic);
        assert_eq!(
            CloudError::from_response_body(br#"{"error":"oops"}"#),
            CloudError::Generic
        );
    }

    #[test]
    fn test_messages_are_fixed() {
        assert_eq!(CloudError::Generic.to_string(), "error");
        assert_eq!(
            CloudError::ShortPassword.to_string(),
            "the password must be longer than 16 characters"
        );
        assert_eq!(
            CloudError::ResourceAlreadyExists.to_string(),
            "resource with the same path already exists"
        );
    }
}
