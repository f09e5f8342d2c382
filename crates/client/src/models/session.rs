use std::fmt;

use serde::{Deserialize, Serialize};

/// The authenticated identity active on this device: user id plus the
/// bearer token the server minted for it. Created by register/login,
/// destroyed by logout. At most one of these is durably stored at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    pub uid: i64,
    pub token: String,
}

/// Email/password pair used to build a register or login payload.
/// Transient only; never written to durable storage.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

// Keep passwords out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_data_wire_shape() {
        let session = SessionData {
            uid: 42,
            token: "abc123".to_string(),
        };
        let json = serde_json::to_string(&session).unwrap();
        assert_eq!(json, r#"{"uid":42,"token":"abc123"}"#);
        let back: SessionData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }

    #[test]
    fn test_credentials_wire_shape() {
        let creds = Credentials::new("a@b.c", "hunter2");
        let json = serde_json::to_string(&creds).unwrap();
        assert_eq!(json, r#"{"email":"a@b.c","password":"hunter2"}"#);
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let creds = Credentials::new("a@b.c", "hunter2");
        let rendered = format!("{:?}", creds);
        assert!(rendered.contains("a@b.c"));
        assert!(!rendered.contains("hunter2"));
    }
}
