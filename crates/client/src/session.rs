use std::sync::Arc;

use crate::api::auth::{LoginRequest, LogoutRequest, RegisterRequest};
use crate::api::ApiClient;
use crate::error::CloudError;
use crate::models::{Credentials, SessionData};
use crate::store::SessionStore;

/// Owns the authentication lifecycle for this process.
///
/// Construct one per process and share it; the store it is given must be
/// the same one the [`ApiClient`] resolves bearer tokens from, so a
/// successful register/login immediately authenticates every subsequent
/// request.
pub struct SessionManager {
    client: ApiClient,
    store: Arc<dyn SessionStore>,
}

impl SessionManager {
    pub fn new(client: ApiClient, store: Arc<dyn SessionStore>) -> Self {
        Self { client, store }
    }

    /// Whether a credential is durably present on this device.
    pub fn is_authenticated(&self) -> bool {
        self.store.get().is_some()
    }

    /// The stored credential, if any.
    pub fn session_data(&self) -> Option<SessionData> {
        self.store.get()
    }

    /// Create an account and persist the resulting session. On failure the
    /// store is left untouched.
    pub async fn register(&self, email: &str, password: &str) -> Result<(), CloudError> {
        let session = self
            .client
            .call(RegisterRequest {
                credentials: Credentials::new(email, password),
            })
            .await?;
        self.store.save(&session);
        tracing::debug!(uid = session.uid, "registered and authenticated");
        Ok(())
    }

    /// Authenticate an existing account and persist the resulting session.
    /// On failure the store is left untouched.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), CloudError> {
        let session = self
            .client
            .call(LoginRequest {
                credentials: Credentials::new(email, password),
            })
            .await?;
        self.store.save(&session);
        tracing::debug!(uid = session.uid, "logged in");
        Ok(())
    }

    /// Log out. Client-authoritative: the local credential is erased first,
    /// then the server is told on a detached task using the just-removed
    /// token. The server call's outcome is only logged; local security
    /// state never depends on network availability.
    ///
    /// Idempotent: with no stored credential this does nothing and issues
    /// no network call. Must be invoked from within a tokio runtime.
    pub fn logout(&self) {
        let Some(session) = self.store.get() else {
            return;
        };
        self.store.delete();

        let client = self.client.clone();
        tokio::spawn(async move {
            if let Err(err) = client.call(LogoutRequest { token: session.token }).await {
                tracing::debug!("server-side logout failed: {}", err);
            }
        });
    }
}
