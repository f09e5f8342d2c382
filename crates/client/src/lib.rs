/**
 * Typed request model for the storage service.
 *  One struct per remote operation, an ApiClient
 *  that dispatches them and maps every outcome
 *  into the domain error taxonomy.
 */
pub mod api;
/**
 * Client configuration: service host, keychain
 *  service name, state directory.
 */
pub mod config;
/**
 * The closed set of domain errors and its decoding
 *  from the server's error envelope.
 */
pub mod error;
/**
 * Wire types: resources, sharing grants, sessions,
 *  credentials.
 */
pub mod models;
/**
 * Process-wide authentication lifecycle:
 *  register, login, client-authoritative logout.
 */
pub mod session;
/**
 * Durable credential storage behind a small
 *  save/get/delete contract, backed by the
 *  platform keychain.
 */
pub mod store;
/**
 * In-memory test doubles.
 */
pub mod testkit;

pub mod prelude {
    pub use crate::api::access::{DeleteAccessRequest, ShareAccessRequest, SharedUsersRequest};
    pub use crate::api::auth::{LoginRequest, LogoutRequest, RegisterRequest};
    pub use crate::api::resources::{
        CreateDirectoryRequest, DeleteRequest, ListDirectoryRequest, SharedResourcesRequest,
        UploadRequest,
    };
    pub use crate::api::{ApiClient, ApiRequest};
    pub use crate::config::ClientConfig;
    pub use crate::error::CloudError;
    pub use crate::models::{
        Credentials, Resource, ResourceKind, ResourceList, SessionData, UserAccess, UserAccessList,
    };
    pub use crate::session::SessionManager;
    pub use crate::store::{KeychainStore, SessionStore};
}
