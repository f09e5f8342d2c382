mod access;
mod resource;
mod session;

pub use access::{UserAccess, UserAccessList};
pub use resource::{Resource, ResourceKind, ResourceList};
pub use session::{Credentials, SessionData};
