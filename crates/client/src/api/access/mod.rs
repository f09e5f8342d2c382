mod grant;
mod list;
mod revoke;

pub use grant::ShareAccessRequest;
pub use list::SharedUsersRequest;
pub use revoke::DeleteAccessRequest;
