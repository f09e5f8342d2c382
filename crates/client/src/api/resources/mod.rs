mod delete;
mod list;
mod mkdir;
mod shared;
mod upload;

pub use delete::DeleteRequest;
pub use list::ListDirectoryRequest;
pub use mkdir::CreateDirectoryRequest;
pub use shared::SharedResourcesRequest;
pub use upload::UploadRequest;
