mod login;
mod logout;
mod register;

pub use login::LoginRequest;
pub use logout::LogoutRequest;
pub use register::RegisterRequest;
