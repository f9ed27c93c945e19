pub mod request;
pub mod response;

pub use request::LoginRequest;
pub use response::LoginResponse;
