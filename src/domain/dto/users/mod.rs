pub mod request;
pub mod response;

pub use request::{RegisterUserRequest, UpdateProfileRequest};
pub use response::UserResponse;
