pub mod error;
pub mod logout;

pub use error::{ErrorResponse, SloApiError};
pub use logout::{FrontChannelRedirect, LogoutRequest, LogoutResponse, logout};
