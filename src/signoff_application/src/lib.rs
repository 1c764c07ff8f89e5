pub mod logout_dispatcher;
pub mod logout_message_builder;
pub mod use_cases;

pub use logout_dispatcher::LogoutDispatcher;
pub use logout_message_builder::{
    LOGOUT_REQUEST_ID_PREFIX, LogoutMessageBuilder, LogoutMessageError, decode_front_channel,
};
pub use use_cases::perform_logout::{
    FrontChannelLogout, FrontChannelLogouts, LogoutError, LogoutManager, LogoutManagerConfig,
};

#[cfg(test)]
mod test_support;
