pub mod constants;
pub mod settings;

pub use constants::*;
pub use settings::{
    HttpClientSettings, IdGeneratorSettings, ServerSettings, SingleLogoutSettings, SloSettings,
};
