use std::time::Duration;

use config::{Config, ConfigError, Environment, File, builder::DefaultState};
use serde::Deserialize;
use signoff_application::LogoutManagerConfig;

use crate::config::constants::{CONFIG_DIR, DEFAULT_APP_ENV, env, prod};
use crate::generators::unique_id::DEFAULT_RANDOM_LENGTH;

#[derive(Debug, Clone, Deserialize)]
pub struct SloSettings {
    pub single_logout: SingleLogoutSettings,
    pub http_client: HttpClientSettings,
    pub id_generator: IdGeneratorSettings,
    pub server: ServerSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SingleLogoutSettings {
    /// Services are not notified, tickets are still drained and expired.
    pub disabled: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpClientSettings {
    pub timeout_in_millis: u64,
}

impl HttpClientSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_in_millis)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct IdGeneratorSettings {
    pub random_length: usize,
    pub suffix: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub address: String,
}

impl SloSettings {
    /// Loads defaults, then `config/default`, `config/<APP_ENV>` and finally
    /// `SIGNOFF__*` environment variables (a `.env` file is honoured).
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let app_env = std::env::var(env::APP_ENV_VAR).unwrap_or_else(|_| DEFAULT_APP_ENV.into());

        Self::builder(&app_env)?
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Defaults and config files, without the environment overlay.
    pub fn builder(app_env: &str) -> Result<config::ConfigBuilder<DefaultState>, ConfigError> {
        Ok(Config::builder()
            .set_default("single_logout.disabled", false)?
            .set_default(
                "http_client.timeout_in_millis",
                prod::HTTP_CLIENT_TIMEOUT_IN_MILLIS,
            )?
            .set_default("id_generator.random_length", DEFAULT_RANDOM_LENGTH as u64)?
            .set_default("server.address", prod::APP_ADDRESS)?
            .add_source(File::with_name(&format!("{CONFIG_DIR}/default")).required(false))
            .add_source(File::with_name(&format!("{CONFIG_DIR}/{app_env}")).required(false)))
    }

    pub fn logout_manager_config(&self) -> LogoutManagerConfig {
        LogoutManagerConfig {
            single_logout_disabled: self.single_logout.disabled,
        }
    }
}

fn environment() -> Environment {
    Environment::with_prefix(env::ENV_PREFIX)
        .prefix_separator(env::ENV_SEPARATOR)
        .separator(env::ENV_SEPARATOR)
        .try_parsing(true)
}
