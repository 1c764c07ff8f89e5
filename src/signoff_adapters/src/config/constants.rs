pub mod env {
    pub const APP_ENV_VAR: &str = "APP_ENV";
    pub const ENV_PREFIX: &str = "SIGNOFF";
    pub const ENV_SEPARATOR: &str = "__";
}

pub const DEFAULT_APP_ENV: &str = "development";
pub const CONFIG_DIR: &str = "config";

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
    pub const HTTP_CLIENT_TIMEOUT_IN_MILLIS: u64 = 5_000;
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
    pub mod http_client {
        use std::time::Duration;

        pub const TIMEOUT: Duration = Duration::from_millis(200);
    }
}
