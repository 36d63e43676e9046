pub const SHARED_SERVICE_NAME: &str = "ups-shared";
pub const SERVICE_NAME_PREFIX: &str = "ups-";

pub const REQUEST_TIMEOUT_SECS: u64 = 30;
pub const FETCH_CONCURRENCY: usize = 4;
pub const LOG_LEVEL: &str = "warn";

/// Prefix of environment variables that override configuration values.
pub const CONFIG_ENV_PREFIX: &str = "UPS_UTIL";

// Cloud Foundry CLI session
pub const CF_HOME_ENV_VAR: &str = "CF_HOME";
pub const CF_CONFIG_DIR: &str = ".cf";
pub const CF_CONFIG_FILE: &str = "config.json";

// Cloud Foundry v2 API
pub const SPACE_APPS_ENDPOINT: &str = "/v2/spaces/{space}/apps";
pub const APP_ENV_ENDPOINT: &str = "/v2/apps/{app}/env";
