use crate::config::Config;
use crate::constants::{
    FETCH_CONCURRENCY, LOG_LEVEL, REQUEST_TIMEOUT_SECS, SERVICE_NAME_PREFIX, SHARED_SERVICE_NAME,
};
use crate::utils::env::default_cf_home;

impl Default for Config {
    fn default() -> Self {
        Self {
            api_endpoint: None,
            access_token: None,
            space_guid: None,
            cf_home: default_cf_home(),

            shared_service_name: SHARED_SERVICE_NAME.to_string(),
            service_name_prefix: SERVICE_NAME_PREFIX.to_string(),

            request_timeout_secs: REQUEST_TIMEOUT_SECS,
            fetch_concurrency: FETCH_CONCURRENCY,

            log_level: LOG_LEVEL.to_string(),
            log_file: None,
        }
    }
}
