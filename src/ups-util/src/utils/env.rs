use std::env;
use std::path::PathBuf;

use crate::constants::CF_HOME_ENV_VAR;

pub fn get_env_var(var: &str) -> Option<String> {
    env::var(var).ok().filter(|value| !value.trim().is_empty())
}

/// Directory that holds the `.cf` session folder: `$CF_HOME` when set, the user's home otherwise.
pub fn default_cf_home() -> Option<PathBuf> {
    get_env_var(CF_HOME_ENV_VAR)
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}
