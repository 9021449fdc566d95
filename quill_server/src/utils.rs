use std::collections::HashMap;

use crate::models::config::ConfigError;

pub const DEFAULT_PORT: u16 = 5000;

pub fn default_server_binding_addr() -> String {
    format!("0.0.0.0:{DEFAULT_PORT}")
}

pub fn default_allowed_origin() -> String {
    "http://localhost:5173".to_string()
}

/// Expand `${VAR}` references using the current environment. Variables
/// whose names or values contain template characters are skipped since
/// `envsubst` refuses them.
pub fn substitute_env(raw: &str) -> Result<String, ConfigError> {
    let variables: HashMap<String, String> = std::env::vars()
        .filter(|(key, value)| {
            ![key, value]
                .iter()
                .any(|s| s.contains(['$', '{', '}']))
        })
        .collect();
    envsubst::substitute(raw, &variables).map_err(|err| ConfigError::Substitution(format!("{err:?}")))
}
