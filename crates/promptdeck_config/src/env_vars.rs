//! Environment variable handling for the PromptDeck backend.
//!
//! Configuration values can be overridden with `PROMPTDECK__SECTION__KEY`
//! variables. Values marked `secret_from_env` in the config files are
//! resolved from `PROMPTDECK_SECRET_SECTION_KEY`, then from the well known
//! deployment names (`STRIPE_SECRET_KEY`, `PUBLIC_AUTH_URL`, ...).

use std::env;

use serde_json::Value;
use tracing::warn;

/// The default prefix for configuration environment variables
pub const DEFAULT_PREFIX: &str = "PROMPTDECK";

/// The prefix for secret environment variables
pub const SECRET_PREFIX: &str = "PROMPTDECK_SECRET";

/// The separator for configuration environment variables
pub const CONFIG_SEPARATOR: &str = "__";

/// The separator for secret environment variables
pub const SECRET_SEPARATOR: &str = "_";

/// Marker string replaced by an environment variable at load time.
pub const SECRET_MARKER: &str = "secret_from_env";

/// Deployment env names that predate the prefixed scheme.
const LEGACY_ALIASES: &[(&str, &str)] = &[
    ("auth.auth_url", "PUBLIC_AUTH_URL"),
    ("auth.api_key", "PROPELAUTH_API_KEY"),
    ("auth.verifier_key", "PROPELAUTH_VERIFIER_KEY"),
    ("stripe.secret_key", "STRIPE_SECRET_KEY"),
    ("stripe.price_id", "STRIPE_PRICE_ID"),
    ("database.url", "DATABASE_URL"),
];

/// Get the prefix for configuration environment variables
pub fn get_config_prefix() -> String {
    env::var("PREFIX").unwrap_or_else(|_| DEFAULT_PREFIX.to_string())
}

/// Convert a configuration path to an environment variable name
///
/// `server.host` becomes `PROMPTDECK__SERVER__HOST`.
pub fn config_path_to_env_var(path: &str) -> String {
    let prefix = get_config_prefix();
    let path = path.replace('.', CONFIG_SEPARATOR);
    format!("{}{}{}", prefix, CONFIG_SEPARATOR, path).to_uppercase()
}

/// Convert a secret path to an environment variable name
///
/// `stripe.secret_key` becomes `PROMPTDECK_SECRET_STRIPE_SECRET_KEY`.
pub fn secret_path_to_env_var(path: &str) -> String {
    let path = path.replace('.', SECRET_SEPARATOR);
    format!("{}{}{}", SECRET_PREFIX, SECRET_SEPARATOR, path).to_uppercase()
}

/// Convert a secret path to the unprefixed form, `stripe.price_id` -> `STRIPE_PRICE_ID`.
pub fn legacy_secret_path_to_env_var(path: &str) -> String {
    let parts: Vec<&str> = path.split('.').collect();
    if parts.len() < 2 {
        return path.to_uppercase();
    }

    let service = parts[0];
    let key = parts[1..].join(SECRET_SEPARATOR);
    format!("{}_{}", service, key).to_uppercase()
}

/// The deployment name for a config path, if it has one.
pub fn legacy_alias(path: &str) -> Option<&'static str> {
    LEGACY_ALIASES
        .iter()
        .find(|(p, _)| *p == path)
        .map(|(_, name)| *name)
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

/// Get an environment variable for a path
///
/// Lookup order: `PROMPTDECK__A__B`, `PROMPTDECK_SECRET_A_B`, the
/// deployment alias and finally `A_B`.
pub fn get_env_var(path: &str) -> Option<String> {
    non_empty_var(&config_path_to_env_var(path))
        .or_else(|| non_empty_var(&secret_path_to_env_var(path)))
        .or_else(|| legacy_alias(path).and_then(non_empty_var))
        .or_else(|| non_empty_var(&legacy_secret_path_to_env_var(path)))
}

/// Check if a path is a secret path
///
/// Paths containing "secret", "key", "password" or "token" are considered secret.
pub fn is_secret_path(path: &str) -> bool {
    let path_lower = path.to_lowercase();
    path_lower.contains("secret")
        || path_lower.contains("key")
        || path_lower.contains("password")
        || path_lower.contains("token")
}

/// Replace every `secret_from_env` string in `value` with the matching
/// environment variable. Markers with no variable set become `null`.
///
/// Returns the paths that could not be resolved.
pub fn inject_env_vars(value: &mut Value) -> Vec<String> {
    fn walk(path: &mut Vec<String>, obj: &mut Value, missing: &mut Vec<String>) {
        match obj {
            Value::Object(map) => {
                for (k, v) in map.iter_mut() {
                    path.push(k.to_string());
                    walk(path, v, missing);
                    path.pop();
                }
            }
            Value::Array(arr) => {
                for (i, v) in arr.iter_mut().enumerate() {
                    path.push(i.to_string());
                    walk(path, v, missing);
                    path.pop();
                }
            }
            Value::String(s) if s == SECRET_MARKER => {
                let path_str = path.join(".");
                match get_env_var(&path_str) {
                    Some(env_val) => *obj = Value::String(env_val),
                    None => {
                        if is_secret_path(&path_str) {
                            warn!("Secret for '{}' not found in environment", path_str);
                        } else {
                            warn!("Env var for '{}' not found", path_str);
                        }
                        *obj = Value::Null;
                        missing.push(path_str);
                    }
                }
            }
            _ => {}
        }
    }

    let mut missing = Vec::new();
    walk(&mut Vec::new(), value, &mut missing);
    missing
}
