// --- File: crates/promptdeck_config/src/lib.rs ---
//! Layered configuration for the PromptDeck backend.
//!
//! Sources, later ones winning: `config/default.*`, `config/<RUN_ENV>.*`,
//! `PROMPTDECK__*` environment variables. Afterwards every `secret_from_env`
//! marker is resolved from the environment (see [`env_vars`]).

use config::{Config, ConfigError, Environment, File, FileFormat};
use once_cell::sync::OnceCell;
use serde_json::Value;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod env_vars;
pub mod models;

pub use models::*;

/// Loads the configuration from `$CONFIG_DIR` (default `./config`) using
/// `$RUN_ENV` (default `debug`) for the environment specific file.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let config_dir = env::var("CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config"));

    load_config_from(&config_dir, &run_env)
}

/// Loads the configuration from an explicit directory and run environment.
pub fn load_config_from(config_dir: &Path, run_env: &str) -> Result<AppConfig, ConfigError> {
    let prefix = env_vars::get_config_prefix();
    let default_path = config_dir.join("default");
    let env_path = config_dir.join(run_env);

    debug!(
        "Loading config from {} and {} (prefix {})",
        default_path.display(),
        env_path.display(),
        prefix
    );

    let builder = Config::builder()
        .add_source(File::with_name(&default_path.to_string_lossy()).required(false))
        .add_source(File::with_name(&env_path.to_string_lossy()).required(false))
        .add_source(
            Environment::with_prefix(&prefix)
                .separator(env_vars::CONFIG_SEPARATOR)
                .try_parsing(true),
        );

    let mut raw: Value = builder.build()?.try_deserialize()?;
    let missing = env_vars::inject_env_vars(&mut raw);
    if !missing.is_empty() {
        debug!("Unresolved secret markers: {:?}", missing);
    }

    from_json_value(&raw)
}

/// Deserializes an already resolved JSON tree into [`AppConfig`].
///
/// Goes through the `config` crate again so that string values coming from
/// the environment are coerced into numbers and booleans where needed.
pub fn from_json_value(value: &Value) -> Result<AppConfig, ConfigError> {
    let json = serde_json::to_string(value)
        .map_err(|err| ConfigError::Message(format!("failed to serialize config: {err}")))?;

    Config::builder()
        .add_source(File::from_str(&json, FileFormat::Json))
        .build()?
        .try_deserialize()
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Loads the dotenv file into the process environment, once.
///
/// The file is `$DOTENV_OVERRIDE`, else a first CLI argument starting with
/// `.env`, else `.env`. Returns the path that was used.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path_override = env::var("DOTENV_OVERRIDE").ok();
    let dotenv_path_arg = env::args().nth(1).filter(|s| s.starts_with(".env"));

    let dotenv_path = dotenv_path_override
        .or(dotenv_path_arg)
        .unwrap_or_else(|| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
