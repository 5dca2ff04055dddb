//! Environment configuration for studybrief.
//!
//! Two concerns live here:
//!
//! - [`load_and_apply`]: fill the process environment from project `.env` and the XDG
//!   `config.toml` `[env]` table, never overriding keys that are already set.
//! - [`var`]: trimmed reads used by the settings objects built at startup.
//!
//! Priority when a key is read: **existing env > .env > XDG**.

mod dotenv;
mod vars;
mod xdg_toml;

use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

pub use vars::var;

/// Serializes tests that touch `XDG_CONFIG_HOME`.
#[cfg(test)]
pub(crate) static XDG_ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("xdg config path: {0}")]
    XdgPath(String),
    #[error("read xdg config: {0}")]
    XdgRead(std::io::Error),
    #[error("parse xdg toml: {0}")]
    XdgParse(#[from] toml::de::Error),
    #[error("read .env: {0}")]
    DotenvRead(std::io::Error),
}

/// Applies `.env` and XDG config values to the process environment.
///
/// * `app_name`: directory under the XDG config home, e.g. `"studybrief"` reads
///   `~/.config/studybrief/config.toml`.
/// * `override_dir`: look for `.env` here instead of the current directory.
///
/// Keys already present in the environment are left untouched.
pub fn load_and_apply(app_name: &str, override_dir: Option<&Path>) -> Result<(), LoadError> {
    let from_xdg = xdg_toml::load_env_map(app_name)?;
    let from_dotenv = dotenv::load_env_map(override_dir).map_err(LoadError::DotenvRead)?;

    let keys: HashSet<&String> = from_xdg.keys().chain(from_dotenv.keys()).collect();
    for key in keys {
        if std::env::var_os(key).is_some() {
            continue;
        }
        if let Some(value) = from_dotenv.get(key).or_else(|| from_xdg.get(key)) {
            std::env::set_var(key, value);
        }
    }

    Ok(())
}
