//! Runtime Configuration
//!
//! Each key is looked up in a `<meta name=... content=...>` tag of the host
//! page, then in the build environment, then falls back to a default.

use std::str::FromStr;

use log::{info, warn};

const API_BASE_KEY: &str = "clientes-api-base";
const UPLOADS_BASE_KEY: &str = "clientes-uploads-base";
const LOG_LEVEL_KEY: &str = "clientes-log-level";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub uploads_base: String,
    pub log_level: log::Level,
}

impl AppConfig {
    pub fn load() -> Self {
        Self::from_lookup(|key| meta_content(key).or_else(|| build_env(key)))
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            api_base_url: try_load(&lookup, API_BASE_KEY, "http://127.0.0.1:5000"),
            uploads_base: try_load(&lookup, UPLOADS_BASE_KEY, "uploads"),
            log_level: try_load(&lookup, LOG_LEVEL_KEY, "info"),
        }
    }

    /// Absolute URL of a backend route
    pub fn endpoint(&self, route: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            route.trim_start_matches('/')
        )
    }
}

fn try_load<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> T
where
    T::Err: std::fmt::Display,
{
    let raw = lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        });

    match raw.parse() {
        Ok(value) => value,
        Err(e) => {
            warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
            match default.parse() {
                Ok(value) => value,
                Err(_) => unreachable!("default for {key} must parse"),
            }
        }
    }
}

fn meta_content(key: &str) -> Option<String> {
    web_sys::window()?
        .document()?
        .query_selector(&format!("meta[name=\"{key}\"]"))
        .ok()
        .flatten()?
        .get_attribute("content")
}

fn build_env(key: &str) -> Option<String> {
    let value = match key {
        API_BASE_KEY => option_env!("CLIENTES_API_BASE"),
        UPLOADS_BASE_KEY => option_env!("CLIENTES_UPLOADS_BASE"),
        LOG_LEVEL_KEY => option_env!("CLIENTES_LOG_LEVEL"),
        _ => None,
    };
    value.map(str::to_string)
}
