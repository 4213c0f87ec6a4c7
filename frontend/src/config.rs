use crate::api::{DEFAULT_COUNTRY_CODE, DEFAULT_MAX_RESULTS};
use crate::env_variable_utils;
use yew::prelude::*;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_APP_NAME: &str = "YouTube Sentiment Analysis";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub app_name: String,
    pub debug_mode: bool,
    pub default_country_code: String,
    pub channel_max_results: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            app_name: DEFAULT_APP_NAME.to_string(),
            debug_mode: false,
            default_country_code: DEFAULT_COUNTRY_CODE.to_string(),
            channel_max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        Self::from_lookup(env_variable_utils::lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_base_url = non_empty("API_BASE_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base_url);

        let debug_mode = non_empty("DEBUG_MODE")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(defaults.debug_mode);

        let channel_max_results = non_empty("CHANNEL_MAX_RESULTS")
            .and_then(|v| v.trim().parse::<u32>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(defaults.channel_max_results);

        Self {
            api_base_url,
            app_name: non_empty("APP_NAME").unwrap_or(defaults.app_name),
            debug_mode,
            default_country_code: non_empty("DEFAULT_COUNTRY_CODE")
                .map(|code| code.trim().to_uppercase())
                .unwrap_or(defaults.default_country_code),
            channel_max_results,
        }
    }
}

/// Config provided at the root of the app, or freshly loaded when a component
/// is rendered outside the provider.
#[hook]
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_else(AppConfig::load)
}
