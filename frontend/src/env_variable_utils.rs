use web_sys::window;

/// Looks a key up in the `window.ENV_CONFIG` object injected by `index.html`.
pub fn get_env_var(key: &str) -> Option<String> {
    let window = window()?;

    let env_config = js_sys::Reflect::get(&window, &"ENV_CONFIG".into()).ok()?;

    if env_config.is_undefined() {
        log::warn!("ENV_CONFIG is undefined - environment variables not loaded");
        return None;
    }

    let value = js_sys::Reflect::get(&env_config, &key.into()).ok()?;

    if !value.is_undefined() {
        value.as_string()
    } else {
        log::debug!("Environment variable '{}' is undefined", key);
        None
    }
}

/// Values baked in when the bundle was built, e.g. `API_BASE_URL=... trunk build`.
pub fn get_build_var(key: &str) -> Option<String> {
    let value = match key {
        "API_BASE_URL" => option_env!("API_BASE_URL"),
        "APP_NAME" => option_env!("APP_NAME"),
        "DEBUG_MODE" => option_env!("DEBUG_MODE"),
        "DEFAULT_COUNTRY_CODE" => option_env!("DEFAULT_COUNTRY_CODE"),
        "CHANNEL_MAX_RESULTS" => option_env!("CHANNEL_MAX_RESULTS"),
        _ => None,
    };
    value.map(str::to_string)
}

/// Runtime config first, then build-time values.
pub fn lookup(key: &str) -> Option<String> {
    get_env_var(key).or_else(|| get_build_var(key))
}
