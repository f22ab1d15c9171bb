use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_SUPPLIER_BASE_URL: &str = "https://5f2be0b4ffc88500167b85a0.mockapi.io";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let supplier_base_url = or_default("HOTELMERGE_SUPPLIER_BASE_URL", DEFAULT_SUPPLIER_BASE_URL);
    if !supplier_base_url.starts_with("http://") && !supplier_base_url.starts_with("https://") {
        return Err(ConfigError::InvalidEnvVar {
            var: "HOTELMERGE_SUPPLIER_BASE_URL".to_string(),
            reason: format!("\"{supplier_base_url}\" is not an http(s) URL"),
        });
    }

    let request_timeout_secs = parse_u64("HOTELMERGE_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("HOTELMERGE_USER_AGENT", "hotelmerge/0.1");
    let max_retries = parse_u32("HOTELMERGE_MAX_RETRIES", "2")?;
    let retry_backoff_base_secs = parse_u64("HOTELMERGE_RETRY_BACKOFF_BASE_SECS", "1")?;
    let log_level = or_default("HOTELMERGE_LOG_LEVEL", "warn");

    Ok(AppConfig {
        supplier_base_url,
        request_timeout_secs,
        user_agent,
        max_retries,
        retry_backoff_base_secs,
        log_level,
    })
}
