#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Origin that serves `/suppliers/{name}` endpoints.
    pub supplier_base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub max_retries: u32,
    pub retry_backoff_base_secs: u64,
    pub log_level: String,
}
