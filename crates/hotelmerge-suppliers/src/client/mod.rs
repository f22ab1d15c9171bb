//! HTTP client for the supplier hotel endpoints.

mod fetch_all;

use std::time::Duration;

use hotelmerge_core::{AcmeHotel, AppConfig, PaperFliesHotel, PatagoniaHotel, Supplier};
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::SupplierError;
use crate::rate_limit::retry_with_backoff;

/// HTTP client for `GET {base_url}/suppliers/{supplier}`.
///
/// Each endpoint returns the supplier's full hotel list as one JSON array.
/// 429, 404 and other non-2xx responses map to typed errors; transient ones
/// are retried with exponential backoff up to `max_retries` extra attempts.
pub struct SupplierClient {
    client: Client,
    base_url: String,
    max_retries: u32,
    backoff_base_secs: u64,
}

impl SupplierClient {
    /// Creates a `SupplierClient` with configured timeout, `User-Agent`, and
    /// retry policy.
    ///
    /// # Errors
    ///
    /// - [`SupplierError::InvalidBaseUrl`] if `base_url` is not an absolute
    ///   http(s) URL.
    /// - [`SupplierError::Http`] if the underlying `reqwest::Client` cannot be
    ///   constructed.
    pub fn new(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, SupplierError> {
        let base_url = normalize_base_url(base_url)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url,
            max_retries,
            backoff_base_secs,
        })
    }

    /// Builds a client from the runtime configuration.
    ///
    /// # Errors
    ///
    /// See [`SupplierClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, SupplierError> {
        Self::new(
            &config.supplier_base_url,
            config.request_timeout_secs,
            &config.user_agent,
            config.max_retries,
            config.retry_backoff_base_secs,
        )
    }

    #[must_use]
    pub fn endpoint_url(&self, supplier: Supplier) -> String {
        format!("{}/suppliers/{}", self.base_url, supplier.slug())
    }

    /// Fetches every paperflies record.
    ///
    /// # Errors
    ///
    /// See [`SupplierClient::fetch_records`].
    pub async fn fetch_paperflies(&self) -> Result<Vec<PaperFliesHotel>, SupplierError> {
        self.fetch_records(Supplier::PaperFlies).await
    }

    /// Fetches every patagonia record.
    ///
    /// # Errors
    ///
    /// See [`SupplierClient::fetch_records`].
    pub async fn fetch_patagonia(&self) -> Result<Vec<PatagoniaHotel>, SupplierError> {
        self.fetch_records(Supplier::Patagonia).await
    }

    /// Fetches every acme record.
    ///
    /// # Errors
    ///
    /// See [`SupplierClient::fetch_records`].
    pub async fn fetch_acme(&self) -> Result<Vec<AcmeHotel>, SupplierError> {
        self.fetch_records(Supplier::Acme).await
    }

    /// Fetches and decodes one supplier's record list, with automatic retry
    /// on transient errors.
    ///
    /// A `null` body is read as an empty list. Records that cannot be decoded
    /// are logged and skipped; the rest of the list is kept.
    ///
    /// # Errors
    ///
    /// - [`SupplierError::RateLimited`] — HTTP 429 after all retries exhausted.
    /// - [`SupplierError::NotFound`] — HTTP 404 (not retried).
    /// - [`SupplierError::UnexpectedStatus`] — any other non-2xx status (5xx retried).
    /// - [`SupplierError::Http`] — network or TLS failure after all retries exhausted.
    /// - [`SupplierError::Deserialize`] — body is not a JSON array (not retried).
    pub async fn fetch_records<T>(&self, supplier: Supplier) -> Result<Vec<T>, SupplierError>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint_url(supplier);

        retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            let url = url.clone();
            async move {
                let response = self
                    .client
                    .get(&url)
                    .header(reqwest::header::ACCEPT, "application/json")
                    .send()
                    .await?;
                let status = response.status();

                if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                    let retry_after_secs = response
                        .headers()
                        .get(reqwest::header::RETRY_AFTER)
                        .and_then(|v| v.to_str().ok())
                        .and_then(|s| s.parse::<u64>().ok())
                        .unwrap_or(60);
                    return Err(SupplierError::RateLimited {
                        host: extract_host(&url),
                        retry_after_secs,
                    });
                }

                if status == reqwest::StatusCode::NOT_FOUND {
                    return Err(SupplierError::NotFound { url });
                }

                if !status.is_success() {
                    return Err(SupplierError::UnexpectedStatus {
                        status: status.as_u16(),
                        url,
                    });
                }

                let body = response.text().await?;
                let values = serde_json::from_str::<Option<Vec<serde_json::Value>>>(&body)
                    .map_err(|e| SupplierError::Deserialize {
                        context: format!("{supplier} records from {url}"),
                        source: e,
                    })?
                    .unwrap_or_default();

                Ok(decode_records(supplier, values))
            }
        })
        .await
    }
}

/// Decodes each record on its own so one bad record does not cost the rest.
fn decode_records<T>(supplier: Supplier, values: Vec<serde_json::Value>) -> Vec<T>
where
    T: DeserializeOwned,
{
    let total = values.len();
    let records: Vec<T> = values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value::<T>(value) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(%supplier, index, error = %e, "skipping undecodable supplier record");
                None
            }
        })
        .collect();

    tracing::debug!(
        %supplier,
        count = records.len(),
        skipped = total - records.len(),
        "fetched supplier records"
    );
    records
}

/// Validates `base_url` and strips any trailing slash so endpoint paths can
/// be appended directly.
fn normalize_base_url(base_url: &str) -> Result<String, SupplierError> {
    let parsed = reqwest::Url::parse(base_url).map_err(|e| SupplierError::InvalidBaseUrl {
        base_url: base_url.to_owned(),
        reason: e.to_string(),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(SupplierError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: format!("unsupported scheme \"{}\"", parsed.scheme()),
        });
    }
    Ok(base_url.trim_end_matches('/').to_owned())
}

/// Hostname of `url` for error messages, falling back to the full string.
fn extract_host(url: &str) -> String {
    reqwest::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_owned))
        .unwrap_or_else(|| url.to_owned())
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
