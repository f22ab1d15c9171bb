//! Shared domain types for hotelmerge: the canonical hotel record, the raw
//! shapes each supplier reports, string normalization and runtime config.

pub mod app_config;
pub mod config;
pub mod hotel;
pub mod normalize;
pub mod raw;
pub mod supplier;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use hotel::{Amenities, Hotel, HotelKey, ImageDetail, ImageSet, Images, Location};
pub use raw::{AcmeHotel, PaperFliesHotel, PatagoniaHotel};
pub use supplier::{Supplier, SupplierBatches};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
