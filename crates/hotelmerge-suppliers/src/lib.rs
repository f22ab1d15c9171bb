//! Retrieval of raw hotel records from the three upstream suppliers.

pub mod client;
pub mod error;

mod rate_limit;

pub use client::SupplierClient;
pub use error::SupplierError;
