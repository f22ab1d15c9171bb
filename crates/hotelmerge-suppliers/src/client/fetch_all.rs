//! Concurrent snapshot of every supplier for one merge run.

use hotelmerge_core::{Supplier, SupplierBatches};

use crate::error::SupplierError;

use super::SupplierClient;

impl SupplierClient {
    /// Fetches all three suppliers concurrently and waits for every result.
    ///
    /// A supplier whose fetch fails is logged and contributes an empty
    /// collection, so the merge still runs with whatever data is available.
    pub async fn fetch_all_suppliers(&self) -> SupplierBatches {
        let (paperflies, patagonia, acme) = tokio::join!(
            self.fetch_paperflies(),
            self.fetch_patagonia(),
            self.fetch_acme(),
        );

        SupplierBatches {
            paperflies: or_empty(Supplier::PaperFlies, paperflies),
            patagonia: or_empty(Supplier::Patagonia, patagonia),
            acme: or_empty(Supplier::Acme, acme),
        }
    }
}

fn or_empty<T>(supplier: Supplier, result: Result<Vec<T>, SupplierError>) -> Vec<T> {
    match result {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(
                %supplier,
                error = %e,
                "supplier fetch failed, continuing without its records"
            );
            Vec::new()
        }
    }
}
