//! Drives the supplier folds that produce the merged catalog.

use hotelmerge_core::{Hotel, Supplier, SupplierBatches};

use crate::accumulator::Accumulator;
use crate::mapper::{fold, AcmeMapper, PaperFliesMapper, PatagoniaMapper};

/// Order in which suppliers are folded into the catalog.
///
/// Later suppliers only fill gaps (apart from paperflies' country override)
/// or grow collections, so this order decides which supplier wins every
/// fill-if-empty race.
pub const FOLD_ORDER: [Supplier; 3] = [Supplier::PaperFlies, Supplier::Patagonia, Supplier::Acme];

/// Merges all three supplier snapshots in [`FOLD_ORDER`].
#[must_use]
pub fn merge(batches: &SupplierBatches) -> Vec<Hotel> {
    merge_in_order(batches, &FOLD_ORDER)
}

/// Merges the supplier snapshots in an explicit fold order.
///
/// Hotels are returned in the order their keys were first seen. A supplier
/// listed more than once is folded more than once; a supplier left out is
/// skipped.
#[must_use]
pub fn merge_in_order(batches: &SupplierBatches, order: &[Supplier]) -> Vec<Hotel> {
    let mut acc = Accumulator::new();

    for supplier in order {
        match supplier {
            Supplier::PaperFlies => fold::<PaperFliesMapper>(&mut acc, &batches.paperflies),
            Supplier::Patagonia => fold::<PatagoniaMapper>(&mut acc, &batches.patagonia),
            Supplier::Acme => fold::<AcmeMapper>(&mut acc, &batches.acme),
        };
    }

    tracing::info!(hotels = acc.len(), "merged supplier snapshots");
    acc.into_hotels()
}
