//! Per-supplier translation of raw records into canonical hotels.

mod acme;
mod paperflies;
mod patagonia;

pub use acme::AcmeMapper;
pub use paperflies::PaperFliesMapper;
pub use patagonia::PatagoniaMapper;

use hotelmerge_core::{Hotel, HotelKey, Supplier};

use crate::accumulator::Accumulator;

/// Maps one supplier's raw record schema onto the canonical [`Hotel`].
///
/// Implementations only describe *which* raw field feeds *which* canonical
/// field and how it is normalized; the precedence rules themselves live in
/// [`crate::rules`].
pub trait SupplierMapper {
    type Record;

    const SUPPLIER: Supplier;

    /// Composite key taken from the record's native id fields.
    fn key(record: &Self::Record) -> HotelKey;

    /// Applies `record` to an existing canonical hotel with the supplier's
    /// fill/override/union rules.
    fn update(hotel: &mut Hotel, record: &Self::Record);

    /// Builds a fresh canonical hotel from `record`.
    ///
    /// Every rule treats an empty field as fillable, so applying the record
    /// to an empty hotel populates everything the supplier provides.
    fn create(record: &Self::Record) -> Hotel {
        let mut hotel = Hotel::new(Self::key(record));
        Self::update(&mut hotel, record);
        hotel
    }
}

/// Folds every record of one supplier into `acc`, in input order. Returns
/// the number of records that created a new canonical hotel.
pub fn fold<M: SupplierMapper>(acc: &mut Accumulator, records: &[M::Record]) -> usize {
    let mut created = 0usize;
    for record in records {
        let key = M::key(record);
        if acc.upsert_with(key, || M::create(record), |hotel| M::update(hotel, record)) {
            created += 1;
        }
    }

    tracing::debug!(
        supplier = %M::SUPPLIER,
        records = records.len(),
        created,
        "folded supplier records"
    );
    created
}
