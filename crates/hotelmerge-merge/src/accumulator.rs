//! Ordered keyed store of canonical hotels built up during one merge.

use hotelmerge_core::{Hotel, HotelKey};
use indexmap::map::Entry;
use indexmap::IndexMap;

/// Canonical hotels keyed by composite key, in first-insertion order.
///
/// The accumulator owns every record; callers only ever mutate a record
/// through [`Accumulator::upsert_with`].
#[derive(Debug, Default)]
pub struct Accumulator {
    hotels: IndexMap<HotelKey, Hotel>,
}

impl Accumulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.hotels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hotels.is_empty()
    }

    #[must_use]
    pub fn get(&self, key: &HotelKey) -> Option<&Hotel> {
        self.hotels.get(key)
    }

    /// Inserts `create()` under `key` on first encounter, otherwise applies
    /// `update` to the stored record. Returns `true` when a record was
    /// created.
    pub fn upsert_with<C, U>(&mut self, key: HotelKey, create: C, update: U) -> bool
    where
        C: FnOnce() -> Hotel,
        U: FnOnce(&mut Hotel),
    {
        match self.hotels.entry(key) {
            Entry::Occupied(mut slot) => {
                update(slot.get_mut());
                false
            }
            Entry::Vacant(slot) => {
                slot.insert(create());
                true
            }
        }
    }

    /// Consumes the accumulator, yielding hotels in the order their keys
    /// were first inserted.
    #[must_use]
    pub fn into_hotels(self) -> Vec<Hotel> {
        self.hotels.into_values().collect()
    }
}
