use crate::raw::{AcmeHotel, PaperFliesHotel, PatagoniaHotel};

/// The three upstream hotel data suppliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Supplier {
    PaperFlies,
    Patagonia,
    Acme,
}

impl Supplier {
    pub const ALL: [Supplier; 3] = [Supplier::PaperFlies, Supplier::Patagonia, Supplier::Acme];

    /// Lowercase name, also the last path segment of the supplier endpoint.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Supplier::PaperFlies => "paperflies",
            Supplier::Patagonia => "patagonia",
            Supplier::Acme => "acme",
        }
    }
}

impl std::fmt::Display for Supplier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

/// One snapshot of every supplier's raw records. A supplier that could not
/// be fetched is represented by an empty collection.
#[derive(Debug, Clone, Default)]
pub struct SupplierBatches {
    pub paperflies: Vec<PaperFliesHotel>,
    pub patagonia: Vec<PatagoniaHotel>,
    pub acme: Vec<AcmeHotel>,
}

impl SupplierBatches {
    /// Number of raw records held for `supplier`.
    #[must_use]
    pub fn count(&self, supplier: Supplier) -> usize {
        match supplier {
            Supplier::PaperFlies => self.paperflies.len(),
            Supplier::Patagonia => self.patagonia.len(),
            Supplier::Acme => self.acme.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        Supplier::ALL.iter().all(|s| self.count(*s) == 0)
    }
}
