//! Multi-supplier hotel merge engine.
//!
//! Each supplier's raw records are folded, in a fixed order, into one
//! [`Accumulator`] keyed by [`hotelmerge_core::HotelKey`]. Scalars are filled
//! only when empty, collections only grow, and the first supplier to provide
//! a value wins. See [`orchestrator::FOLD_ORDER`].

pub mod accumulator;
pub mod mapper;
pub mod orchestrator;
pub mod rules;

pub use accumulator::Accumulator;
pub use mapper::{AcmeMapper, PaperFliesMapper, PatagoniaMapper, SupplierMapper};
pub use orchestrator::{merge, merge_in_order, FOLD_ORDER};
