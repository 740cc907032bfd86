//! Strip catalog
//!
//! Lists the sound, movie and image strips of a sequencer, filtered by
//! per-kind ignore rules, for asset and licensing documentation.

mod catalog;
mod strip;

pub use catalog::{strip_duplicate_suffix, CatalogReport, StripCatalog, StripGroup};
pub use strip::{IgnoreRules, Strip, StripKind, StripKinds};
