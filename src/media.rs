//! Media metadata records and the extraction adapter that produces them.
//!
//! `model` holds the explicit `Track` schema; `probe` wraps the third-party
//! reader behind the `Extractor` trait.

mod model;
mod probe;

pub use model::*;
pub use probe::*;

#[cfg(test)]
pub(crate) mod fake;
