//! Precomputed combination tables: every value reachable from an unordered
//! pair or triple of the input numbers, with the expression that produces it.

mod table;
mod triples;

pub use table::{CombinationTable, Possibility, SourceKey};
