//! Driver stages: read the catalog, then inspect the graph's indexes.

pub mod catalog;
pub mod inspect;
