//! Entity-type catalog reader and index directory inspection for Maltego
//! graph archives.
//!
//! `maltcat-core` reads the entity type definitions stored in a `.mtgl`
//! archive into an in-memory catalog, and inspects the Lucene index
//! directories of an extracted graph, either through an external helper or
//! with a plain file listing.
//!
//! # Examples
//!
//! ```no_run
//! use maltcat_core::CatalogConfig;
//! use maltcat_core::Inspector;
//! use maltcat_core::inspect_graph;
//! use maltcat_core::read_catalog;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = read_catalog("Sample/Maltego.mtgl", &CatalogConfig::default())?;
//! println!("{} entity types", report.catalog.len());
//!
//! for (name, result) in inspect_graph("Sample/Graphs/Graph1", &Inspector::new(None)) {
//!     println!("{name}: {result}");
//! }
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod inspection;
pub mod report;
#[doc(hidden)]
pub mod test_utils;

pub use catalog::EntityTypeCatalog;
pub use catalog::EntityTypeDefinition;
pub use catalog::FieldDefinition;
pub use catalog::parse_definition;
pub use catalog::read_catalog;
pub use catalog::read_catalog_with_progress;
pub use config::CatalogConfig;
pub use config::HelperConfig;
pub use error::CatalogError;
pub use error::Result;
pub use inspection::DirectoryInspector;
pub use inspection::GRAPH_INDEX_DIRS;
pub use inspection::InspectionResult;
pub use inspection::Inspector;
pub use inspection::inspect_graph;
pub use report::CatalogProgress;
pub use report::CatalogReport;
pub use report::NoopProgress;
pub use report::SkippedEntry;
