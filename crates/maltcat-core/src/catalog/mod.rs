//! Entity-type catalog: model, definition parsing, and archive reading.

pub mod definition;
pub mod reader;
pub mod xml;

pub use definition::EntityTypeCatalog;
pub use definition::EntityTypeDefinition;
pub use definition::FieldDefinition;
pub use reader::read_catalog;
pub use reader::read_catalog_with_progress;
pub use xml::parse_definition;
