//! Test utilities for building graph archives and entity documents.
//!
//! # Panics
//!
//! All functions in this module may panic on I/O errors since they are
//! designed for test use only where panics are acceptable.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::fmt::Write as _;
use std::io::Cursor;
use std::io::Write;

/// Creates an in-memory ZIP archive from a list of entries.
///
/// Each entry is a tuple of (path, content). Files are stored uncompressed.
///
/// # Examples
///
/// ```
/// use maltcat_core::test_utils::create_test_zip;
///
/// let zip_data = create_test_zip(vec![("Entities/A.entity", &b"<a/>"[..]), ("version", &b"1.0"[..])]);
/// ```
#[must_use]
pub fn create_test_zip(entries: Vec<(&str, &[u8])>) -> Vec<u8> {
    use zip::write::SimpleFileOptions;
    use zip::write::ZipWriter;

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    for (path, data) in entries {
        zip.start_file(path, options).unwrap();
        zip.write_all(data).unwrap();
    }

    zip.finish().unwrap().into_inner()
}

/// Renders an entity document whose fields carry only `name` and `type`.
///
/// # Examples
///
/// ```
/// use maltcat_core::test_utils::entity_xml;
///
/// let xml = entity_xml("maltego.Foo", "Foo", &[("ipAddress", "string")]);
/// assert!(xml.contains(r#"<Field name="ipAddress" type="string"/>"#));
/// ```
#[must_use]
pub fn entity_xml(id: &str, display_name: &str, fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .fold(EntityXml::new(id, display_name), |xml, (name, field_type)| {
            xml.field(name, field_type)
        })
        .build()
}

/// Builder for entity documents with optional field attributes.
///
/// # Examples
///
/// ```
/// use maltcat_core::test_utils::EntityXml;
///
/// let xml = EntityXml::new("maltego.Person", "Person")
///     .field_with("person.fullname", "string", Some("Full name"), Some("Name"))
///     .field("person.age", "int")
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct EntityXml {
    id: String,
    display_name: String,
    fields: Vec<String>,
}

impl EntityXml {
    /// Starts a document for the given entity type.
    #[must_use]
    pub fn new(id: &str, display_name: &str) -> Self {
        Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
            fields: Vec::new(),
        }
    }

    /// Adds a field with only the required attributes.
    #[must_use]
    pub fn field(self, name: &str, field_type: &str) -> Self {
        self.field_with(name, field_type, None, None)
    }

    /// Adds a field with optional `description` and `displayName`.
    #[must_use]
    pub fn field_with(
        mut self,
        name: &str,
        field_type: &str,
        description: Option<&str>,
        display_name: Option<&str>,
    ) -> Self {
        let mut element = format!(r#"<Field name="{name}" type="{field_type}""#);
        if let Some(description) = description {
            write!(element, r#" description="{description}""#).unwrap();
        }
        if let Some(display_name) = display_name {
            write!(element, r#" displayName="{display_name}""#).unwrap();
        }
        element.push_str("/>");
        self.fields.push(element);
        self
    }

    /// Renders the document.
    #[must_use]
    pub fn build(self) -> String {
        let mut xml = format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <MaltegoEntity id=\"{}\" displayName=\"{}\">\n",
            self.id, self.display_name
        );
        if !self.fields.is_empty() {
            xml.push_str("  <Properties>\n    <Fields>\n");
            for field in &self.fields {
                writeln!(xml, "      {field}").unwrap();
            }
            xml.push_str("    </Fields>\n  </Properties>\n");
        }
        xml.push_str("</MaltegoEntity>\n");
        xml
    }
}
