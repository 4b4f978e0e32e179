//! Entity definition document parsing.
//!
//! A definition document looks like:
//!
//! ```xml
//! <MaltegoEntity id="maltego.IPv4Address" displayName="IPv4 Address">
//!   <Properties value="ipv4-address">
//!     <Fields>
//!       <Field name="ipv4-address" type="string" displayName="IP Address">
//!         <SampleValue>10.0.0.1</SampleValue>
//!       </Field>
//!     </Fields>
//!   </Properties>
//! </MaltegoEntity>
//! ```
//!
//! Only the attributes named below are read. The root tag name, unknown
//! attributes and unknown child elements are ignored, including elements
//! interleaved with `Field`s. Anything other than whitespace, comments or
//! processing instructions after the root element is an error.

use quick_xml::DeError;
use quick_xml::Reader;
use quick_xml::events::Event;
use serde::Deserialize;
use serde::de::Error as _;

use crate::Result;
use crate::catalog::definition::EntityTypeDefinition;
use crate::catalog::definition::FieldDefinition;

#[derive(Debug, Deserialize)]
struct EntityDocument {
    #[serde(rename = "@id")]
    id: String,
    #[serde(rename = "@displayName")]
    display_name: String,
    #[serde(rename = "Properties")]
    properties: Option<PropertiesElement>,
}

#[derive(Debug, Deserialize)]
struct PropertiesElement {
    #[serde(rename = "Fields")]
    fields: Option<FieldsElement>,
}

#[derive(Debug, Deserialize)]
struct FieldsElement {
    #[serde(rename = "Field", default)]
    fields: Vec<FieldElement>,
}

#[derive(Debug, Deserialize)]
struct FieldElement {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "@type")]
    field_type: String,
    #[serde(rename = "@description")]
    description: Option<String>,
    #[serde(rename = "@displayName")]
    display_name: Option<String>,
}

impl From<FieldElement> for FieldDefinition {
    fn from(element: FieldElement) -> Self {
        Self::new(
            element.name,
            element.field_type,
            element.description,
            element.display_name,
        )
    }
}

/// Parses one entity definition document.
///
/// # Errors
///
/// Returns [`CatalogError::MalformedXml`](crate::CatalogError::MalformedXml)
/// if the document is not well-formed or a required attribute (`id`,
/// `displayName`, or a field's `name`/`type`) is missing.
///
/// # Examples
///
/// ```
/// use maltcat_core::parse_definition;
///
/// # fn main() -> Result<(), maltcat_core::CatalogError> {
/// let definition = parse_definition(
///     r#"<MaltegoEntity id="maltego.Foo" displayName="Foo">
///          <Properties><Fields>
///            <Field name="ipAddress" type="string"/>
///          </Fields></Properties>
///        </MaltegoEntity>"#,
/// )?;
///
/// assert_eq!(definition.id(), "maltego.Foo");
/// assert_eq!(definition.fields().len(), 1);
/// # Ok(())
/// # }
/// ```
pub fn parse_definition(xml: &str) -> Result<EntityTypeDefinition> {
    ensure_single_root(xml)?;
    let document: EntityDocument = quick_xml::de::from_str(xml)?;

    let fields = document
        .properties
        .and_then(|p| p.fields)
        .map(|f| f.fields)
        .unwrap_or_default();

    Ok(EntityTypeDefinition::new(
        document.id,
        document.display_name,
        fields.into_iter().map(FieldDefinition::from),
    ))
}

/// Fails if content follows the end of the root element.
///
/// The deserializer stops at the root's end tag and never sees the rest.
fn ensure_single_root(xml: &str) -> Result<()> {
    let mut reader = Reader::from_str(xml);
    let mut depth = 0usize;
    let mut closed = false;

    loop {
        let event = reader.read_event().map_err(DeError::from)?;
        match event {
            Event::Eof => return Ok(()),
            Event::Start(_) if !closed => depth += 1,
            Event::End(_) if !closed => {
                depth = depth.saturating_sub(1);
                closed = depth == 0;
            }
            Event::Empty(_) if !closed => closed = depth == 0,
            _ if !closed => {}
            Event::Comment(_) | Event::PI(_) => {}
            Event::Text(text) if text.iter().all(u8::is_ascii_whitespace) => {}
            _ => {
                return Err(DeError::custom(format!(
                    "unexpected content after the root element at byte {}",
                    reader.buffer_position()
                ))
                .into());
            }
        }
    }
}
