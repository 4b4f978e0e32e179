//! Entity type definitions and the catalog that collects them.

use std::collections::BTreeMap;

/// One typed property of an entity type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    /// Field name, unique within its entity type.
    pub name: String,
    /// Declared value type (e.g. `string`, `int`, `date`).
    pub field_type: String,
    /// Free-text description; empty when the definition has none.
    pub description: String,
    /// Human-facing label; the field name when the definition has none.
    pub display_name: String,
}

impl FieldDefinition {
    /// Creates a field, applying the defaults for absent optional
    /// attributes.
    ///
    /// # Examples
    ///
    /// ```
    /// use maltcat_core::FieldDefinition;
    ///
    /// let field = FieldDefinition::new("ipAddress", "string", None, None);
    /// assert_eq!(field.description, "");
    /// assert_eq!(field.display_name, "ipAddress");
    /// ```
    pub fn new(
        name: impl Into<String>,
        field_type: impl Into<String>,
        description: Option<String>,
        display_name: Option<String>,
    ) -> Self {
        let name = name.into();
        let display_name = display_name.unwrap_or_else(|| name.clone());
        Self {
            name,
            field_type: field_type.into(),
            description: description.unwrap_or_default(),
            display_name,
        }
    }
}

/// A single entity type read from one definition entry.
///
/// Fields keep the order they appear in the document. Adding a field whose
/// name is already present replaces the earlier one in place, so names stay
/// unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityTypeDefinition {
    id: String,
    display_name: String,
    fields: Vec<FieldDefinition>,
}

impl EntityTypeDefinition {
    /// Builds a definition from its fields.
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        fields: impl IntoIterator<Item = FieldDefinition>,
    ) -> Self {
        let mut definition = Self {
            id: id.into(),
            display_name: display_name.into(),
            fields: Vec::new(),
        };
        for field in fields {
            definition.upsert_field(field);
        }
        definition
    }

    fn upsert_field(&mut self, field: FieldDefinition) {
        match self.fields.iter_mut().find(|f| f.name == field.name) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
    }

    /// Type identifier, e.g. `maltego.IPv4Address`.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-facing type name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Fields in document order.
    #[must_use]
    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// All entity types read from an archive, keyed by identifier.
///
/// Inserting a definition whose identifier is already present replaces the
/// earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityTypeCatalog {
    definitions: BTreeMap<String, EntityTypeDefinition>,
}

impl EntityTypeCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a definition, returning the one it replaced.
    pub fn insert(&mut self, definition: EntityTypeDefinition) -> Option<EntityTypeDefinition> {
        self.definitions
            .insert(definition.id().to_string(), definition)
    }

    /// Looks up a definition by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&EntityTypeDefinition> {
        self.definitions.get(id)
    }

    /// Number of entity types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns `true` if no entity types were read.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Total number of fields across all entity types.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.definitions.values().map(|d| d.fields().len()).sum()
    }

    /// Iterates definitions ordered by identifier.
    pub fn iter(&self) -> impl Iterator<Item = &EntityTypeDefinition> {
        self.definitions.values()
    }
}

impl<'a> IntoIterator for &'a EntityTypeCatalog {
    type Item = &'a EntityTypeDefinition;
    type IntoIter = std::collections::btree_map::Values<'a, String, EntityTypeDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.definitions.values()
    }
}
