//! Entity schema registration and introspection
//!
//! Entity types describe themselves through [`Entity::schema`]: an ordered list
//! of fields, each with a kind, an optional wire name and an optional identity
//! marker. The introspector turns that registration into an immutable
//! [`SchemaDescriptor`], validated once and cached per type for the process
//! lifetime.
//!
//! Copyright (c) 2025 Propwire Team
//! Licensed under the Apache-2.0 license

pub mod cache;
pub mod descriptor;

pub use cache::describe;
pub use descriptor::{find_collection_field, FieldDescriptor, SchemaDescriptor};

use crate::value::CoercionError;
use serde::Serialize;
use serde_json::Value;

/// Value kind of a schema field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Integer,
    Decimal,
    Boolean,
    /// Epoch milliseconds on the wire, held at millisecond precision
    Timestamp,
    /// Arbitrary JSON, carried on the wire as its JSON text
    Json,
    /// Sequence of sub-entities of the named schema
    Collection { element: &'static str },
}

impl FieldKind {
    pub fn is_collection(&self) -> bool {
        matches!(self, FieldKind::Collection { .. })
    }
}

/// A single field in a schema registration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub wire_name: Option<&'static str>,
    pub kind: FieldKind,
    pub identity: bool,
}

impl FieldDef {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            wire_name: None,
            kind,
            identity: false,
        }
    }

    /// Serialize under a different key than the field name
    pub const fn wire(mut self, wire_name: &'static str) -> Self {
        self.wire_name = Some(wire_name);
        self
    }

    /// Mark as the identity field, populated from the document root
    pub const fn identity(mut self) -> Self {
        self.identity = true;
        self
    }
}

/// Static description of an entity type, in field declaration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDef {
    pub name: &'static str,
    pub fields: Vec<FieldDef>,
}

impl SchemaDef {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }
}

/// A typed record that can be converted to and from documents
///
/// Field access goes through the registered field names, which replaces
/// runtime reflection over the struct.
pub trait Entity: Default + 'static {
    /// Field registration; called once per type, the result is cached
    fn schema() -> SchemaDef;

    /// Current value of a field, `None` when absent
    fn read_field(&self, field: &str) -> Option<Value>;

    /// Store a raw document value into a field. Unknown names are ignored.
    fn write_field(&mut self, field: &str, value: &Value) -> Result<(), CoercionError>;

    /// API route of the resource, used to pick the wire convention
    fn route() -> Option<&'static str> {
        None
    }
}

/// A list-response container holding a collection of sub-entities
///
/// The container's schema must declare exactly one `Collection` field whose
/// element names `Item`'s schema.
pub trait EntityList: Entity {
    type Item: Entity;

    fn set_items(&mut self, items: Vec<Self::Item>);

    fn items(&self) -> &[Self::Item];
}
