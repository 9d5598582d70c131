//! Document converter
//!
//! Bidirectional mapping between generic documents and typed entities. The
//! outbound path emits property entries in the selected wire convention; the
//! inbound paths accept single-entity documents, list responses and flat
//! property bags.
//!
//! Structural keys (`properties` on a single entity, the collection key on a
//! list) are required. Everything else is optional: unknown keys, entries
//! without a value and unmatched envelope fields are skipped so that payloads
//! from newer server versions keep decoding.
//!
//! Copyright (c) 2025 Propwire Team
//! Licensed under the Apache-2.0 license

mod inbound;
mod outbound;

use crate::config::ConverterConfig;
use crate::document::Document;
use crate::error::{DocumentError, Result};
use crate::schema::{Entity, EntityList, FieldDescriptor};
use crate::wire::WireConvention;
use serde_json::Value;

/// Converts between documents and entities under a fixed configuration
///
/// The converter holds no per-call state and can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct DocumentConverter {
    config: ConverterConfig,
}

impl DocumentConverter {
    /// Create a converter, rejecting unusable configurations
    pub fn new(config: ConverterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Wire convention for an entity type, derived from its route
    pub fn convention_for<E: Entity>(&self) -> WireConvention {
        E::route()
            .map(|route| WireConvention::for_route(route, self.config.flat_route_min_version))
            .unwrap_or_default()
    }
}

/// Store a raw value into a field, naming the field on failure
fn assign<E: Entity>(
    entity: &mut E,
    schema: &str,
    field: &FieldDescriptor,
    raw: &Value,
) -> Result<()> {
    entity.write_field(field.name, raw).map_err(|err| {
        DocumentError::InvalidFieldValue {
            schema: schema.to_string(),
            field: field.name.to_string(),
            expected: err.expected.to_string(),
            found: err.found,
        }
        .into()
    })
}

/// Convert an entity to an outbound document using the default configuration
///
/// `uses_flat_wire_convention` selects `FlatNamed` over `PropertyEnvelope`.
pub fn to_document<E: Entity>(entity: &E, uses_flat_wire_convention: bool) -> Result<Document> {
    DocumentConverter::default()
        .to_document(entity, WireConvention::from_flag(uses_flat_wire_convention))
}

/// Convert a single-entity response using the default configuration
pub fn from_single_document<E: Entity>(doc: &Document) -> Result<E> {
    DocumentConverter::default().from_single_document(doc)
}

/// Convert a list response using the default configuration
pub fn from_list_document<C: EntityList>(doc: &Document) -> Result<C> {
    DocumentConverter::default().from_list_document(doc)
}
