//! Validated, immutable schema descriptors
//!
//! Copyright (c) 2025 Propwire Team
//! Licensed under the Apache-2.0 license

use super::{FieldDef, FieldKind, SchemaDef};
use crate::error::SchemaError;
use serde::Serialize;

/// A mapped field with its resolved wire name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub wire_name: &'static str,
    pub kind: FieldKind,
    /// Zero-based declaration order within the schema
    pub position: usize,
}

impl FieldDescriptor {
    fn from_def(def: &FieldDef, position: usize) -> Self {
        Self {
            name: def.name,
            wire_name: def.wire_name.unwrap_or(def.name),
            kind: def.kind,
            position,
        }
    }

    /// Case-insensitive wire name comparison
    pub fn matches_wire_name(&self, wire_name: &str) -> bool {
        self.wire_name.eq_ignore_ascii_case(wire_name)
    }
}

/// Shape contract of an entity type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaDescriptor {
    name: &'static str,
    fields: Vec<FieldDescriptor>,
    identity: Option<FieldDescriptor>,
}

impl SchemaDescriptor {
    /// Validate a registration and resolve its wire names
    pub fn build(def: SchemaDef) -> Result<Self, SchemaError> {
        let schema = def.name;
        let mut fields = Vec::with_capacity(def.fields.len());
        let mut identity: Option<FieldDescriptor> = None;

        for (position, field) in def.fields.iter().enumerate() {
            if field.name.is_empty() || field.wire_name.is_some_and(str::is_empty) {
                return Err(SchemaError::uninspectable(
                    schema,
                    format!("field {} has an empty name", position),
                ));
            }

            let descriptor = FieldDescriptor::from_def(field, position);
            if let Some(clash) = fields
                .iter()
                .chain(identity.iter())
                .find(|f| f.matches_wire_name(descriptor.wire_name))
            {
                return Err(SchemaError::uninspectable(
                    schema,
                    format!(
                        "fields '{}' and '{}' share wire name '{}'",
                        clash.name, descriptor.name, descriptor.wire_name
                    ),
                ));
            }

            if field.identity {
                if let Some(existing) = &identity {
                    return Err(SchemaError::uninspectable(
                        schema,
                        format!(
                            "both '{}' and '{}' are marked as identity",
                            existing.name, descriptor.name
                        ),
                    ));
                }
                identity = Some(descriptor);
                continue;
            }

            fields.push(descriptor);
        }

        if fields.is_empty() {
            return Err(SchemaError::uninspectable(schema, "no mapped fields"));
        }

        Ok(Self {
            name: schema,
            fields,
            identity,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Mapped fields in declaration order, identity excluded
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn identity(&self) -> Option<&FieldDescriptor> {
        self.identity.as_ref()
    }

    /// Case-insensitive lookup from a wire key to a mapped field
    ///
    /// Returns `None` for unmatched keys; the server may send fields the
    /// client model does not track.
    pub fn resolve_by_wire_name(&self, wire_name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.matches_wire_name(wire_name))
    }
}

/// Locate the single collection field of a container schema
///
/// More than one candidate is an authoring error, never a silent first match.
pub fn find_collection_field(descriptor: &SchemaDescriptor) -> Result<&FieldDescriptor, SchemaError> {
    let mut candidates = descriptor.fields().iter().filter(|f| f.kind.is_collection());
    let first = candidates.next().ok_or_else(|| SchemaError::NoCollectionField {
        schema: descriptor.name().to_string(),
    })?;

    let rest: Vec<&FieldDescriptor> = candidates.collect();
    if !rest.is_empty() {
        let fields = std::iter::once(first)
            .chain(rest)
            .map(|f| f.name.to_string())
            .collect();
        return Err(SchemaError::AmbiguousCollectionField {
            schema: descriptor.name().to_string(),
            fields,
        });
    }

    Ok(first)
}
