//! Document to entity conversion

use super::{assign, DocumentConverter};
use crate::document::{get_ignore_case, shape_name, Document};
use crate::error::{DocumentError, Result, SchemaError};
use crate::schema::{describe, find_collection_field, Entity, EntityList, FieldKind, SchemaDescriptor};
use serde_json::Value;

impl DocumentConverter {
    /// Convert a single-entity response into a fresh entity
    ///
    /// The document must carry a `properties` map. The identity field is read
    /// from the document root (`vid` for contacts); every other field from the
    /// `value` of its property entry.
    pub fn from_single_document<E: Entity>(&self, doc: &Document) -> Result<E> {
        let descriptor = describe::<E>()?;
        self.decode_entity(doc, &descriptor)
    }

    /// Convert a list response into its container
    ///
    /// The collection key is taken from the container's collection field. Other
    /// top-level keys are envelope metadata (paging cursors and the like) and
    /// are assigned raw onto the container's own fields.
    pub fn from_list_document<C: EntityList>(&self, doc: &Document) -> Result<C> {
        let descriptor = describe::<C>()?;
        let collection = find_collection_field(&descriptor)?;
        let item_descriptor = describe::<C::Item>()?;

        if let FieldKind::Collection { element } = collection.kind {
            if element != item_descriptor.name() {
                return Err(SchemaError::uninspectable(
                    descriptor.name(),
                    format!(
                        "collection '{}' declares element '{}' but holds '{}'",
                        collection.name,
                        element,
                        item_descriptor.name()
                    ),
                )
                .into());
            }
        }

        let (list_key, list_value) =
            get_ignore_case(doc, collection.wire_name).ok_or_else(|| DocumentError::MissingListKey {
                schema: descriptor.name().to_string(),
                key: collection.wire_name.to_string(),
            })?;

        let elements = match list_value {
            Value::Array(elements) => elements,
            other => {
                return Err(DocumentError::ListNotSequence {
                    schema: descriptor.name().to_string(),
                    key: list_key.to_string(),
                    found: shape_name(other).to_string(),
                }
                .into())
            }
        };

        let mut items = Vec::with_capacity(elements.len());
        for (index, element) in elements.iter().enumerate() {
            let Value::Object(element) = element else {
                return Err(DocumentError::InvalidListElement {
                    key: list_key.to_string(),
                    index,
                    found: shape_name(element).to_string(),
                }
                .into());
            };
            items.push(self.decode_entity::<C::Item>(element, &item_descriptor)?);
        }

        let mut container = C::default();
        container.set_items(items);

        for (key, raw) in doc {
            if key == list_key {
                continue;
            }
            match descriptor.resolve_by_wire_name(key) {
                Some(field) if !field.kind.is_collection() => {
                    assign(&mut container, descriptor.name(), field, raw)?;
                }
                _ => log::debug!("ignoring unknown '{}' envelope key '{}'", descriptor.name(), key),
            }
        }

        log::debug!(
            "decoded {} '{}' items from '{}'",
            container.items().len(),
            item_descriptor.name(),
            list_key
        );
        Ok(container)
    }

    /// Convert a flat property bag (`{"email": "..", "vid": 1}`) into an entity
    ///
    /// Keys map straight onto fields; there is no `properties` envelope.
    pub fn from_flat_document<E: Entity>(&self, doc: &Document) -> Result<E> {
        let descriptor = describe::<E>()?;
        let mut entity = E::default();

        for (key, raw) in doc {
            let field = descriptor
                .identity()
                .filter(|identity| identity.matches_wire_name(key))
                .or_else(|| descriptor.resolve_by_wire_name(key))
                .filter(|field| !field.kind.is_collection());
            match field {
                Some(field) => assign(&mut entity, descriptor.name(), field, raw)?,
                None => log::debug!("ignoring unknown '{}' key '{}'", descriptor.name(), key),
            }
        }

        Ok(entity)
    }

    /// Shared single-entity decoding for standalone and list elements
    fn decode_entity<E: Entity>(&self, doc: &Document, descriptor: &SchemaDescriptor) -> Result<E> {
        let properties = match doc.get(&self.config.properties_key) {
            Some(Value::Object(properties)) => properties,
            other => {
                return Err(DocumentError::MissingProperties {
                    schema: descriptor.name().to_string(),
                    key: self.config.properties_key.clone(),
                    found: other.map_or("nothing", shape_name).to_string(),
                }
                .into())
            }
        };

        let mut entity = E::default();

        if let Some(identity) = descriptor.identity() {
            if let Some((_, raw)) = get_ignore_case(doc, identity.wire_name) {
                assign(&mut entity, descriptor.name(), identity, raw)?;
            }
        }

        for (key, entry) in properties {
            let Some(raw) = entry.as_object().and_then(|e| e.get(&self.config.value_key)) else {
                log::debug!("skipping '{}' property '{}' without a value", descriptor.name(), key);
                continue;
            };
            match descriptor.resolve_by_wire_name(key) {
                Some(field) if !field.kind.is_collection() => {
                    assign(&mut entity, descriptor.name(), field, raw)?;
                }
                _ => log::debug!("ignoring unknown '{}' property '{}'", descriptor.name(), key),
            }
        }

        Ok(entity)
    }
}
