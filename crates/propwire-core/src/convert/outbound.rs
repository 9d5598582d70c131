//! Entity to document conversion

use super::DocumentConverter;
use crate::document::{stringify, Document};
use crate::error::Result;
use crate::schema::{describe, Entity, FieldDescriptor, SchemaDescriptor};
use crate::wire::WireConvention;
use serde_json::Value;

/// Mapped scalar fields with a present value, in declaration order
fn present_values<'a, E: Entity>(
    entity: &'a E,
    descriptor: &'a SchemaDescriptor,
) -> impl Iterator<Item = (&'a FieldDescriptor, Value)> + 'a {
    descriptor
        .fields()
        .iter()
        .filter(|field| !field.kind.is_collection())
        .filter_map(move |field| match entity.read_field(field.name) {
            None | Some(Value::Null) => None,
            Some(value) => Some((field, value)),
        })
}

impl DocumentConverter {
    /// Convert an entity into an outbound property document
    ///
    /// Produces `{"properties": [entry, ...]}` where each entry is
    /// `{"name": wire, "value": text}` or `{"propertyName": wire, "value": text}`
    /// depending on the convention. Absent values are skipped and the identity
    /// field is never emitted.
    pub fn to_document<E: Entity>(&self, entity: &E, convention: WireConvention) -> Result<Document> {
        let descriptor = describe::<E>()?;
        let name_key = match convention {
            WireConvention::PropertyEnvelope => &self.config.envelope_name_key,
            WireConvention::FlatNamed => &self.config.flat_name_key,
        };

        let entries: Vec<Value> = present_values(entity, &descriptor)
            .map(|(field, value)| {
                let mut entry = Document::new();
                entry.insert(name_key.clone(), Value::String(field.wire_name.to_string()));
                entry.insert(self.config.value_key.clone(), Value::String(stringify(&value)));
                Value::Object(entry)
            })
            .collect();

        log::debug!(
            "encoded {} of {} '{}' fields as {}",
            entries.len(),
            descriptor.fields().len(),
            descriptor.name(),
            convention
        );

        let mut doc = Document::new();
        doc.insert(self.config.properties_key.clone(), Value::Array(entries));
        Ok(doc)
    }

    /// Convert an entity using the convention its route calls for
    pub fn to_request_document<E: Entity>(&self, entity: &E) -> Result<Document> {
        self.to_document(entity, self.convention_for::<E>())
    }

    /// Convert an entity into a flat `{wire: text}` property bag
    pub fn to_property_bag<E: Entity>(&self, entity: &E) -> Result<Document> {
        let descriptor = describe::<E>()?;
        Ok(present_values(entity, &descriptor)
            .map(|(field, value)| (field.wire_name.to_string(), Value::String(stringify(&value))))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Company, Contact, ContactList};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn contact() -> Contact {
        Contact {
            vid: Some(42),
            email: Some("a@b.com".to_string()),
            first_name: Some("Ada".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_property_envelope_entries() {
        let doc = DocumentConverter::default()
            .to_document(&contact(), WireConvention::PropertyEnvelope)
            .unwrap();
        assert_eq!(
            Value::Object(doc),
            json!({"properties": [
                {"name": "email", "value": "a@b.com"},
                {"name": "firstname", "value": "Ada"},
            ]})
        );
    }

    #[test]
    fn test_flat_named_skips_absent_values() {
        let entity = Contact {
            email: Some("a@b.com".to_string()),
            phone: None,
            ..Default::default()
        };
        let doc = DocumentConverter::default()
            .to_document(&entity, WireConvention::FlatNamed)
            .unwrap();
        assert_eq!(
            doc["properties"],
            json!([{"propertyName": "email", "value": "a@b.com"}])
        );
    }

    #[test]
    fn test_values_are_stringified() {
        let company = Company {
            name: Some("Acme".to_string()),
            number_of_employees: Some(250),
            annual_revenue: Some(1250000.5),
            is_public: Some(false),
            ..Default::default()
        };
        let doc = DocumentConverter::default()
            .to_document(&company, WireConvention::FlatNamed)
            .unwrap();
        assert_eq!(
            doc["properties"],
            json!([
                {"propertyName": "name", "value": "Acme"},
                {"propertyName": "numberofemployees", "value": "250"},
                {"propertyName": "annualrevenue", "value": "1250000.5"},
                {"propertyName": "is_public", "value": "false"},
            ])
        );
    }

    #[test]
    fn test_empty_entity_yields_empty_entry_list() {
        let doc = DocumentConverter::default()
            .to_document(&Contact::default(), WireConvention::PropertyEnvelope)
            .unwrap();
        assert_eq!(Value::Object(doc), json!({"properties": []}));
    }

    #[test]
    fn test_collection_fields_are_not_emitted() {
        let list = ContactList {
            contacts: vec![contact()],
            has_more: Some(true),
            vid_offset: None,
        };
        let doc = DocumentConverter::default()
            .to_document(&list, WireConvention::FlatNamed)
            .unwrap();
        assert_eq!(
            doc["properties"],
            json!([{"propertyName": "has-more", "value": "true"}])
        );
    }

    #[test]
    fn test_request_document_uses_route_convention() {
        let converter = DocumentConverter::default();
        let doc = converter.to_request_document(&contact()).unwrap();
        assert!(doc["properties"][0].get("name").is_some());

        let company = Company {
            domain: Some("acme.io".to_string()),
            ..Default::default()
        };
        let doc = converter.to_request_document(&company).unwrap();
        assert_eq!(doc["properties"][0]["propertyName"], "domain");
    }

    #[test]
    fn test_property_bag() {
        let bag = DocumentConverter::default().to_property_bag(&contact()).unwrap();
        assert_eq!(
            Value::Object(bag),
            json!({"email": "a@b.com", "firstname": "Ada"})
        );
    }

    #[test]
    fn test_custom_keys() {
        let converter = DocumentConverter::new(crate::ConverterConfig {
            properties_key: "props".to_string(),
            envelope_name_key: "property".to_string(),
            ..Default::default()
        })
        .unwrap();
        let doc = converter
            .to_document(&contact(), WireConvention::PropertyEnvelope)
            .unwrap();
        assert_eq!(doc["props"][0], json!({"property": "email", "value": "a@b.com"}));
    }
}
