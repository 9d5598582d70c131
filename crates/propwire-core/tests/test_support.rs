//! Shared test support utilities for integration tests

#![allow(dead_code)]

use propwire_core::{
    CoercionError, Company, Contact, Deal, Document, DocumentConverter, Entity, FieldDef,
    FieldKind, SchemaDef, WireConvention, WireValue,
};
use serde_json::{json, Map, Value};

/// Unwrap a `json!` object literal into a document
pub fn doc(value: Value) -> Document {
    match value {
        Value::Object(map) => map,
        other => panic!("test document must be an object, got {}", other),
    }
}

/// A contact with every field populated
pub fn full_contact() -> Contact {
    serde_json::from_value(json!({
        "vid": 3234574,
        "email": "ada@example.com",
        "first_name": "Ada",
        "last_name": "Lovelace",
        "phone": "+44 20 7946 0000",
        "company": "Analytical Engines",
        "lifecycle_stage": "customer",
        "created_at": "2023-11-14T22:13:20Z"
    }))
    .expect("valid contact fixture")
}

/// A company with a mix of present and absent fields
pub fn sparse_company() -> Company {
    Company {
        company_id: Some(10444744),
        name: Some("Acme".to_string()),
        number_of_employees: Some(250),
        annual_revenue: Some(1250000.5),
        is_public: Some(true),
        ..Default::default()
    }
}

pub fn open_deal() -> Deal {
    Deal {
        deal_id: Some(1151426),
        deal_name: Some("Tim's Newer Deal".to_string()),
        amount: Some(60000.0),
        deal_stage: Some("appointmentscheduled".to_string()),
        pipeline: Some("default".to_string()),
        close_date: None,
    }
}

/// An engagement note whose `metadata` property holds arbitrary JSON
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Note {
    pub id: Option<i64>,
    pub body: Option<String>,
    pub metadata: Option<Value>,
}

impl Entity for Note {
    fn schema() -> SchemaDef {
        SchemaDef::new("note")
            .field(FieldDef::new("id", FieldKind::Integer).wire("engagementId").identity())
            .field(FieldDef::new("body", FieldKind::Text))
            .field(FieldDef::new("metadata", FieldKind::Json))
    }

    fn read_field(&self, field: &str) -> Option<Value> {
        match field {
            "id" => self.id.to_wire(),
            "body" => self.body.to_wire(),
            "metadata" => self.metadata.to_wire(),
            _ => None,
        }
    }

    fn write_field(&mut self, field: &str, value: &Value) -> Result<(), CoercionError> {
        match field {
            "id" => self.id = WireValue::from_wire(value)?,
            "body" => self.body = WireValue::from_wire(value)?,
            "metadata" => self.metadata = WireValue::from_wire(value)?,
            _ => {}
        }
        Ok(())
    }
}

/// Rebuild the inbound single-entity shape from an outbound document
///
/// Outbound documents list `{name|propertyName, value}` entries under
/// `properties`; inbound documents key `properties` by wire name with the
/// value wrapped as `{"value": ..}` and carry the identity at the root. The
/// two shapes are asymmetric, so round trips go through this adapter.
pub fn as_inbound<E: Entity>(
    outbound: &Document,
    convention: WireConvention,
    entity: &E,
) -> Document {
    let converter = DocumentConverter::default();
    let config = converter.config();
    let name_key = match convention {
        WireConvention::PropertyEnvelope => &config.envelope_name_key,
        WireConvention::FlatNamed => &config.flat_name_key,
    };

    let mut properties = Map::new();
    for entry in outbound[&config.properties_key]
        .as_array()
        .expect("outbound properties are a list")
    {
        let name = entry[name_key.as_str()]
            .as_str()
            .expect("entry carries a name")
            .to_string();
        properties.insert(name, json!({"value": entry[config.value_key.as_str()].clone()}));
    }

    let mut inbound = Map::new();
    let descriptor = propwire_core::describe::<E>().expect("describable entity");
    if let Some(identity) = descriptor.identity() {
        if let Some(id) = entity.read_field(identity.name) {
            inbound.insert(identity.wire_name.to_string(), id);
        }
    }
    inbound.insert(config.properties_key.clone(), Value::Object(properties));
    inbound
}

/// The contacts page from the public API documentation, trimmed
pub fn contacts_page() -> Document {
    doc(json!({
        "contacts": [
            {
                "addedAt": 1390574181854i64,
                "vid": 204727,
                "canonical-vid": 204727,
                "merged-vids": [],
                "portal-id": 62515,
                "is-contact": true,
                "properties": {
                    "firstname": {"value": "Bob"},
                    "lastmodifieddate": {"value": "1483461406481"},
                    "company": {"value": ""},
                    "lastname": {"value": "Record"}
                },
                "form-submissions": [],
                "identity-profiles": [
                    {"vid": 204727, "identities": [{"type": "EMAIL", "value": "bob@example.com"}]}
                ]
            },
            {
                "addedAt": 1392643921079i64,
                "vid": 207303,
                "properties": {
                    "firstname": {"value": "Ff_FirstName_0"},
                    "lastname": {"value": "Ff_LastName_0"},
                    "email": {"value": "ff0@example.com"},
                    "createdate": {"value": "1392643921079"}
                }
            }
        ],
        "has-more": false,
        "vid-offset": 207303
    }))
}
