use crate::schema::{Entity, EntityList, FieldDef, FieldKind, SchemaDef};
use crate::value::{CoercionError, WireValue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A contact record (`/contacts/v1`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub vid: Option<i64>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub lifecycle_stage: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Entity for Contact {
    fn schema() -> SchemaDef {
        SchemaDef::new("contact")
            .field(FieldDef::new("vid", FieldKind::Integer).identity())
            .field(FieldDef::new("email", FieldKind::Text))
            .field(FieldDef::new("first_name", FieldKind::Text).wire("firstname"))
            .field(FieldDef::new("last_name", FieldKind::Text).wire("lastname"))
            .field(FieldDef::new("phone", FieldKind::Text))
            .field(FieldDef::new("company", FieldKind::Text))
            .field(FieldDef::new("lifecycle_stage", FieldKind::Text).wire("lifecyclestage"))
            .field(FieldDef::new("created_at", FieldKind::Timestamp).wire("createdate"))
    }

    fn read_field(&self, field: &str) -> Option<Value> {
        match field {
            "vid" => self.vid.to_wire(),
            "email" => self.email.to_wire(),
            "first_name" => self.first_name.to_wire(),
            "last_name" => self.last_name.to_wire(),
            "phone" => self.phone.to_wire(),
            "company" => self.company.to_wire(),
            "lifecycle_stage" => self.lifecycle_stage.to_wire(),
            "created_at" => self.created_at.to_wire(),
            _ => None,
        }
    }

    fn write_field(&mut self, field: &str, value: &Value) -> Result<(), CoercionError> {
        match field {
            "vid" => self.vid = WireValue::from_wire(value)?,
            "email" => self.email = WireValue::from_wire(value)?,
            "first_name" => self.first_name = WireValue::from_wire(value)?,
            "last_name" => self.last_name = WireValue::from_wire(value)?,
            "phone" => self.phone = WireValue::from_wire(value)?,
            "company" => self.company = WireValue::from_wire(value)?,
            "lifecycle_stage" => self.lifecycle_stage = WireValue::from_wire(value)?,
            "created_at" => self.created_at = WireValue::from_wire(value)?,
            _ => {}
        }
        Ok(())
    }

    fn route() -> Option<&'static str> {
        Some("/contacts/v1/contact")
    }
}

/// Page of contacts as returned by `/contacts/v1/lists/all/contacts/all`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactList {
    pub contacts: Vec<Contact>,
    pub has_more: Option<bool>,
    pub vid_offset: Option<i64>,
}

impl Entity for ContactList {
    fn schema() -> SchemaDef {
        SchemaDef::new("contact_list")
            .field(FieldDef::new("contacts", FieldKind::Collection { element: "contact" }))
            .field(FieldDef::new("has_more", FieldKind::Boolean).wire("has-more"))
            .field(FieldDef::new("vid_offset", FieldKind::Integer).wire("vid-offset"))
    }

    fn read_field(&self, field: &str) -> Option<Value> {
        match field {
            "has_more" => self.has_more.to_wire(),
            "vid_offset" => self.vid_offset.to_wire(),
            _ => None,
        }
    }

    fn write_field(&mut self, field: &str, value: &Value) -> Result<(), CoercionError> {
        match field {
            "has_more" => self.has_more = WireValue::from_wire(value)?,
            "vid_offset" => self.vid_offset = WireValue::from_wire(value)?,
            _ => {}
        }
        Ok(())
    }

    fn route() -> Option<&'static str> {
        Some("/contacts/v1/lists/all/contacts/all")
    }
}

impl EntityList for ContactList {
    type Item = Contact;

    fn set_items(&mut self, items: Vec<Contact>) {
        self.contacts = items;
    }

    fn items(&self) -> &[Contact] {
        &self.contacts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_read_and_write_by_field_name() {
        let mut contact = Contact::default();
        contact.write_field("first_name", &json!("Ada")).unwrap();
        contact.write_field("vid", &json!("12")).unwrap();
        contact.write_field("nickname", &json!("ignored")).unwrap();

        assert_eq!(contact.read_field("first_name"), Some(json!("Ada")));
        assert_eq!(contact.read_field("vid"), Some(json!(12)));
        assert_eq!(contact.read_field("phone"), None);
        assert_eq!(contact.read_field("nickname"), None);
    }

    #[test]
    fn test_write_rejects_wrong_type() {
        let mut contact = Contact::default();
        assert!(contact.write_field("created_at", &json!("last tuesday")).is_err());
        assert_eq!(contact.created_at, None);
    }

    #[test]
    fn test_serde_accepts_partial_records() {
        let contact: Contact = serde_json::from_value(json!({"email": "a@b.com"})).unwrap();
        assert_eq!(contact.email.as_deref(), Some("a@b.com"));
        assert_eq!(contact.vid, None);
    }
}
