//! Propwire Core - Document conversion engine for CRM API clients
//!
//! This crate converts between a typed entity model (contacts, companies,
//! deals) and the loosely structured documents a CRM REST API sends and
//! accepts across its two wire conventions.
//!
//! # Main Components
//!
//! - **Schema introspection**: entity types register their fields statically;
//!   descriptors resolve wire names and locate collection fields
//! - **Document conversion**: entity to property document, and single-entity,
//!   list-response and flat documents back to entities
//! - **Wire conventions**: legacy `{name, value}` envelopes and newer
//!   `{propertyName, value}` entries, chosen from the resource route
//! - **Error Handling**: structural errors using `thiserror`
//!
//! # Example
//!
//! ```
//! use propwire_core::{from_single_document, to_document, Contact, Result};
//! use serde_json::json;
//!
//! fn example() -> Result<()> {
//!     let response = json!({
//!         "vid": 42,
//!         "properties": {"email": {"value": "a@b.com"}}
//!     });
//!     let doc = response.as_object().cloned().unwrap_or_default();
//!     let contact: Contact = from_single_document(&doc)?;
//!     assert_eq!(contact.vid, Some(42));
//!
//!     let request = to_document(&contact, false)?;
//!     assert_eq!(request["properties"][0]["name"], "email");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod config;
pub mod convert;
pub mod document;
pub mod entities;
pub mod error;
pub mod schema;
pub mod value;
pub mod wire;

// Re-export main types for convenience
pub use config::ConverterConfig;
pub use convert::{from_list_document, from_single_document, to_document, DocumentConverter};
pub use document::Document;
pub use entities::{Company, CompanyList, Contact, ContactList, Deal, DealList};
pub use error::{DocumentError, Error, Result, SchemaError};
pub use schema::{
    describe, find_collection_field, Entity, EntityList, FieldDef, FieldDescriptor, FieldKind,
    SchemaDef, SchemaDescriptor,
};
pub use value::{CoercionError, WireValue};
pub use wire::WireConvention;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_entity_schemas_describe() {
        assert_eq!(describe::<Contact>().unwrap().name(), "contact");
        assert_eq!(describe::<Company>().unwrap().name(), "company");
        assert_eq!(describe::<Deal>().unwrap().name(), "deal");
        for list in [
            describe::<ContactList>().unwrap(),
            describe::<CompanyList>().unwrap(),
            describe::<DealList>().unwrap(),
        ] {
            assert!(find_collection_field(&list).is_ok());
        }
    }
}
