//! Property-based tests for the conversion engine
//!
//! These tests verify invariants that should hold for all entities and
//! documents the converter accepts.

mod test_support;

use proptest::prelude::*;
use propwire_core::{
    from_list_document, from_single_document, Company, Contact, ContactList, DocumentConverter,
    DocumentError, Error, WireConvention,
};
use serde_json::{json, Map, Value};

/// Strategy for generating wire conventions
fn convention_strategy() -> impl Strategy<Value = WireConvention> {
    prop_oneof![
        Just(WireConvention::PropertyEnvelope),
        Just(WireConvention::FlatNamed),
    ]
}

/// Strategy for generating contacts with arbitrary absent fields
fn contact_strategy() -> impl Strategy<Value = Contact> {
    (
        proptest::option::of(1i64..=i64::from(u32::MAX)), // vid
        proptest::option::of("[a-z0-9.]{1,20}@[a-z]{1,10}\\.com"), // email
        proptest::option::of("[A-Za-z '-]{1,30}"), // first_name
        proptest::option::of("[A-Za-z '-]{1,30}"), // last_name
        proptest::option::of("[0-9+ ()-]{3,20}"), // phone
        proptest::option::of(0i64..=4_102_444_800_000), // created_at millis
    )
        .prop_map(|(vid, email, first_name, last_name, phone, created)| Contact {
            vid,
            email,
            first_name,
            last_name,
            phone,
            created_at: created.and_then(|ms| chrono::DateTime::from_timestamp_millis(ms)),
            ..Default::default()
        })
}

/// Strategy for generating companies, including non-text fields
fn company_strategy() -> impl Strategy<Value = Company> {
    (
        proptest::option::of(1i64..=1_000_000_000), // company_id
        proptest::option::of("[A-Za-z0-9 &]{1,40}"), // name
        proptest::option::of(0i64..=1_000_000), // number_of_employees
        proptest::option::of(-1.0e12f64..1.0e12), // annual_revenue
        proptest::option::of(any::<bool>()), // is_public
    )
        .prop_map(|(company_id, name, number_of_employees, annual_revenue, is_public)| {
            Company {
                company_id,
                name,
                number_of_employees,
                annual_revenue,
                is_public,
                ..Default::default()
            }
        })
}

/// Strategy for keys that no entity in the model declares
fn unknown_key_strategy() -> impl Strategy<Value = String> {
    "hs_[a-z_]{1,20}"
}

proptest! {
    #[test]
    fn prop_contact_round_trips(contact in contact_strategy(), convention in convention_strategy()) {
        let outbound = DocumentConverter::default().to_document(&contact, convention).unwrap();
        let inbound = test_support::as_inbound(&outbound, convention, &contact);
        let decoded: Contact = from_single_document(&inbound).unwrap();
        prop_assert_eq!(decoded, contact);
    }

    #[test]
    fn prop_company_round_trips(company in company_strategy(), convention in convention_strategy()) {
        let outbound = DocumentConverter::default().to_document(&company, convention).unwrap();
        let inbound = test_support::as_inbound(&outbound, convention, &company);
        let decoded: Company = from_single_document(&inbound).unwrap();
        prop_assert_eq!(decoded, company);
    }

    #[test]
    fn prop_outbound_entries_are_strings(contact in contact_strategy(), convention in convention_strategy()) {
        let outbound = DocumentConverter::default().to_document(&contact, convention).unwrap();
        for entry in outbound["properties"].as_array().unwrap() {
            prop_assert!(entry["value"].is_string());
            prop_assert_eq!(entry.as_object().unwrap().len(), 2);
        }
    }

    #[test]
    fn prop_missing_properties_always_fails(
        vid in any::<i64>(),
        extra in proptest::collection::hash_map("[a-z]{1,10}", any::<i32>(), 0..5),
    ) {
        let mut document = Map::new();
        document.insert("vid".to_string(), json!(vid));
        for (key, value) in extra {
            if key != "properties" {
                document.insert(key, json!(value));
            }
        }
        let result = from_single_document::<Contact>(&document);
        prop_assert!(
            matches!(result, Err(Error::Document(DocumentError::MissingProperties { .. }))),
            "expected MissingProperties"
        );
    }

    #[test]
    fn prop_missing_list_key_always_fails(key in "[a-z-]{1,12}", has_more in any::<bool>()) {
        prop_assume!(!key.eq_ignore_ascii_case("contacts"));
        let mut document = Map::new();
        document.insert(key, Value::Array(vec![]));
        document.insert("has-more".to_string(), json!(has_more));
        let result = from_list_document::<ContactList>(&document);
        prop_assert!(
            matches!(result, Err(Error::Document(DocumentError::MissingListKey { .. }))),
            "expected MissingListKey"
        );
    }

    #[test]
    fn prop_unknown_properties_are_ignored(
        contact in contact_strategy(),
        unknown in proptest::collection::vec((unknown_key_strategy(), "[a-z]{0,10}"), 0..6),
    ) {
        let outbound = DocumentConverter::default()
            .to_document(&contact, WireConvention::PropertyEnvelope)
            .unwrap();
        let mut inbound = test_support::as_inbound(&outbound, WireConvention::PropertyEnvelope, &contact);
        let properties = inbound.get_mut("properties").and_then(Value::as_object_mut).unwrap();
        for (key, value) in unknown {
            properties.insert(key, json!({"value": value}));
        }
        let decoded: Contact = from_single_document(&inbound).unwrap();
        prop_assert_eq!(decoded, contact);
    }

    #[test]
    fn prop_decoding_is_idempotent(contact in contact_strategy()) {
        let outbound = DocumentConverter::default()
            .to_document(&contact, WireConvention::FlatNamed)
            .unwrap();
        let inbound = test_support::as_inbound(&outbound, WireConvention::FlatNamed, &contact);
        let first: Contact = from_single_document(&inbound).unwrap();
        let second: Contact = from_single_document(&inbound).unwrap();
        prop_assert_eq!(first, second);
    }
}
