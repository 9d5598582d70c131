//! Fuzzing target for single-entity and flat document decoding
//!
//! Arbitrary JSON objects must decode or fail with an error, never panic.
//! Whatever decodes must also encode.

#![no_main]

use libfuzzer_sys::fuzz_target;
use propwire_core::{from_single_document, to_document, Company, Contact, Deal, DocumentConverter};
use serde_json::Value;

fuzz_target!(|data: &[u8]| {
    let Ok(Value::Object(doc)) = serde_json::from_slice::<Value>(data) else {
        return;
    };

    if let Ok(contact) = from_single_document::<Contact>(&doc) {
        let _ = to_document(&contact, false);
    }
    if let Ok(company) = from_single_document::<Company>(&doc) {
        let _ = to_document(&company, true);
    }
    let _ = from_single_document::<Deal>(&doc);

    let converter = DocumentConverter::default();
    let _ = converter.from_flat_document::<Contact>(&doc);
    let _ = converter.from_flat_document::<Deal>(&doc);
});
