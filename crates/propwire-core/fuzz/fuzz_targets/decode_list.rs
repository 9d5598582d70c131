//! Fuzzing target for list-response decoding
//!
//! Wraps the fuzzer input under each collection key so that element
//! handling is reached even when the input is not a full page.

#![no_main]

use libfuzzer_sys::fuzz_target;
use propwire_core::{from_list_document, CompanyList, ContactList, DealList, Document};
use serde_json::Value;

fuzz_target!(|data: &[u8]| {
    let Ok(value) = serde_json::from_slice::<Value>(data) else {
        return;
    };

    if let Value::Object(doc) = &value {
        let _ = from_list_document::<ContactList>(doc);
    }

    for key in ["contacts", "companies", "deals"] {
        let mut page = Document::new();
        page.insert(key.to_string(), value.clone());
        page.insert("has-more".to_string(), Value::Bool(false));

        let _ = from_list_document::<ContactList>(&page);
        let _ = from_list_document::<CompanyList>(&page);
        let _ = from_list_document::<DealList>(&page);
    }
});
