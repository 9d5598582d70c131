// Decode a contacts page and re-encode each contact as a request document
// Usage: cargo run --example decode_page

use propwire_core::{DocumentConverter, Result, WireConvention};
use propwire_core::{ContactList, Document};
use serde_json::json;

fn main() -> Result<()> {
    let page = json!({
        "contacts": [
            {"vid": 1, "properties": {"email": {"value": "x@y.com"}, "firstname": {"value": "Ada"}}},
            {"vid": 2, "properties": {"email": {"value": "grace@navy.mil"}, "lifecyclestage": {"value": "lead"}}}
        ],
        "has-more": true,
        "vid-offset": 2
    });
    let doc: Document = serde_json::from_value(page)?;

    let converter = DocumentConverter::default();
    let list: ContactList = converter.from_list_document(&doc)?;
    println!(
        "decoded {} contacts, has more: {:?}, next offset: {:?}",
        list.contacts.len(),
        list.has_more,
        list.vid_offset
    );

    for contact in &list.contacts {
        let request = converter.to_document(contact, WireConvention::PropertyEnvelope)?;
        println!("{:?} -> {}", contact.vid, serde_json::Value::Object(request));
    }

    Ok(())
}
