//! Decode command handler

use super::utils::{converter, read_document, unmatched_keys};
use crate::cli::{DecodeArgs, DocumentShape, EntityKind};
use crate::config::Config;
use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use propwire_core::{
    describe, Company, CompanyList, Contact, ContactList, Deal, DealList, Document,
    DocumentConverter, Entity, EntityList,
};
use serde::Serialize;
use serde_json::Value;

/// Handle the decode command
pub fn handle_decode(args: DecodeArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let doc = read_document(&args.file)?;
    let converter = converter(config)?;
    let shape = args.shape();

    output.info(&format!(
        "Decoding {} as {:?} ({:?})",
        args.file.display(),
        args.entity,
        shape
    ))?;

    let timer = Timer::with_details("decode", &args.file.display().to_string());
    timer.in_scope(|| match (args.entity, shape) {
        (EntityKind::Contact, DocumentShape::List) => {
            decode_list::<ContactList>(&converter, &doc, output)
        }
        (EntityKind::Company, DocumentShape::List) => {
            decode_list::<CompanyList>(&converter, &doc, output)
        }
        (EntityKind::Deal, DocumentShape::List) => decode_list::<DealList>(&converter, &doc, output),
        (EntityKind::Contact, shape) => decode_one::<Contact>(&converter, &doc, shape, output),
        (EntityKind::Company, shape) => decode_one::<Company>(&converter, &doc, shape, output),
        (EntityKind::Deal, shape) => decode_one::<Deal>(&converter, &doc, shape, output),
    })
}

fn decode_one<E: Entity + Serialize>(
    converter: &DocumentConverter,
    doc: &Document,
    shape: DocumentShape,
    output: &mut OutputWriter,
) -> Result<()> {
    let entity: E = match shape {
        DocumentShape::Flat => {
            warn_unmatched::<E>(doc, true, output)?;
            converter.from_flat_document(doc)?
        }
        _ => {
            // Missing properties surface as the converter's error below
            if let Some(Value::Object(properties)) = doc.get(&converter.config().properties_key) {
                warn_unmatched::<E>(properties, false, output)?;
            }
            converter.from_single_document(doc)?
        }
    };

    output.entity(&entity)
}

fn decode_list<C>(converter: &DocumentConverter, doc: &Document, output: &mut OutputWriter) -> Result<()>
where
    C: EntityList + Serialize,
    C::Item: Serialize,
{
    let list: C = converter.from_list_document(doc)?;
    let item_name = describe::<C::Item>()?.name();

    tracing::info!(items = list.items().len(), entity = item_name, "Decoded list response");
    output.success(&format!("✓ Decoded {} {} record(s)", list.items().len(), item_name))?;
    output.entity_list(&list)
}

fn warn_unmatched<E: Entity>(map: &Document, at_root: bool, output: &mut OutputWriter) -> Result<()> {
    for key in unmatched_keys::<E>(map, at_root)? {
        output.warning(&format!("Ignoring unknown property '{}'", key))?;
    }
    Ok(())
}
