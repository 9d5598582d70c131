//! Encode command handler

use super::utils::{converter, read_document, unmatched_keys};
use crate::cli::{ConventionChoice, EncodeArgs, EntityKind};
use crate::config::Config;
use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use propwire_core::{Company, Contact, Deal, Document, DocumentConverter, Entity, WireConvention};
use std::fs;

/// Handle the encode command
///
/// The input is a flat property bag keyed by wire name. It is decoded into
/// the entity first so that values are coerced and unknown keys dropped the
/// same way an inbound document would be.
pub fn handle_encode(args: EncodeArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let bag = read_document(&args.file)?;
    let converter = converter(config)?;

    let timer = Timer::with_details("encode", &args.file.display().to_string());
    let request = timer.in_scope(|| match args.entity {
        EntityKind::Contact => encode_as::<Contact>(&converter, &bag, args.convention, output),
        EntityKind::Company => encode_as::<Company>(&converter, &bag, args.convention, output),
        EntityKind::Deal => encode_as::<Deal>(&converter, &bag, args.convention, output),
    })?;

    match &args.save_to {
        Some(path) => {
            fs::write(path, serde_json::to_string_pretty(&request)?)?;
            output.success(&format!("✓ Request document saved to {}", path.display()))
        }
        None => output.data(&request),
    }
}

fn encode_as<E: Entity>(
    converter: &DocumentConverter,
    bag: &Document,
    choice: ConventionChoice,
    output: &mut OutputWriter,
) -> Result<Document> {
    for key in unmatched_keys::<E>(bag, true)? {
        output.warning(&format!("Ignoring unknown property '{}'", key))?;
    }

    let entity: E = converter.from_flat_document(bag)?;
    let convention = match choice {
        ConventionChoice::Auto => converter.convention_for::<E>(),
        ConventionChoice::Envelope => WireConvention::PropertyEnvelope,
        ConventionChoice::Flat => WireConvention::FlatNamed,
    };

    tracing::info!(convention = %convention, "Encoding request document");
    Ok(converter.to_document(&entity, convention)?)
}
