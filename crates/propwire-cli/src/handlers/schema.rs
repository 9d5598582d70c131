//! Schema command handler

use super::utils::converter;
use crate::cli::{EntityKind, SchemaArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output::OutputWriter;
use propwire_core::{
    describe, find_collection_field, Company, CompanyList, Contact, ContactList, Deal, DealList,
    DocumentConverter, Entity,
};

/// Handle the schema command
pub fn handle_schema(args: SchemaArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let converter = converter(config)?;

    match (args.entity, args.list) {
        (EntityKind::Contact, false) => show::<Contact>(&converter, false, output),
        (EntityKind::Contact, true) => show::<ContactList>(&converter, true, output),
        (EntityKind::Company, false) => show::<Company>(&converter, false, output),
        (EntityKind::Company, true) => show::<CompanyList>(&converter, true, output),
        (EntityKind::Deal, false) => show::<Deal>(&converter, false, output),
        (EntityKind::Deal, true) => show::<DealList>(&converter, true, output),
    }
}

fn show<E: Entity>(converter: &DocumentConverter, list: bool, output: &mut OutputWriter) -> Result<()> {
    let descriptor = describe::<E>()?;
    output.schema(&descriptor)?;

    if list {
        let collection = find_collection_field(&descriptor)?;
        output.info(&format!("Items are read from the '{}' key", collection.wire_name))?;
    }

    match E::route() {
        Some(route) => output.info(&format!(
            "Route {} uses the {} convention",
            route,
            converter.convention_for::<E>()
        )),
        None => Ok(()),
    }
}
