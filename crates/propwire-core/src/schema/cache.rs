//! Process-wide descriptor cache
//!
//! Schemas are fixed at build time, so entries are never invalidated. Two
//! threads describing the same type for the first time may both build a
//! descriptor; the first one stored wins and both return it.

use super::{Entity, SchemaDescriptor};
use crate::error::SchemaError;
use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

type DescriptorMap = HashMap<TypeId, Arc<SchemaDescriptor>>;

static DESCRIPTORS: OnceLock<RwLock<DescriptorMap>> = OnceLock::new();

fn descriptors() -> &'static RwLock<DescriptorMap> {
    DESCRIPTORS.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Describe an entity type, building and caching its descriptor on first use
///
/// Failures are not cached; a malformed schema fails on every call.
pub fn describe<E: Entity>() -> Result<Arc<SchemaDescriptor>, SchemaError> {
    let type_id = TypeId::of::<E>();

    let cached = descriptors()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&type_id)
        .cloned();
    if let Some(descriptor) = cached {
        log::trace!("schema descriptor cache hit for '{}'", descriptor.name());
        return Ok(descriptor);
    }

    let built = Arc::new(SchemaDescriptor::build(E::schema())?);
    log::trace!(
        "built schema descriptor for '{}' ({} fields)",
        built.name(),
        built.fields().len()
    );

    let mut map = descriptors().write().unwrap_or_else(PoisonError::into_inner);
    Ok(Arc::clone(map.entry(type_id).or_insert(built)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldDef, FieldKind, SchemaDef};
    use crate::value::{CoercionError, WireValue};
    use serde_json::Value;
    use std::thread;

    #[derive(Default)]
    struct Note {
        body: Option<String>,
    }

    impl Entity for Note {
        fn schema() -> SchemaDef {
            SchemaDef::new("note").field(FieldDef::new("body", FieldKind::Text))
        }

        fn read_field(&self, field: &str) -> Option<Value> {
            match field {
                "body" => self.body.to_wire(),
                _ => None,
            }
        }

        fn write_field(&mut self, field: &str, value: &Value) -> Result<(), CoercionError> {
            if field == "body" {
                self.body = WireValue::from_wire(value)?;
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct Broken;

    impl Entity for Broken {
        fn schema() -> SchemaDef {
            SchemaDef::new("broken")
        }

        fn read_field(&self, _field: &str) -> Option<Value> {
            None
        }

        fn write_field(&mut self, _field: &str, _value: &Value) -> Result<(), CoercionError> {
            Ok(())
        }
    }

    #[test]
    fn test_describe_returns_cached_descriptor() {
        let first = describe::<Note>().unwrap();
        let second = describe::<Note>().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.name(), "note");
    }

    #[test]
    fn test_concurrent_first_lookups_converge() {
        let handles: Vec<_> = (0..8)
            .map(|_| thread::spawn(|| describe::<Note>().unwrap()))
            .collect();
        let descriptors: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for descriptor in &descriptors[1..] {
            assert!(Arc::ptr_eq(&descriptors[0], descriptor));
        }
    }

    #[test]
    fn test_failures_are_not_cached() {
        assert!(describe::<Broken>().is_err());
        assert!(describe::<Broken>().is_err());
    }
}
