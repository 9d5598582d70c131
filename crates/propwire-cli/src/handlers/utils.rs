//! Shared utilities for command handlers

use crate::config::Config;
use crate::error::{Error, Result};
use propwire_core::{describe, Document, DocumentConverter, Entity};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Read a JSON or YAML file whose top level is an object
pub fn read_document(path: &Path) -> Result<Document> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;

    let is_yaml = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s == "yaml" || s == "yml")
        .unwrap_or(false);

    let value: Value = if is_yaml {
        serde_yaml::from_str(&content).map_err(|e| Error::InvalidFormat {
            path: path.to_path_buf(),
            expected: format!("YAML ({})", e),
        })?
    } else {
        serde_json::from_str(&content).map_err(|e| Error::InvalidFormat {
            path: path.to_path_buf(),
            expected: format!("JSON ({})", e),
        })?
    };

    match value {
        Value::Object(doc) => Ok(doc),
        other => Err(Error::InvalidFormat {
            path: path.to_path_buf(),
            expected: format!(
                "an object at the top level, found {}",
                propwire_core::document::shape_name(&other)
            ),
        }),
    }
}

/// Build the converter the config file describes
pub fn converter(config: &Config) -> Result<DocumentConverter> {
    Ok(DocumentConverter::new(config.converter.clone())?)
}

/// Keys of `map` that no field of `E` maps to
///
/// The identity only counts when `map` is a document root; inside a
/// `properties` map it is never read.
pub fn unmatched_keys<E: Entity>(map: &Document, at_root: bool) -> Result<Vec<String>> {
    let descriptor = describe::<E>()?;
    let identity = descriptor.identity().filter(|_| at_root);

    Ok(map
        .keys()
        .filter(|key| identity.map_or(true, |field| !field.matches_wire_name(key)))
        .filter(|key| descriptor.resolve_by_wire_name(key).is_none())
        .cloned()
        .collect())
}


/// In-memory writer for capturing handler output in tests
#[cfg(test)]
#[derive(Clone, Default)]
pub struct Captured(std::rc::Rc<std::cell::RefCell<Vec<u8>>>);

#[cfg(test)]
impl Captured {
    pub fn text(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

#[cfg(test)]
impl std::io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
