//! Converter configuration
//!
//! Wire key names used by the converter. The defaults match the API; they are
//! configurable so that a client can follow a renamed envelope without a new
//! release.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Configuration for [`DocumentConverter`](crate::DocumentConverter)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Key holding the property map (inbound) or entry list (outbound)
    pub properties_key: String,

    /// Key holding the value inside a property entry
    pub value_key: String,

    /// Name key of a `PropertyEnvelope` entry
    pub envelope_name_key: String,

    /// Name key of a `FlatNamed` entry
    pub flat_name_key: String,

    /// Lowest route version that uses the flat convention
    pub flat_route_min_version: u32,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            properties_key: "properties".to_string(),
            value_key: "value".to_string(),
            envelope_name_key: "name".to_string(),
            flat_name_key: "propertyName".to_string(),
            flat_route_min_version: 2,
        }
    }
}

impl ConverterConfig {
    /// Check that every key is usable
    pub fn validate(&self) -> Result<()> {
        let keys = [
            ("properties_key", &self.properties_key),
            ("value_key", &self.value_key),
            ("envelope_name_key", &self.envelope_name_key),
            ("flat_name_key", &self.flat_name_key),
        ];
        for (name, key) in keys {
            if key.trim().is_empty() {
                return Err(Error::Configuration {
                    message: format!("{} must not be empty", name),
                });
            }
        }
        if self.value_key == self.envelope_name_key || self.value_key == self.flat_name_key {
            return Err(Error::Configuration {
                message: format!("value_key '{}' collides with a name key", self.value_key),
            });
        }
        Ok(())
    }
}
