//! Wire conventions for outbound property documents
//!
//! The API emits and accepts properties in two incompatible shapes. Legacy
//! routes take `{"name": .., "value": ..}` envelopes, newer ones
//! `{"propertyName": .., "value": ..}` entries. The convention is picked per
//! call from the resource route.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

static ROUTE_VERSION: OnceLock<Regex> = OnceLock::new();

/// Shape used to emit each property on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WireConvention {
    /// Legacy `{name, value}` envelopes
    #[default]
    PropertyEnvelope,
    /// Newer `{propertyName, value}` entries
    FlatNamed,
}

impl WireConvention {
    /// Map the externally derived `usesFlatWireConvention` flag
    pub fn from_flag(uses_flat_wire_convention: bool) -> Self {
        if uses_flat_wire_convention {
            WireConvention::FlatNamed
        } else {
            WireConvention::PropertyEnvelope
        }
    }

    pub fn uses_flat(&self) -> bool {
        matches!(self, WireConvention::FlatNamed)
    }

    /// Select the convention from a resource route such as `/companies/v2/companies`
    ///
    /// Routes whose version segment is at least `min_flat_version` use the flat
    /// convention. Routes without a version segment are legacy.
    pub fn for_route(route: &str, min_flat_version: u32) -> Self {
        let flat = route_version(route).is_some_and(|v| v >= min_flat_version);
        Self::from_flag(flat)
    }
}

/// Extract the `vN` segment of a route
pub fn route_version(route: &str) -> Option<u32> {
    let pattern = ROUTE_VERSION.get_or_init(|| Regex::new(r"(?:^|/)v(\d+)(?:/|$)").unwrap());
    pattern
        .captures(route)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

impl fmt::Display for WireConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireConvention::PropertyEnvelope => write!(f, "property-envelope"),
            WireConvention::FlatNamed => write!(f, "flat-named"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flag() {
        assert_eq!(WireConvention::from_flag(true), WireConvention::FlatNamed);
        assert_eq!(WireConvention::from_flag(false), WireConvention::PropertyEnvelope);
        assert!(WireConvention::FlatNamed.uses_flat());
    }

    #[test]
    fn test_route_version() {
        assert_eq!(route_version("/contacts/v1/contact"), Some(1));
        assert_eq!(route_version("/companies/v2/companies"), Some(2));
        assert_eq!(route_version("companies/v12"), Some(12));
        assert_eq!(route_version("/deals/vx/deal"), None);
        assert_eq!(route_version("/crm/objects"), None);
    }

    #[test]
    fn test_for_route() {
        assert_eq!(
            WireConvention::for_route("/companies/v2/companies", 2),
            WireConvention::FlatNamed
        );
        assert_eq!(
            WireConvention::for_route("/contacts/v1/contact", 2),
            WireConvention::PropertyEnvelope
        );
        assert_eq!(
            WireConvention::for_route("/objects", 2),
            WireConvention::PropertyEnvelope
        );
    }

    #[test]
    fn test_display_and_serde() {
        assert_eq!(WireConvention::FlatNamed.to_string(), "flat-named");
        assert_eq!(
            serde_json::to_string(&WireConvention::PropertyEnvelope).unwrap(),
            "\"property_envelope\""
        );
    }
}
