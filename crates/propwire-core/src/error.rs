//! Error types for the propwire core library
//!
//! This module defines the error handling for schema introspection and document
//! conversion, using thiserror for ergonomic error definitions. Structural
//! problems (a missing `properties` envelope, a missing list key, a schema with
//! no collection field) are hard failures. Missing optional data never is.

use thiserror::Error;

/// Main error type for propwire operations
#[derive(Error, Debug)]
pub enum Error {
    /// The entity model itself is malformed
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// The document does not have the shape the entity model expects
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// JSON parsing and serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while introspecting an entity schema
///
/// These indicate a programming error in the entity model rather than bad data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// List-response conversion against a container without a collection field
    #[error("schema '{schema}' has no collection field")]
    NoCollectionField { schema: String },

    /// More than one field qualifies as the collection field
    #[error("schema '{schema}' declares more than one collection field: {}", fields.join(", "))]
    AmbiguousCollectionField { schema: String, fields: Vec<String> },

    /// The schema cannot be described
    #[error("schema '{schema}' cannot be introspected: {reason}")]
    Uninspectable { schema: String, reason: String },
}

impl SchemaError {
    /// Create an uninspectable schema error
    pub fn uninspectable(schema: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Uninspectable {
            schema: schema.into(),
            reason: reason.into(),
        }
    }
}

/// Errors raised when a document's structure does not match the entity model
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// Single-entity document lacks the `properties` envelope
    #[error("document for '{schema}' has no '{key}' document (found {found})")]
    MissingProperties {
        schema: String,
        key: String,
        found: String,
    },

    /// List document lacks the collection key
    #[error("list document for '{schema}' has no '{key}' key")]
    MissingListKey { schema: String, key: String },

    /// The collection key does not hold a sequence
    #[error("'{key}' in list document for '{schema}' is {found}, expected an array")]
    ListNotSequence {
        schema: String,
        key: String,
        found: String,
    },

    /// An element of the collection is not a document
    #[error("element {index} of '{key}' is {found}, expected an object")]
    InvalidListElement {
        key: String,
        index: usize,
        found: String,
    },

    /// A raw value cannot be stored in the field's type
    #[error("field '{field}' of '{schema}' expects {expected}, found {found}")]
    InvalidFieldValue {
        schema: String,
        field: String,
        expected: String,
        found: String,
    },
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            message: err.to_string(),
            source: err,
        }
    }
}
