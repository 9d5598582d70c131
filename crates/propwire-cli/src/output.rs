//! Output formatting and writing utilities
//!
//! This module provides utilities for formatting and writing output
//! in various formats (JSON, YAML, human-readable) with dedicated human
//! renderings for decoded entities and schema descriptors.

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::logging::redaction;
use colored::Colorize;
use propwire_core::{describe, Entity, EntityList, FieldDescriptor, FieldKind, SchemaDescriptor};
use serde::Serialize;
use serde_json::Value;
use std::io::{self, Write};
use tracing::{debug, trace};

/// Trait for formatting output with specialized support for common types
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format a schema descriptor as a field table
    fn format_schema(&self, descriptor: &SchemaDescriptor) -> Result<String>;

    /// Format a decoded entity by wire name
    fn format_entity<E: Entity + Serialize>(&self, entity: &E) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            OutputFormat::Human => Ok(serde_json::to_string_pretty(value)?),
        }
    }

    fn format_schema(&self, descriptor: &SchemaDescriptor) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_schema_human(descriptor)),
            _ => self.format(descriptor),
        }
    }

    fn format_entity<E: Entity + Serialize>(&self, entity: &E) -> Result<String> {
        match self {
            OutputFormat::Human => format_entity_human(entity),
            _ => self.format(entity),
        }
    }
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool) -> Self {
        Self::with_writer(format, use_color, quiet, Box::new(io::stdout()))
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            quiet,
            writer,
        }
    }

    /// Get the output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write raw output
    pub fn write(&mut self, content: &str) -> Result<()> {
        write!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an info message
    pub fn info(&mut self, message: &str) -> Result<()> {
        debug!("Output info: {}", message);

        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.writeln(&format!("INFO: {}", message))
        }
    }

    /// Write a success message
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.green().to_string())
        } else {
            self.writeln(message)
        }
    }

    /// Write a warning message
    pub fn warning(&mut self, message: &str) -> Result<()> {
        if self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.yellow().to_string())
        } else {
            self.writeln(&format!("WARNING: {}", message))
        }
    }

    /// Write a section header
    pub fn section(&mut self, title: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        self.writeln("")?;
        if self.use_color {
            self.writeln(&format!("═══ {} ═══", title).bright_blue().to_string())
        } else {
            self.writeln(&format!("=== {} ===", title))
        }
    }

    /// Write data in the configured format
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        if tracing::enabled!(tracing::Level::TRACE) {
            let mut logged = serde_json::to_value(value)?;
            redaction::redact_json_value(&mut logged);
            trace!("Outputting data: {}", logged);
        }

        let formatted = self.format.format(value)?;
        self.emit(&formatted)
    }

    /// Write a decoded entity
    pub fn entity<E: Entity + Serialize>(&mut self, entity: &E) -> Result<()> {
        let formatted = self.format.format_entity(entity)?;
        self.emit(&formatted)
    }

    /// Write a decoded list response: one section per item, then the envelope fields
    pub fn entity_list<C: EntityList + Serialize>(&mut self, list: &C) -> Result<()>
    where
        C::Item: Serialize,
    {
        if self.format != OutputFormat::Human {
            return self.data(list);
        }

        let item_schema = describe::<C::Item>()?;
        for (index, item) in list.items().iter().enumerate() {
            self.section(&format!("{} {}", item_schema.name(), index + 1))?;
            self.entity(item)?;
        }

        let envelope = format_entity_human(list)?;
        if !envelope.is_empty() {
            self.section(describe::<C>()?.name())?;
            self.write(&envelope)?;
        }
        Ok(())
    }

    /// Write a schema descriptor
    pub fn schema(&mut self, descriptor: &SchemaDescriptor) -> Result<()> {
        let formatted = self.format.format_schema(descriptor)?;
        self.emit(&formatted)
    }

    fn emit(&mut self, formatted: &str) -> Result<()> {
        if formatted.ends_with('\n') {
            self.write(formatted)
        } else {
            self.writeln(formatted)
        }
    }
}

/// Human-readable name of a field kind
fn kind_label(kind: &FieldKind) -> String {
    match kind {
        FieldKind::Text => "text".to_string(),
        FieldKind::Integer => "integer".to_string(),
        FieldKind::Decimal => "decimal".to_string(),
        FieldKind::Boolean => "boolean".to_string(),
        FieldKind::Timestamp => "timestamp".to_string(),
        FieldKind::Json => "json".to_string(),
        FieldKind::Collection { element } => format!("list of {}", element),
    }
}

fn format_schema_human(descriptor: &SchemaDescriptor) -> String {
    let mut output = format!("Schema: {}\n", descriptor.name());

    match descriptor.identity() {
        Some(identity) => output.push_str(&format!(
            "Identity: {} (root key '{}', {})\n",
            identity.name,
            identity.wire_name,
            kind_label(&identity.kind)
        )),
        None => output.push_str("Identity: none\n"),
    }

    let name_width = column_width(descriptor.fields(), |f| f.name);
    let wire_width = column_width(descriptor.fields(), |f| f.wire_name);

    output.push_str("Fields:\n");
    for field in descriptor.fields() {
        output.push_str(&format!(
            "  {:<name_width$}  {:<wire_width$}  {}\n",
            field.name,
            field.wire_name,
            kind_label(&field.kind),
        ));
    }

    output
}

fn column_width(fields: &[FieldDescriptor], key: impl Fn(&FieldDescriptor) -> &str) -> usize {
    fields.iter().map(|f| key(f).len()).max().unwrap_or(0)
}

/// `wire: value` lines for every present scalar field, identity first
fn format_entity_human<E: Entity>(entity: &E) -> Result<String> {
    let descriptor = describe::<E>()?;
    let fields = descriptor
        .identity()
        .into_iter()
        .chain(descriptor.fields().iter().filter(|f| !f.kind.is_collection()));

    let mut output = String::new();
    for field in fields {
        if let Some(value) = entity.read_field(field.name).filter(|v| !v.is_null()) {
            output.push_str(&format!("{}: {}\n", field.wire_name, format_value_compact(&value)));
        }
    }
    Ok(output)
}

/// Format a JSON value in a compact, human-readable way
fn format_value_compact(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => {
            if arr.len() <= 3 {
                format!(
                    "[{}]",
                    arr.iter()
                        .map(format_value_compact)
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            } else {
                format!("[{} items]", arr.len())
            }
        }
        Value::Object(obj) => {
            if obj.len() <= 2 {
                let items: Vec<String> = obj
                    .iter()
                    .map(|(k, v)| format!("{}: {}", k, format_value_compact(v)))
                    .collect();
                format!("{{{}}}", items.join(", "))
            } else {
                format!("{{{} fields}}", obj.len())
            }
        }
    }
}
