//! JsonParser - a parsed document ready to be bound to typed models

use crate::{JsonError, JsonResult, ParserConfig};
use serde_json::Value;
use std::io::Read;

/// Holds the root of a parsed document that passed the configured limits.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonParser {
    root: Value,
}

impl JsonParser {
    /// Parses JSON text with the default limits
    pub fn parse(text: &str) -> JsonResult<Self> {
        Self::parse_with_config(text, &ParserConfig::default())
    }

    /// Parses JSON text
    pub fn parse_with_config(text: &str, config: &ParserConfig) -> JsonResult<Self> {
        config.validate()?;
        let root: Value = serde_json::from_str(text)?;
        Self::from_value_with_config(root, config)
    }

    /// Parses raw JSON bytes with the default limits
    pub fn from_slice(bytes: &[u8]) -> JsonResult<Self> {
        Self::from_slice_with_config(bytes, &ParserConfig::default())
    }

    /// Parses raw JSON bytes
    pub fn from_slice_with_config(bytes: &[u8], config: &ParserConfig) -> JsonResult<Self> {
        config.validate()?;
        let root: Value = serde_json::from_slice(bytes)?;
        Self::from_value_with_config(root, config)
    }

    /// Reads and parses a document with the default limits
    pub fn from_reader<R: Read>(reader: R) -> JsonResult<Self> {
        Self::from_reader_with_config(reader, &ParserConfig::default())
    }

    /// Reads and parses a document; read failures surface as [`JsonError::Io`]
    pub fn from_reader_with_config<R: Read>(reader: R, config: &ParserConfig) -> JsonResult<Self> {
        config.validate()?;
        let root: Value = serde_json::from_reader(reader)?;
        Self::from_value_with_config(root, config)
    }

    /// Wraps an already parsed value with the default limits
    pub fn from_value(root: Value) -> JsonResult<Self> {
        Self::from_value_with_config(root, &ParserConfig::default())
    }

    /// Wraps an already parsed value
    pub fn from_value_with_config(root: Value, config: &ParserConfig) -> JsonResult<Self> {
        config.validate()?;
        let depth = nesting_depth(&root);
        if depth > config.max_nesting_depth {
            return Err(JsonError::Parse(format!(
                "document nesting depth {depth} exceeds the limit of {}",
                config.max_nesting_depth
            )));
        }
        Ok(Self { root })
    }

    /// The document root
    pub fn value(&self) -> &Value {
        &self.root
    }

    /// Consumes the parser, returning the document root
    pub fn into_value(self) -> Value {
        self.root
    }
}

/// Short description of a value's JSON type, used in error messages
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn nesting_depth(root: &Value) -> usize {
    let mut deepest = 0;
    let mut pending = vec![(root, 1usize)];
    while let Some((value, depth)) = pending.pop() {
        match value {
            Value::Array(items) => {
                deepest = deepest.max(depth);
                pending.extend(items.iter().map(|item| (item, depth + 1)));
            }
            Value::Object(map) => {
                deepest = deepest.max(depth);
                pending.extend(map.values().map(|item| (item, depth + 1)));
            }
            _ => {}
        }
    }
    deepest
}
