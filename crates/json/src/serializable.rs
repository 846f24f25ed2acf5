//! The two-operation contract every JSON model implements.

use crate::{JsonBuilder, JsonParser, JsonResult, ToJsonParams};
use serde_json::Value;
use std::io::Write;

/// A value that can write itself into a [`JsonBuilder`] and read itself
/// back from a [`JsonParser`].
pub trait JsonSerializable: Sized {
    /// Writes this value into `builder`. Implementations must not mutate
    /// `self`, so repeated calls yield identical documents.
    fn to_json(&self, builder: &mut JsonBuilder, params: &ToJsonParams) -> JsonResult<()>;

    /// Reads a value from the document held by `parser`.
    fn from_json(parser: &JsonParser) -> JsonResult<Self>;
}

/// Serializes `value` into a document tree
pub fn to_value<T: JsonSerializable>(value: &T) -> JsonResult<Value> {
    let mut builder = JsonBuilder::new();
    value.to_json(&mut builder, &ToJsonParams::default())?;
    builder.finish()
}

/// Serializes `value` into JSON text
pub fn to_string<T: JsonSerializable>(value: &T, params: &ToJsonParams) -> JsonResult<String> {
    let mut builder = JsonBuilder::new();
    value.to_json(&mut builder, params)?;
    builder.into_string(params)
}

/// Serializes `value` into `writer`
pub fn to_writer<T: JsonSerializable, W: Write>(
    value: &T,
    writer: W,
    params: &ToJsonParams,
) -> JsonResult<()> {
    let mut builder = JsonBuilder::new();
    value.to_json(&mut builder, params)?;
    builder.write_to(writer, params)
}

/// Parses `text` and reads a `T` from it
pub fn from_str<T: JsonSerializable>(text: &str) -> JsonResult<T> {
    T::from_json(&JsonParser::parse(text)?)
}

/// Reads a `T` from an already parsed document
pub fn from_value<T: JsonSerializable>(value: Value) -> JsonResult<T> {
    T::from_json(&JsonParser::from_value(value)?)
}
