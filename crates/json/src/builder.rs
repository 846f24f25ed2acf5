//! JsonBuilder - structured writer producing a JSON document

use crate::{JsonError, JsonResult, JsonSerializable};
use serde_json::{Map, Value};
use std::io::Write;

/// Formatting options passed through serialization
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToJsonParams {
    /// Indent the rendered document
    pub pretty: bool,
}

impl ToJsonParams {
    /// Params for indented output
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

#[derive(Debug)]
enum Scope {
    Object {
        map: Map<String, Value>,
        pending: Option<String>,
    },
    Array(Vec<Value>),
}

/// Accepts object/array/field/value writes and assembles a document.
///
/// Scopes must be balanced: every `start_*` needs its matching `end_*`
/// before [`JsonBuilder::finish`]. Inside an object each value must be
/// preceded by [`JsonBuilder::field`].
#[derive(Debug, Default)]
pub struct JsonBuilder {
    scopes: Vec<Scope>,
    root: Option<Value>,
}

impl JsonBuilder {
    /// Creates an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens an object scope
    pub fn start_object(&mut self) -> JsonResult<&mut Self> {
        self.check_value_slot("start_object")?;
        self.scopes.push(Scope::Object {
            map: Map::new(),
            pending: None,
        });
        Ok(self)
    }

    /// Closes the innermost object scope
    pub fn end_object(&mut self) -> JsonResult<&mut Self> {
        match self.scopes.pop() {
            Some(Scope::Object { map, pending: None }) => {
                self.push_value(Value::Object(map))?;
                Ok(self)
            }
            Some(Scope::Object {
                map,
                pending: Some(name),
            }) => {
                let err = JsonError::InvalidOperation(format!("field [{name}] has no value"));
                self.scopes.push(Scope::Object {
                    map,
                    pending: Some(name),
                });
                Err(err)
            }
            Some(scope @ Scope::Array(_)) => {
                self.scopes.push(scope);
                Err(JsonError::InvalidOperation(
                    "end_object called inside an array".to_string(),
                ))
            }
            None => Err(JsonError::InvalidOperation(
                "end_object called without an open object".to_string(),
            )),
        }
    }

    /// Opens an array scope
    pub fn start_array(&mut self) -> JsonResult<&mut Self> {
        self.check_value_slot("start_array")?;
        self.scopes.push(Scope::Array(Vec::new()));
        Ok(self)
    }

    /// Closes the innermost array scope
    pub fn end_array(&mut self) -> JsonResult<&mut Self> {
        match self.scopes.pop() {
            Some(Scope::Array(items)) => {
                self.push_value(Value::Array(items))?;
                Ok(self)
            }
            Some(scope @ Scope::Object { .. }) => {
                self.scopes.push(scope);
                Err(JsonError::InvalidOperation(
                    "end_array called inside an object".to_string(),
                ))
            }
            None => Err(JsonError::InvalidOperation(
                "end_array called without an open array".to_string(),
            )),
        }
    }

    /// Names the next value written into the current object
    pub fn field(&mut self, name: &str) -> JsonResult<&mut Self> {
        match self.scopes.last_mut() {
            Some(Scope::Object { pending, .. }) => {
                if let Some(previous) = pending {
                    return Err(JsonError::InvalidOperation(format!(
                        "field [{previous}] has no value"
                    )));
                }
                *pending = Some(name.to_string());
                Ok(self)
            }
            _ => Err(JsonError::InvalidOperation(format!(
                "field [{name}] written outside of an object"
            ))),
        }
    }

    /// Writes a scalar (or pre-built) value
    pub fn value(&mut self, value: impl Into<Value>) -> JsonResult<&mut Self> {
        self.push_value(value.into())?;
        Ok(self)
    }

    /// Writes `name: value` into the current object
    pub fn field_value(&mut self, name: &str, value: impl Into<Value>) -> JsonResult<&mut Self> {
        self.field(name)?;
        self.value(value)
    }

    /// Writes `name: null` into the current object
    pub fn null_field(&mut self, name: &str) -> JsonResult<&mut Self> {
        self.field_value(name, Value::Null)
    }

    /// Writes `name: [...]`, serializing every item through its own contract
    pub fn array<T: JsonSerializable>(
        &mut self,
        name: &str,
        items: &[T],
        params: &ToJsonParams,
    ) -> JsonResult<&mut Self> {
        self.field(name)?;
        self.start_array()?;
        for item in items {
            item.to_json(self, params)?;
        }
        self.end_array()
    }

    /// Consumes the builder and returns the finished document
    pub fn finish(self) -> JsonResult<Value> {
        if !self.scopes.is_empty() {
            return Err(JsonError::InvalidOperation(format!(
                "{} scope(s) still open",
                self.scopes.len()
            )));
        }
        self.root
            .ok_or_else(|| JsonError::InvalidOperation("nothing was written".to_string()))
    }

    /// Renders the finished document into `writer`
    pub fn write_to<W: Write>(self, writer: W, params: &ToJsonParams) -> JsonResult<()> {
        let document = self.finish()?;
        let result = if params.pretty {
            serde_json::to_writer_pretty(writer, &document)
        } else {
            serde_json::to_writer(writer, &document)
        };
        result.map_err(|e| JsonError::Serialization(e.to_string()))
    }

    /// Renders the finished document as a string
    pub fn into_string(self, params: &ToJsonParams) -> JsonResult<String> {
        let mut out = Vec::new();
        self.write_to(&mut out, params)?;
        String::from_utf8(out).map_err(|e| JsonError::Serialization(e.to_string()))
    }

    fn check_value_slot(&self, op: &str) -> JsonResult<()> {
        match self.scopes.last() {
            Some(Scope::Object { pending: None, .. }) => Err(JsonError::InvalidOperation(
                format!("{op} inside an object requires a field name"),
            )),
            None if self.root.is_some() => Err(JsonError::InvalidOperation(
                "document already has a root value".to_string(),
            )),
            _ => Ok(()),
        }
    }

    fn push_value(&mut self, value: Value) -> JsonResult<()> {
        match self.scopes.last_mut() {
            Some(Scope::Object { map, pending }) => {
                let name = pending.take().ok_or_else(|| {
                    JsonError::InvalidOperation(
                        "value written into an object without a field name".to_string(),
                    )
                })?;
                map.insert(name, value);
            }
            Some(Scope::Array(items)) => items.push(value),
            None => {
                if self.root.is_some() {
                    return Err(JsonError::InvalidOperation(
                        "document already has a root value".to_string(),
                    ));
                }
                self.root = Some(value);
            }
        }
        Ok(())
    }
}
