//! Declarative binding of JSON object fields to typed setters.
//!
//! An [`ObjectParser`] is a table of `(field, expected shape, setter)`
//! entries. Models build one once, usually inside a
//! `once_cell::sync::Lazy` static, and reuse it for every document:
//!
//! ```rust
//! use elastic_json::{ObjectParser, ParseField};
//! use serde_json::json;
//!
//! #[derive(Default)]
//! struct Shard {
//!     index: Option<String>,
//!     docs: Option<i64>,
//! }
//!
//! let mut parser = ObjectParser::<Shard>::new("shard", false, Shard::default);
//! parser.declare_string(|s, v| s.index = Some(v), ParseField::new("index"));
//! parser.declare_long(|s, v| s.docs = Some(v), ParseField::new("docs").with_aliases(&["d"]));
//!
//! let shard = parser.parse(&json!({"index": "logs", "d": "12"}), &()).unwrap();
//! assert_eq!(shard.index.as_deref(), Some("logs"));
//! assert_eq!(shard.docs, Some(12));
//! ```

use crate::parser::value_kind;
use crate::{JsonError, JsonParser, JsonResult};
use serde_json::Value;
use std::fmt;

/// A field name together with the alternative spellings accepted on input.
/// Output always uses the preferred name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseField {
    name: &'static str,
    aliases: &'static [&'static str],
}

impl ParseField {
    pub const fn new(name: &'static str) -> Self {
        Self { name, aliases: &[] }
    }

    pub const fn with_aliases(self, aliases: &'static [&'static str]) -> Self {
        Self {
            name: self.name,
            aliases,
        }
    }

    pub fn preferred_name(&self) -> &'static str {
        self.name
    }

    /// Every accepted spelling, preferred name first
    pub fn all_names(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.name).chain(self.aliases.iter().copied())
    }

    pub fn matches(&self, key: &str) -> bool {
        self.all_names().any(|name| name == key)
    }
}

impl fmt::Display for ParseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Shape a declared field must have in the input document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Object,
    ObjectArray,
    String,
    /// A number, or a string holding one
    Long,
    /// A boolean, or the strings `"true"`/`"false"`
    Boolean,
}

impl ValueType {
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            ValueType::Object => value.is_object(),
            ValueType::ObjectArray => value.is_array(),
            ValueType::String => value.is_string(),
            ValueType::Long => value.is_number() || value.is_string(),
            ValueType::Boolean => value.is_boolean() || value.is_string(),
        }
    }

    fn describe(&self) -> &'static str {
        match self {
            ValueType::Object => "an object",
            ValueType::ObjectArray => "an array of objects",
            ValueType::String => "a string",
            ValueType::Long => "a long",
            ValueType::Boolean => "a boolean",
        }
    }
}

type Setter<T, C> = Box<dyn Fn(&mut T, &Value, &C) -> JsonResult<()> + Send + Sync>;

struct FieldBinding<T, C> {
    field: ParseField,
    value_type: ValueType,
    setter: Setter<T, C>,
}

/// Table-driven parser for objects of type `T`, with an optional
/// caller-supplied context `C` passed to every nested parser.
pub struct ObjectParser<T, C = ()> {
    name: &'static str,
    ignore_unknown_fields: bool,
    constructor: fn() -> T,
    fields: Vec<FieldBinding<T, C>>,
}

impl<T: 'static, C: 'static> ObjectParser<T, C> {
    /// Creates an empty table. With `ignore_unknown_fields == false`
    /// any key without a declaration fails the parse.
    pub fn new(name: &'static str, ignore_unknown_fields: bool, constructor: fn() -> T) -> Self {
        Self {
            name,
            ignore_unknown_fields,
            constructor,
            fields: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Preferred names of all declared fields, in declaration order
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|b| b.field.preferred_name())
    }

    /// Binds an array of objects; each element is parsed by `item_parser`
    pub fn declare_object_array<U, S, P>(&mut self, setter: S, item_parser: P, field: ParseField)
    where
        S: Fn(&mut T, Vec<U>) + Send + Sync + 'static,
        P: Fn(&Value, &C) -> JsonResult<U> + Send + Sync + 'static,
    {
        let parser = self.name;
        self.declare(
            field,
            ValueType::ObjectArray,
            Box::new(move |target: &mut T, value: &Value, context: &C| -> JsonResult<()> {
                let items = value.as_array().map(Vec::as_slice).unwrap_or_default();
                let parsed = parse_object_array(parser, field, items, context, &item_parser)?;
                setter(target, parsed);
                Ok(())
            }),
        );
    }

    /// Binds a nested object parsed by `object_parser`
    pub fn declare_object<U, S, P>(&mut self, setter: S, object_parser: P, field: ParseField)
    where
        S: Fn(&mut T, U) + Send + Sync + 'static,
        P: Fn(&Value, &C) -> JsonResult<U> + Send + Sync + 'static,
    {
        let parser = self.name;
        self.declare(
            field,
            ValueType::Object,
            Box::new(move |target: &mut T, value: &Value, context: &C| -> JsonResult<()> {
                let nested = object_parser(value, context)
                    .map_err(|e| JsonError::field(parser, field.preferred_name(), e))?;
                setter(target, nested);
                Ok(())
            }),
        );
    }

    pub fn declare_string<S>(&mut self, setter: S, field: ParseField)
    where
        S: Fn(&mut T, String) + Send + Sync + 'static,
    {
        self.declare(
            field,
            ValueType::String,
            Box::new(move |target: &mut T, value: &Value, _: &C| -> JsonResult<()> {
                setter(target, value.as_str().unwrap_or_default().to_string());
                Ok(())
            }),
        );
    }

    pub fn declare_long<S>(&mut self, setter: S, field: ParseField)
    where
        S: Fn(&mut T, i64) + Send + Sync + 'static,
    {
        let parser = self.name;
        self.declare(
            field,
            ValueType::Long,
            Box::new(move |target: &mut T, value: &Value, _: &C| -> JsonResult<()> {
                let long = match value {
                    Value::Number(n) => n.as_i64(),
                    Value::String(s) => s.trim().parse::<i64>().ok(),
                    _ => None,
                }
                .ok_or_else(|| {
                    JsonError::field(
                        parser,
                        field.preferred_name(),
                        format!("[{value}] is not a long"),
                    )
                })?;
                setter(target, long);
                Ok(())
            }),
        );
    }

    pub fn declare_bool<S>(&mut self, setter: S, field: ParseField)
    where
        S: Fn(&mut T, bool) + Send + Sync + 'static,
    {
        let parser = self.name;
        self.declare(
            field,
            ValueType::Boolean,
            Box::new(move |target: &mut T, value: &Value, _: &C| -> JsonResult<()> {
                let flag = match value {
                    Value::Bool(b) => Some(*b),
                    Value::String(s) if s == "true" => Some(true),
                    Value::String(s) if s == "false" => Some(false),
                    _ => None,
                }
                .ok_or_else(|| {
                    JsonError::field(
                        parser,
                        field.preferred_name(),
                        format!("[{value}] is not a boolean"),
                    )
                })?;
                setter(target, flag);
                Ok(())
            }),
        );
    }

    /// Parses the root of `parser`
    pub fn apply(&self, parser: &JsonParser, context: &C) -> JsonResult<T> {
        self.parse(parser.value(), context)
    }

    /// Builds a `T` from `value`, which must be an object
    pub fn parse(&self, value: &Value, context: &C) -> JsonResult<T> {
        let object = value.as_object().ok_or_else(|| {
            JsonError::Parse(format!(
                "[{}] expected an object but found {}",
                self.name,
                value_kind(value)
            ))
        })?;
        tracing::trace!(parser = self.name, fields = object.len(), "parsing object");

        let mut target = (self.constructor)();
        let mut filled = vec![false; self.fields.len()];
        for (key, field_value) in object {
            match self.position(key) {
                Some(slot) => {
                    let binding = &self.fields[slot];
                    if std::mem::replace(&mut filled[slot], true) {
                        return Err(JsonError::field(
                            self.name,
                            binding.field.preferred_name(),
                            format!("duplicate field [{key}]"),
                        ));
                    }
                    if !binding.value_type.accepts(field_value) {
                        return Err(JsonError::field(
                            self.name,
                            binding.field.preferred_name(),
                            format!(
                                "expected {} but found {}",
                                binding.value_type.describe(),
                                value_kind(field_value)
                            ),
                        ));
                    }
                    (binding.setter)(&mut target, field_value, context)?;
                }
                None if self.ignore_unknown_fields => {
                    tracing::debug!(parser = self.name, field = %key, "skipping unknown field");
                }
                None => {
                    return Err(JsonError::UnknownField {
                        parser: self.name.to_string(),
                        field: key.clone(),
                    });
                }
            }
        }
        Ok(target)
    }

    fn declare(&mut self, field: ParseField, value_type: ValueType, setter: Setter<T, C>) {
        for name in field.all_names() {
            assert!(
                self.find(name).is_none(),
                "[{}] field [{}] is declared more than once",
                self.name,
                name
            );
        }
        self.fields.push(FieldBinding {
            field,
            value_type,
            setter,
        });
    }

    fn find(&self, key: &str) -> Option<&FieldBinding<T, C>> {
        self.position(key).map(|slot| &self.fields[slot])
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.fields.iter().position(|b| b.field.matches(key))
    }
}

/// Parses every element of `items` with `item_parser`. Elements must be
/// objects; failures name the owning parser, the field and the element index.
pub fn parse_object_array<U, C, P>(
    parser: &str,
    field: ParseField,
    items: &[Value],
    context: &C,
    item_parser: P,
) -> JsonResult<Vec<U>>
where
    P: Fn(&Value, &C) -> JsonResult<U>,
{
    let mut parsed = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        if !item.is_object() {
            return Err(JsonError::field(
                parser,
                field.preferred_name(),
                format!("element {index} is {}, expected an object", value_kind(item)),
            ));
        }
        let element = item_parser(item, context).map_err(|e| {
            JsonError::field(parser, field.preferred_name(), format!("element {index}: {e}"))
        })?;
        parsed.push(element);
    }
    Ok(parsed)
}

impl<T: 'static, C: 'static> fmt::Debug for ObjectParser<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectParser")
            .field("name", &self.name)
            .field("ignore_unknown_fields", &self.ignore_unknown_fields)
            .field("fields", &self.field_names().collect::<Vec<_>>())
            .finish()
    }
}
