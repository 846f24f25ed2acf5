//! # Elastic JSON
//!
//! Document plumbing shared by the elastic-rs response models:
//!
//! - [`JsonBuilder`] accepts structured writes and produces a document
//! - [`JsonParser`] holds a parsed document checked against [`ParserConfig`]
//! - [`ObjectParser`] binds object fields to typed setters, declared once
//! - [`JsonSerializable`] is the two-operation contract each model implements
//!
//! ## Quick Start
//!
//! ```rust
//! use elastic_json::*;
//!
//! struct Total(i64);
//!
//! impl JsonSerializable for Total {
//!     fn to_json(&self, builder: &mut JsonBuilder, _params: &ToJsonParams) -> JsonResult<()> {
//!         builder.start_object()?;
//!         builder.field_value("total", self.0)?;
//!         builder.end_object()?;
//!         Ok(())
//!     }
//!
//!     fn from_json(parser: &JsonParser) -> JsonResult<Self> {
//!         let mut table = ObjectParser::<Total>::new("total", false, || Total(0));
//!         table.declare_long(|t, v| t.0 = v, ParseField::new("total"));
//!         table.apply(parser, &())
//!     }
//! }
//!
//! let total: Total = from_str(r#"{"total": "7"}"#).expect("valid document");
//! assert_eq!(to_string(&total, &ToJsonParams::default()).unwrap(), r#"{"total":7}"#);
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod object_parser;
pub mod parser;
pub mod serializable;

pub use builder::{JsonBuilder, ToJsonParams};
pub use config::{ParserConfig, DEFAULT_MAX_NESTING_DEPTH};
pub use error::{JsonError, JsonResult};
pub use object_parser::{parse_object_array, ObjectParser, ParseField, ValueType};
pub use parser::{value_kind, JsonParser};
pub use serializable::{from_str, from_value, to_string, to_value, to_writer, JsonSerializable};

// Re-exported so models and their callers agree on one document type
pub use serde_json::Value;
