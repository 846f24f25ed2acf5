//! # Elastic-RS: typed Elasticsearch API models
//!
//! Response models for the Elasticsearch HTTP API together with the JSON
//! document plumbing they are built on.
//!
//! ## Quick Start
//!
//! ```rust
//! use elastic_rs::prelude::*;
//!
//! let body = r#"{"records":[{"epoch":"1475868259","timestamp":"15:24:20","count":"121"}]}"#;
//! let response: CountResponse = elastic_rs::json::from_str(body).expect("valid body");
//! assert_eq!(response.records().map(|r| r.len()), Some(1));
//!
//! let text = elastic_rs::json::to_string(&response, &ToJsonParams::default()).unwrap();
//! assert_eq!(text, r#"{"records":[{"epoch":1475868259,"timestamp":"15:24:20","count":121}]}"#);
//! ```
//!
//! ## Architecture
//!
//! - [`json`] - document builder, document parser and declarative object parser
//! - [`client`] - response models, grouped by endpoint

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub use elastic_client as client;
pub use elastic_json as json;

/// Common imports for working with the response models
pub mod prelude {
    pub use crate::client::{CountRecord, CountResponse};
    pub use crate::json::{
        JsonBuilder, JsonError, JsonParser, JsonResult, JsonSerializable, ParserConfig,
        ToJsonParams,
    };
}
