// Copyright (C) 2024-2025 The Elastic-RS Project.
//
// count_response.rs file belongs to the elastic-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use super::CountRecord;
use crate::models::lenient;
use elastic_json::{
    parse_object_array, value_kind, JsonBuilder, JsonError, JsonParser, JsonResult,
    JsonSerializable, ObjectParser, ParseField, ToJsonParams, Value,
};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

const RECORDS: ParseField = ParseField::new("records");

static PARSER: Lazy<ObjectParser<CountResponse>> = Lazy::new(|| {
    let mut parser =
        ObjectParser::<CountResponse>::new("count_response", false, CountResponse::new);
    parser.declare_object_array(
        |response, records| {
            response.set_records(records);
        },
        |value, context| CountRecord::parser().parse(value, context),
        RECORDS,
    );
    parser
});

/// Response of the `_cat/count` endpoint.
///
/// `records` distinguishes "not present" (`None`, key omitted on output)
/// from "present but empty" (`Some(vec![])`, written as `"records": []`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CountResponse {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::present"
    )]
    records: Option<Vec<CountRecord>>,
}

impl CountResponse {
    /// Creates a response with no records set
    pub const fn new() -> Self {
        Self { records: None }
    }

    pub fn with_records(records: Vec<CountRecord>) -> Self {
        Self {
            records: Some(records),
        }
    }

    pub fn records(&self) -> Option<&[CountRecord]> {
        self.records.as_deref()
    }

    pub fn set_records(&mut self, records: Vec<CountRecord>) -> &mut Self {
        self.records = Some(records);
        self
    }

    /// Removes and returns the records, leaving the response unset
    pub fn take_records(&mut self) -> Option<Vec<CountRecord>> {
        self.records.take()
    }

    /// The shared field table used by [`JsonSerializable::from_json`]
    pub fn parser() -> &'static ObjectParser<CountResponse> {
        &PARSER
    }

    /// Reads the body the endpoint actually returns: either a bare array
    /// of records or the `{"records": [...]}` object form.
    pub fn from_records_body(parser: &JsonParser) -> JsonResult<Self> {
        match parser.value() {
            Value::Array(items) => {
                let records = parse_object_array(PARSER.name(), RECORDS, items, &(), |v, c| {
                    CountRecord::parser().parse(v, c)
                })?;
                Ok(Self::with_records(records))
            }
            Value::Object(_) => Self::from_json(parser),
            other => Err(JsonError::Parse(format!(
                "[{}] expected an array or an object but found {}",
                PARSER.name(),
                value_kind(other)
            ))),
        }
    }
}

impl From<Vec<CountRecord>> for CountResponse {
    fn from(records: Vec<CountRecord>) -> Self {
        Self::with_records(records)
    }
}

impl JsonSerializable for CountResponse {
    fn to_json(&self, builder: &mut JsonBuilder, params: &ToJsonParams) -> JsonResult<()> {
        builder.start_object()?;
        if let Some(records) = &self.records {
            builder.array(RECORDS.preferred_name(), records.as_slice(), params)?;
        }
        builder.end_object()?;
        Ok(())
    }

    fn from_json(parser: &JsonParser) -> JsonResult<Self> {
        PARSER.apply(parser, &())
    }
}
