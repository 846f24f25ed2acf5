// Copyright (C) 2024-2025 The Elastic-RS Project.
//
// count_record.rs file belongs to the elastic-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::models::lenient;
use elastic_json::{
    JsonBuilder, JsonParser, JsonResult, JsonSerializable, ObjectParser, ParseField, ToJsonParams,
};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

const EPOCH: ParseField = ParseField::new("epoch").with_aliases(&["t", "time"]);
const TIMESTAMP: ParseField = ParseField::new("timestamp").with_aliases(&["ts", "hms", "hhmmss"]);
const COUNT: ParseField = ParseField::new("count").with_aliases(&["dc", "docs.count", "docsCount"]);

static PARSER: Lazy<ObjectParser<CountRecord>> = Lazy::new(|| {
    let mut parser =
        ObjectParser::<CountRecord>::new("count_record", false, CountRecord::default);
    parser.declare_long(|r, v| r.epoch = Some(v), EPOCH);
    parser.declare_string(|r, v| r.timestamp = Some(v), TIMESTAMP);
    parser.declare_long(|r, v| r.count = Some(v), COUNT);
    parser
});

/// One row of the `_cat/count` table.
///
/// Every column is optional since callers pick columns with `h=`. The
/// endpoint renders numbers as strings; both forms are accepted and
/// numbers are always written back as JSON numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CountRecord {
    /// Seconds since the Unix epoch when the count was taken
    #[serde(
        default,
        alias = "t",
        alias = "time",
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::long"
    )]
    pub epoch: Option<i64>,

    /// Wall clock time of the count, `HH:MM:SS`
    #[serde(
        default,
        alias = "ts",
        alias = "hms",
        alias = "hhmmss",
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::present"
    )]
    pub timestamp: Option<String>,

    /// Document count
    #[serde(
        default,
        alias = "dc",
        alias = "docs.count",
        alias = "docsCount",
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::long"
    )]
    pub count: Option<i64>,
}

impl CountRecord {
    /// A record holding only a document count
    pub fn with_count(count: i64) -> Self {
        Self {
            count: Some(count),
            ..Self::default()
        }
    }

    /// The shared field table used by [`JsonSerializable::from_json`]
    pub fn parser() -> &'static ObjectParser<CountRecord> {
        &PARSER
    }
}

impl JsonSerializable for CountRecord {
    fn to_json(&self, builder: &mut JsonBuilder, _params: &ToJsonParams) -> JsonResult<()> {
        builder.start_object()?;
        if let Some(epoch) = self.epoch {
            builder.field_value(EPOCH.preferred_name(), epoch)?;
        }
        if let Some(timestamp) = &self.timestamp {
            builder.field_value(TIMESTAMP.preferred_name(), timestamp.as_str())?;
        }
        if let Some(count) = self.count {
            builder.field_value(COUNT.preferred_name(), count)?;
        }
        builder.end_object()?;
        Ok(())
    }

    fn from_json(parser: &JsonParser) -> JsonResult<Self> {
        PARSER.apply(parser, &())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use elastic_json::{from_str, to_value, JsonError};
    use serde_json::json;

    #[test]
    fn parses_cat_rendering() {
        let record: CountRecord =
            from_str(r#"{"epoch":"1475868259","timestamp":"15:24:20","count":"121"}"#).unwrap();
        assert_eq!(record.epoch, Some(1_475_868_259));
        assert_eq!(record.timestamp.as_deref(), Some("15:24:20"));
        assert_eq!(record.count, Some(121));

        assert_eq!(
            to_value(&record).unwrap(),
            json!({"epoch": 1475868259, "timestamp": "15:24:20", "count": 121})
        );
    }

    #[test]
    fn accepts_column_aliases() {
        let text = r#"{"t":"1","hms":"00:00:01","docs.count":"9"}"#;
        let record: CountRecord = from_str(text).unwrap();
        assert_eq!(
            record,
            CountRecord {
                epoch: Some(1),
                timestamp: Some("00:00:01".to_string()),
                count: Some(9),
            }
        );
    }

    #[test]
    fn omits_unset_columns() {
        assert_eq!(to_value(&CountRecord::default()).unwrap(), json!({}));
        assert_eq!(to_value(&CountRecord::with_count(5)).unwrap(), json!({"count": 5}));
    }

    #[test]
    fn rejects_bad_columns() {
        assert!(matches!(
            from_str::<CountRecord>(r#"{"count":"lots"}"#),
            Err(JsonError::Parse(_))
        ));
        assert!(matches!(
            from_str::<CountRecord>(r#"{"count":null}"#),
            Err(JsonError::Parse(_))
        ));
        assert!(matches!(
            from_str::<CountRecord>(r#"{"health":"green"}"#),
            Err(JsonError::UnknownField { .. })
        ));
    }

    #[test]
    fn serde_agrees_with_object_parser() {
        let text = r#"{"ts":"10:00:00","dc":"3"}"#;
        let via_serde: CountRecord = serde_json::from_str(text).unwrap();
        let via_parser: CountRecord = from_str(text).unwrap();
        assert_eq!(via_serde, via_parser);
        assert_eq!(
            serde_json::to_value(&via_serde).unwrap(),
            to_value(&via_parser).unwrap()
        );

        assert!(serde_json::from_str::<CountRecord>(r#"{"count":null}"#).is_err());
        assert!(serde_json::from_str::<CountRecord>(r#"{"health":"green"}"#).is_err());
    }

    #[test]
    fn column_and_alias_together_are_rejected() {
        let text = r#"{"count":1,"dc":2}"#;
        let err = from_str::<CountRecord>(text).unwrap_err();
        assert!(matches!(err, JsonError::Parse(_)), "{err:?}");
        assert!(err.to_string().contains("duplicate field"), "{err}");

        let err = serde_json::from_str::<CountRecord>(text).unwrap_err();
        assert!(err.to_string().contains("duplicate field"), "{err}");
    }
}
