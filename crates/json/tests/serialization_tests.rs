//! JsonSerializable contract tests over a small nested model.

use elastic_json::{
    from_str, to_string, to_value, JsonBuilder, JsonError, JsonParser, JsonResult,
    JsonSerializable, ObjectParser, ParseField, ToJsonParams,
};
use once_cell::sync::Lazy;
use serde_json::json;

#[derive(Debug, Default, Clone, PartialEq)]
struct Shard {
    index: Option<String>,
    primary: Option<bool>,
    docs: Option<i64>,
}

#[derive(Debug, Default, Clone, PartialEq)]
struct ShardTable {
    shards: Option<Vec<Shard>>,
}

const INDEX: ParseField = ParseField::new("index").with_aliases(&["i", "idx"]);
const PRIMARY: ParseField = ParseField::new("primary").with_aliases(&["p"]);
const DOCS: ParseField = ParseField::new("docs").with_aliases(&["d"]);
const SHARDS: ParseField = ParseField::new("shards");

static SHARD_PARSER: Lazy<ObjectParser<Shard>> = Lazy::new(|| {
    let mut parser = ObjectParser::<Shard>::new("shard", true, Shard::default);
    parser.declare_string(|s, v| s.index = Some(v), INDEX);
    parser.declare_bool(|s, v| s.primary = Some(v), PRIMARY);
    parser.declare_long(|s, v| s.docs = Some(v), DOCS);
    parser
});

static TABLE_PARSER: Lazy<ObjectParser<ShardTable>> = Lazy::new(|| {
    let mut parser =
        ObjectParser::<ShardTable>::new("shard_table", false, ShardTable::default);
    parser.declare_object_array(
        |t, v| t.shards = Some(v),
        |value, context| SHARD_PARSER.parse(value, context),
        SHARDS,
    );
    parser
});

impl JsonSerializable for Shard {
    fn to_json(&self, builder: &mut JsonBuilder, _params: &ToJsonParams) -> JsonResult<()> {
        builder.start_object()?;
        if let Some(index) = &self.index {
            builder.field_value(INDEX.preferred_name(), index.as_str())?;
        }
        if let Some(primary) = self.primary {
            builder.field_value(PRIMARY.preferred_name(), primary)?;
        }
        if let Some(docs) = self.docs {
            builder.field_value(DOCS.preferred_name(), docs)?;
        }
        builder.end_object()?;
        Ok(())
    }

    fn from_json(parser: &JsonParser) -> JsonResult<Self> {
        SHARD_PARSER.apply(parser, &())
    }
}

impl JsonSerializable for ShardTable {
    fn to_json(&self, builder: &mut JsonBuilder, params: &ToJsonParams) -> JsonResult<()> {
        builder.start_object()?;
        if let Some(shards) = &self.shards {
            builder.array(SHARDS.preferred_name(), shards.as_slice(), params)?;
        }
        builder.end_object()?;
        Ok(())
    }

    fn from_json(parser: &JsonParser) -> JsonResult<Self> {
        TABLE_PARSER.apply(parser, &())
    }
}

#[test]
fn test_nested_round_trip() {
    let table = ShardTable {
        shards: Some(vec![
            Shard {
                index: Some("logs".to_string()),
                primary: Some(true),
                docs: Some(10),
            },
            Shard::default(),
        ]),
    };
    let text = to_string(&table, &ToJsonParams::default()).unwrap();
    assert_eq!(
        text,
        r#"{"shards":[{"index":"logs","primary":true,"docs":10},{}]}"#
    );
    assert_eq!(from_str::<ShardTable>(&text).unwrap(), table);
}

#[test]
fn test_aliases_parse_to_preferred_names() {
    let table: ShardTable = from_str(r#"{"shards":[{"i":"logs","p":"false","d":"3"}]}"#).unwrap();
    assert_eq!(
        to_value(&table).unwrap(),
        json!({"shards": [{"index": "logs", "primary": false, "docs": 3}]})
    );
}

#[test]
fn test_lenient_element_parser_skips_unknown_columns() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let table: ShardTable = from_str(r#"{"shards":[{"index":"logs","state":"STARTED"}]}"#).unwrap();
    assert_eq!(table.shards.unwrap()[0].index.as_deref(), Some("logs"));
}

#[test]
fn test_strict_table_rejects_unknown_fields() {
    let err = from_str::<ShardTable>(r#"{"shards":[],"total":1}"#).unwrap_err();
    assert!(matches!(err, JsonError::UnknownField { ref field, .. } if field == "total"));
}

#[test]
fn test_missing_array_stays_unset() {
    assert_eq!(from_str::<ShardTable>("{}").unwrap(), ShardTable::default());
    assert_eq!(
        to_string(&ShardTable::default(), &ToJsonParams::default()).unwrap(),
        "{}"
    );
}
