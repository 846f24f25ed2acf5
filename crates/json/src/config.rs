//! Parser configuration.

use crate::{JsonError, JsonResult};
use serde::{Deserialize, Serialize};

/// Default maximum nesting depth accepted by [`crate::JsonParser`]
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 64;

/// Limits applied when reading documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParserConfig {
    /// Deepest object/array nesting accepted; the root counts as depth 1
    pub max_nesting_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

impl ParserConfig {
    /// Loads a configuration from TOML text and validates it
    pub fn from_toml_str(text: &str) -> JsonResult<Self> {
        let config: Self = toml::from_str(text).map_err(|e| JsonError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the limits are usable
    pub fn validate(&self) -> JsonResult<()> {
        if self.max_nesting_depth == 0 {
            return Err(JsonError::Config(
                "max_nesting_depth must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
