// Copyright (C) 2024-2025 The Elastic-RS Project.
//
// lenient.rs file belongs to the elastic-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! serde helpers matching the object parsers' input rules.

use serde::{de, Deserialize, Deserializer};

/// Accepts a number or a numeric string. `null` is rejected; a missing
/// field is handled by `#[serde(default)]`.
pub(crate) fn long<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum LongOrString {
        Long(i64),
        String(String),
    }

    match LongOrString::deserialize(deserializer)? {
        LongOrString::Long(value) => Ok(Some(value)),
        LongOrString::String(text) => text
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("[{text}] is not a long"))),
    }
}

/// Wraps a present value in `Some`, rejecting an explicit `null`.
pub(crate) fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
