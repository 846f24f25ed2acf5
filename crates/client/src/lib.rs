// Copyright (C) 2024-2025 The Elastic-RS Project.
//
// lib.rs file belongs to the elastic-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Elastic Client Models
//!
//! Typed response models for the Elasticsearch HTTP API. Each model
//! implements [`elastic_json::JsonSerializable`] and also derives serde,
//! producing the same wire shape either way.

pub mod models;

pub use elastic_json;

// Re-export commonly used types
pub use models::cat_count::{CountRecord, CountResponse};
