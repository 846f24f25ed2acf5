// Copyright (C) 2024-2025 The Elastic-RS Project.
//
// mod.rs file belongs to the elastic-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! API response models, grouped by endpoint.

pub mod cat_count;
mod lenient;
