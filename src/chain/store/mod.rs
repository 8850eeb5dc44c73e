// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

mod tip_index;

pub use self::tip_index::{Bucket, TipIndex, key_for_parent_set};
