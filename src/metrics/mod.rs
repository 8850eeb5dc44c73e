// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::sync::LazyLock;

use parking_lot::{RwLock, RwLockWriteGuard};
use prometheus_client::registry::Registry;

static DEFAULT_REGISTRY: LazyLock<RwLock<Registry>> = LazyLock::new(Default::default);

pub fn default_registry<'a>() -> RwLockWriteGuard<'a, Registry> {
    DEFAULT_REGISTRY.write()
}

/// Encodes every registered metric in the Prometheus text format.
pub fn render() -> anyhow::Result<String> {
    let mut buffer = String::new();
    prometheus_client::encoding::text::encode(&mut buffer, &DEFAULT_REGISTRY.read())?;
    Ok(buffer)
}
