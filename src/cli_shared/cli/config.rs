// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::path::Path;

use crate::message_pool::MpoolConfig;
use crate::utils::io::{read_toml, read_toml_file};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
#[serde(default)]
pub struct LogConfig {
    /// Default `tracing` filter directives, used when `RUST_LOG` is not set.
    pub filter: String,
    /// Colored console output.
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_owned(),
            ansi: true,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Default, Debug, Clone)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
    pub mpool: MpoolConfig,
}

impl Config {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        read_toml_file(path)
    }

    pub fn from_toml_str(toml_string: &str) -> anyhow::Result<Self> {
        read_toml(toml_string)
    }
}
