// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_with::{DurationSeconds, serde_as};

/// Config options for a message pool
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MpoolConfig {
    /// Longest time a single wait for messages may block, in seconds, even if
    /// the caller never cancels. Unbounded when unset.
    #[serde_as(as = "Option<DurationSeconds<u64>>")]
    pub max_wait: Option<Duration>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::io::read_toml;

    #[test]
    fn max_wait_is_read_in_seconds() {
        let config: MpoolConfig = read_toml("max_wait = 30").unwrap();
        assert_eq!(config.max_wait, Some(Duration::from_secs(30)));

        let config: MpoolConfig = read_toml("").unwrap();
        assert_eq!(config, MpoolConfig::default());
    }
}
