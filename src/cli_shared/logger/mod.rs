// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use anyhow::Context as _;
use tracing_subscriber::{EnvFilter, prelude::*};

use crate::cli_shared::cli::LogConfig;

/// Installs the global `tracing` subscriber: a console layer filtered by
/// `RUST_LOG`, or by the configured directives when it is unset.
pub fn setup_logger(config: &LogConfig) -> anyhow::Result<()> {
    let filter = get_env_filter(default_env_filter(config)?);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::Layer::new()
                .with_ansi(config.ansi)
                .with_filter(filter),
        )
        .try_init()
        .context("failed to install the tracing subscriber")
}

/// Returns an [`EnvFilter`] according to the `RUST_LOG` environment variable, or a default
/// - see [`default_env_filter`]
fn get_env_filter(def: EnvFilter) -> EnvFilter {
    use std::env::{
        self,
        VarError::{NotPresent, NotUnicode},
    };
    match env::var(tracing_subscriber::EnvFilter::DEFAULT_ENV) {
        Ok(s) => EnvFilter::new(s),
        Err(NotPresent) => def,
        Err(NotUnicode(_)) => EnvFilter::default(),
    }
}

fn default_env_filter(config: &LogConfig) -> anyhow::Result<EnvFilter> {
    EnvFilter::try_new(&config.filter)
        .with_context(|| format!("invalid log filter {:?}", config.filter))
}
