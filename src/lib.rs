// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Consensus-facing core of a Filecoin node: tipset construction, the tip
//! index that groups incoming blocks by height and parent set, and the
//! message pool.

pub mod blocks;
pub mod chain;
mod cli_shared;
pub mod message;
pub mod message_pool;
pub mod metrics;
#[cfg(test)]
mod test_utils;
pub mod utils;

pub use cli_shared::cli::{Config, LogConfig};
pub use cli_shared::logger::setup_logger;
