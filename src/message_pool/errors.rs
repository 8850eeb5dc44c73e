// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use cid::Cid;
use thiserror::Error;

/// MessagePool error.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// No message with this CID is pending.
    #[error("message {0} not found")]
    NotFound(Cid),
    /// The caller gave up waiting before enough messages arrived.
    #[error("waiting for messages was cancelled")]
    Cancelled,
}
