// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use thiserror::Error;

mod block;
mod ticket;
mod tipset;
mod vrf_proof;

pub use block::{Block, MessageReceipt, RawBlock, RawBlockBuilder};
pub use ticket::Ticket;
pub use tipset::{Tipset, TipsetKey};
pub use vrf_proof::VRFProof;

/// Block height. Every block sits one above each of its parents.
pub type ChainEpoch = u64;

/// Blockchain blocks error
#[derive(Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The blocks handed to [`Tipset::new`] are not competing at the same
    /// position in the chain.
    #[error("Bad tipset creation: {0}")]
    BadTipsetCreate(Mismatch),
    /// The block handed to [`Tipset::add_block`] does not fit the tipset.
    #[error("Bad tipset add: {0}")]
    BadTipsetAdd(Mismatch),
    /// An accessor that needs a member block was called on an empty tipset.
    #[error("Empty tipset")]
    EmptyTipset,
}

/// The field on which two blocks disagree when they cannot share a tipset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Mismatch {
    #[error("blocks have different heights")]
    Height,
    #[error("blocks have different parent sets")]
    Parents,
    #[error("blocks have different parent weights")]
    ParentWeight,
}
