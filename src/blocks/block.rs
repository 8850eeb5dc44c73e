// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::ops::Deref;
use std::sync::OnceLock;

use super::{ChainEpoch, Ticket, TipsetKey};
use crate::message::SignedMessage;
use crate::utils::cid::CidCborExt as _;
use cid::Cid;
use derive_builder::Builder;
use fvm_ipld_encoding::RawBytes;
use fvm_ipld_encoding::tuple::*;
use fvm_shared4::address::Address;
use serde::{Deserialize, Serialize};

/// Result of applying one message of a block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize_tuple, Deserialize_tuple)]
pub struct MessageReceipt {
    pub exit_code: u8,
    pub return_values: Vec<RawBytes>,
    pub gas_used: u64,
}

/// The content of a candidate block, as produced by block validation.
///
/// Usage:
/// ```
/// use forest_chain_core::blocks::{Block, RawBlock, TipsetKey};
///
/// let raw = RawBlock::builder()
///     .height(43)
///     .parent_weight_num(1337)
///     .build()
///     .unwrap();
/// let block = Block::new(raw);
///
/// assert_eq!(block.height, 43);
/// assert_eq!(block.parent_weight(), (1337, 1));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Builder, Serialize_tuple, Deserialize_tuple)]
#[builder(name = "RawBlockBuilder")]
pub struct RawBlock {
    /// The address of the miner actor that mined this block
    #[builder(default = "Address::new_id(0)")]
    pub miner: Address,
    #[builder(default)]
    pub ticket: Ticket,
    /// The set of parents this block was based on.
    /// Typically one, but can be several in the case where there were multiple
    /// winning ticket-holders for an epoch
    #[builder(default)]
    pub parents: TipsetKey,
    /// Numerator of the aggregate chain weight of the parent set
    #[builder(default)]
    pub parent_weight_num: u64,
    /// Denominator of the aggregate chain weight of the parent set
    #[builder(default = "1")]
    pub parent_weight_denom: u64,
    #[builder(default)]
    pub height: ChainEpoch,
    #[builder(default)]
    pub nonce: u64,
    #[builder(default)]
    pub messages: Vec<SignedMessage>,
    /// The CID of the parent state root after calculating parent tipset.
    #[builder(default)]
    pub state_root: Cid,
    #[builder(default)]
    pub message_receipts: Vec<MessageReceipt>,
}

impl RawBlock {
    pub fn builder() -> RawBlockBuilder {
        RawBlockBuilder::default()
    }

    pub fn cid(&self) -> Cid {
        Cid::from_cbor_blake2b256(self).expect("block serialization is infallible")
    }

    /// Parent weight as a `(numerator, denominator)` pair.
    pub fn parent_weight(&self) -> (u64, u64) {
        (self.parent_weight_num, self.parent_weight_denom)
    }
}

/// A validated block. The content is frozen at construction, and the CID is
/// computed once on first use.
///
/// Blocks are shared between tipsets and indexes as `Arc<Block>`; there is no
/// way to mutate one after it was built.
#[derive(Debug, Clone)]
pub struct Block {
    uncached: RawBlock,
    cid: OnceLock<Cid>,
}

impl PartialEq for Block {
    fn eq(&self, other: &Self) -> bool {
        self.uncached == other.uncached
    }
}

impl Eq for Block {}

impl Deref for Block {
    type Target = RawBlock;

    fn deref(&self) -> &Self::Target {
        &self.uncached
    }
}

impl From<RawBlock> for Block {
    fn from(uncached: RawBlock) -> Self {
        Self::new(uncached)
    }
}

impl Block {
    pub fn new(uncached: RawBlock) -> Self {
        Self {
            uncached,
            cid: OnceLock::new(),
        }
    }

    pub fn cid(&self) -> &Cid {
        self.cid.get_or_init(|| self.uncached.cid())
    }

    /// Returns the block content, for building a modified copy.
    pub fn into_raw(self) -> RawBlock {
        self.uncached
    }
}

impl Serialize for Block {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.uncached.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Block {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        RawBlock::deserialize(deserializer).map(Self::new)
    }
}
