// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use super::{Block, ChainEpoch, Error, Mismatch, Ticket};
use cid::Cid;
use itertools::Itertools as _;
use serde::{Deserialize, Serialize};

/// A set of CIDs in canonical (sorted, deduplicated) order. Used both as the
/// parent set of a block and as the identity of a tipset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TipsetKey {
    cids: Vec<Cid>,
}

impl TipsetKey {
    pub fn cids(&self) -> &[Cid] {
        &self.cids
    }

    pub fn len(&self) -> usize {
        self.cids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cids.is_empty()
    }

    pub fn contains(&self, cid: &Cid) -> bool {
        self.cids.binary_search(cid).is_ok()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cid> {
        self.cids.iter()
    }
}

impl FromIterator<Cid> for TipsetKey {
    fn from_iter<T: IntoIterator<Item = Cid>>(iter: T) -> Self {
        Self {
            cids: iter.into_iter().sorted().dedup().collect(),
        }
    }
}

impl From<Cid> for TipsetKey {
    fn from(cid: Cid) -> Self {
        Self { cids: vec![cid] }
    }
}

impl<'de> Deserialize<'de> for TipsetKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Vec::<Cid>::deserialize(deserializer).map(Self::from_iter)
    }
}

impl fmt::Display for TipsetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for cid in &self.cids {
            write!(f, " {cid}")?;
        }
        write!(f, " }}")
    }
}

/// A set of blocks mined at the same height on top of the same parents with
/// the same parent weight. Consensus treats a tipset as a single chain head.
///
/// The three shared fields are checked on every insertion, so a `Tipset`
/// value is always consistent. Member blocks are shared: cloning a tipset
/// copies the membership, never the blocks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tipset {
    blocks: BTreeMap<Cid, Arc<Block>>,
}

/// Checks that `candidate` competes at the same chain position as `member`.
fn same_position(member: &Block, candidate: &Block) -> Result<(), Mismatch> {
    if member.height != candidate.height {
        return Err(Mismatch::Height);
    }
    if member.parents != candidate.parents {
        return Err(Mismatch::Parents);
    }
    if member.parent_weight() != candidate.parent_weight() {
        return Err(Mismatch::ParentWeight);
    }
    Ok(())
}

impl Tipset {
    /// Builds a tipset from a non-empty collection of blocks. Either every
    /// block agrees on height, parents and parent weight, or nothing is built.
    /// Blocks with the same CID collapse into one member.
    pub fn new<I, B>(blocks: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = B>,
        B: Into<Arc<Block>>,
    {
        let blocks: Vec<Arc<Block>> = blocks.into_iter().map(Into::into).collect();
        let (first, rest) = blocks.split_first().ok_or(Error::EmptyTipset)?;
        for block in rest {
            same_position(first, block).map_err(Error::BadTipsetCreate)?;
        }
        Ok(Self {
            blocks: blocks
                .into_iter()
                .map(|block| (*block.cid(), block))
                .collect(),
        })
    }

    /// Adds a block. Fails without touching the tipset if the block disagrees
    /// with the current members. Any block can join an empty tipset.
    pub fn add_block(&mut self, block: impl Into<Arc<Block>>) -> Result<(), Error> {
        let block = block.into();
        if let Some(member) = self.blocks.values().next() {
            same_position(member, &block).map_err(Error::BadTipsetAdd)?;
        }
        self.blocks.insert(*block.cid(), block);
        Ok(())
    }

    fn any_block(&self) -> Result<&Arc<Block>, Error> {
        self.blocks.values().next().ok_or(Error::EmptyTipset)
    }

    pub fn height(&self) -> Result<ChainEpoch, Error> {
        Ok(self.any_block()?.height)
    }

    pub fn parents(&self) -> Result<&TipsetKey, Error> {
        Ok(&self.any_block()?.parents)
    }

    /// Parent weight as a `(numerator, denominator)` pair.
    pub fn parent_weight(&self) -> Result<(u64, u64), Error> {
        Ok(self.any_block()?.parent_weight())
    }

    /// The smallest ticket of all members, compared byte-wise.
    pub fn min_ticket(&self) -> Result<&Ticket, Error> {
        self.blocks
            .values()
            .map(|block| &block.ticket)
            .min()
            .ok_or(Error::EmptyTipset)
    }

    /// The member holding the smallest ticket. Ties go to the smallest CID.
    pub fn min_ticket_block(&self) -> Result<&Arc<Block>, Error> {
        self.blocks
            .values()
            .min_by(|a, b| a.ticket.cmp(&b.ticket).then_with(|| a.cid().cmp(b.cid())))
            .ok_or(Error::EmptyTipset)
    }

    /// CIDs of the member blocks in canonical order.
    pub fn to_sorted_cid_set(&self) -> TipsetKey {
        self.blocks.keys().copied().collect()
    }

    /// All member blocks. Callers must not rely on the order.
    pub fn to_vec(&self) -> Vec<Arc<Block>> {
        self.blocks.values().cloned().collect()
    }

    pub fn get(&self, cid: &Cid) -> Option<&Arc<Block>> {
        self.blocks.get(cid)
    }

    pub fn contains(&self, cid: &Cid) -> bool {
        self.blocks.contains_key(cid)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Block>> {
        self.blocks.values()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// A tipset is identified by its sorted member CIDs, not by its content.
impl fmt::Display for Tipset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_sorted_cid_set().fmt(f)
    }
}
