// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::sync::Arc;

use crate::blocks::{Block, ChainEpoch, Error, Tipset, TipsetKey};
use ahash::HashMap;
use cid::Cid;
use tracing::trace;

/// Blocks sharing one height and one parent set, keyed by CID.
pub type Bucket = HashMap<Cid, Arc<Block>>;

/// Returns the grouping key for a parent set. Parent sets holding the same
/// CIDs map to the same key whatever order they were given in.
pub fn key_for_parent_set(parents: &TipsetKey) -> String {
    parents.to_string()
}

/// TipIndex groups incoming blocks by height and then by parent set, so that
/// the candidates for one tipset can be found without scanning every block.
///
/// Nothing is validated on insertion: a bucket may hold blocks that could
/// never form a tipset together. Validation happens when a tipset is
/// assembled from a bucket.
#[derive(Default, Debug)]
pub struct TipIndex {
    by_height: HashMap<ChainEpoch, HashMap<String, Bucket>>,
}

impl TipIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files `block` under its height and parent set.
    pub fn add_block(&mut self, block: impl Into<Arc<Block>>) {
        let block = block.into();
        let key = key_for_parent_set(&block.parents);
        trace!(height = block.height, parents = %key, cid = %block.cid(), "Indexing block");
        self.by_height
            .entry(block.height)
            .or_default()
            .entry(key)
            .or_default()
            .insert(*block.cid(), block);
    }

    /// Number of distinct heights seen.
    pub fn len(&self) -> usize {
        self.by_height.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_height.is_empty()
    }

    /// Number of distinct parent sets seen at `height`.
    pub fn parent_sets_at(&self, height: ChainEpoch) -> usize {
        self.by_height.get(&height).map_or(0, |sets| sets.len())
    }

    pub fn get_by_parents_and_height(
        &self,
        height: ChainEpoch,
        parent_set_key: &str,
    ) -> Option<&Bucket> {
        self.by_height.get(&height)?.get(parent_set_key)
    }

    /// Assembles the tipset for one bucket. Returns `Ok(None)` when the bucket
    /// does not exist.
    pub fn tipset(&self, height: ChainEpoch, parent_set_key: &str) -> Result<Option<Tipset>, Error> {
        self.get_by_parents_and_height(height, parent_set_key)
            .map(|bucket| Tipset::new(bucket.values().cloned()))
            .transpose()
    }

    /// Assembles a tipset from every bucket at `height`.
    pub fn tipsets_at(&self, height: ChainEpoch) -> impl Iterator<Item = Result<Tipset, Error>> {
        self.by_height
            .get(&height)
            .into_iter()
            .flat_map(|sets| sets.values())
            .map(|bucket| Tipset::new(bucket.values().cloned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::Mismatch;
    use crate::test_utils::{cid_for_test, mock_block};

    #[test]
    fn groups_by_height_then_parents() {
        let mut idx = TipIndex::new();

        let contains = |idx: &TipIndex,
                        b: &Arc<Block>,
                        height_entries: usize,
                        parent_set_entries: usize,
                        blocks: usize| {
            assert_eq!(idx.len(), height_entries);
            assert_eq!(idx.parent_sets_at(b.height), parent_set_entries);
            let bucket = idx
                .get_by_parents_and_height(b.height, &key_for_parent_set(&b.parents))
                .unwrap();
            assert_eq!(bucket.len(), blocks);
            assert_eq!(bucket[b.cid()].cid(), b.cid());
        };

        let cid1 = cid_for_test(1);
        let b1 = Arc::new(Block::new(mock_block(42, cid1, 1137, "foo")));
        idx.add_block(b1.clone());
        contains(&idx, &b1, 1, 1, 1);

        let b2 = Arc::new(Block::new(mock_block(42, cid1, 1137, "bar")));
        idx.add_block(b2.clone());
        contains(&idx, &b2, 1, 1, 2);

        let b3 = Arc::new(Block::new(mock_block(42, cid_for_test(3), 1137, "hot")));
        idx.add_block(b3.clone());
        contains(&idx, &b3, 1, 2, 1);

        let b4 = Arc::new(Block::new(mock_block(43, cid_for_test(4), 1137, "monkey")));
        idx.add_block(b4.clone());
        contains(&idx, &b4, 2, 1, 1);
    }

    #[test]
    fn parent_order_does_not_matter() {
        let mut a = mock_block(1, cid_for_test(1), 1, "a");
        a.parents = [cid_for_test(1), cid_for_test(2)].into_iter().collect();
        let mut b = mock_block(1, cid_for_test(1), 1, "b");
        b.parents = [cid_for_test(2), cid_for_test(1)].into_iter().collect();

        let mut idx = TipIndex::new();
        idx.add_block(Block::new(a));
        idx.add_block(Block::new(b));
        assert_eq!(idx.parent_sets_at(43), 1);
    }

    #[test]
    fn assembles_tipsets_from_buckets() {
        let cid1 = cid_for_test(1);
        let mut idx = TipIndex::new();
        assert!(idx.is_empty());
        idx.add_block(Block::new(mock_block(1, cid1, 10, "a")));
        idx.add_block(Block::new(mock_block(1, cid1, 10, "b")));

        let key = key_for_parent_set(&TipsetKey::from(cid1));
        let ts = idx.tipset(43, &key).unwrap().unwrap();
        assert_eq!(ts.len(), 2);
        assert_eq!(ts.height().unwrap(), 43);

        assert_eq!(idx.tipset(44, &key), Ok(None));
        assert_eq!(idx.tipsets_at(44).count(), 0);

        // accepted by the index, rejected when assembled
        idx.add_block(Block::new(mock_block(1, cid1, 11, "c")));
        assert_eq!(
            idx.tipset(43, &key),
            Err(Error::BadTipsetCreate(Mismatch::ParentWeight))
        );
        assert_eq!(idx.tipsets_at(43).filter(Result::is_err).count(), 1);
    }
}
