//! The recursive, permuted, multi-level near-duplicate index.
//!
//! A `PermutedIndex` holds `max_ham_dist + 1` sub-containers, one per block
//! layout. Sub-container 0 uses the identity permutation and is the
//! canonical store (size, exact lookup, and persistence all defer to it);
//! the rest are redundant copies, forward-permuted so their scans can use a
//! cheap prefix-range filter (see [`crate::index::layout`]).
//!
//! Storage cost multiplies by `max_ham_dist + 1` per recursion level; query
//! cost shrinks proportionally. Levels above 2 are pathological, which is
//! why construction rejects anything past [`crate::common::validation::MAX_LEVEL`].

use super::container::Container;
use super::layout::BlockLayout;

/// One level of the recursive permuted index.
pub(crate) struct PermutedIndex {
    layouts: Vec<BlockLayout>,
    containers: Vec<Container>,
}

impl PermutedIndex {
    /// Builds a `max_ham_dist + 1`-way permuted index over
    /// `[mask_begin_pos, mask_end_pos)`, recursing one level shallower into
    /// each sub-container.
    pub fn new(max_ham_dist: u32, level: u32, mask_begin_pos: u32, mask_end_pos: u32) -> Self {
        let layouts = BlockLayout::build_all(max_ham_dist, mask_begin_pos, mask_end_pos);
        let containers = layouts
            .iter()
            .map(|l| Container::new(max_ham_dist, level - 1, 0, mask_end_pos - l.right_width))
            .collect();
        Self { layouts, containers }
    }

    fn forward_permutes(&self, h: u64) -> Vec<u64> {
        self.layouts.iter().map(|l| l.forward(h)).collect()
    }

    /// Inserts `h` into the canonical container and every redundant
    /// permuted copy. Returns `false` (without touching the others) if `h`
    /// was already present.
    pub fn insert(&mut self, h: u64) -> bool {
        if !self.containers[0].insert(h) {
            return false;
        }
        let permutes = self.forward_permutes(h);
        for (container, &perm) in self.containers.iter_mut().zip(&permutes).skip(1) {
            container.insert(perm);
        }
        true
    }

    /// Removes `h` from the canonical container and every redundant copy.
    pub fn remove(&mut self, h: u64) -> bool {
        if !self.containers[0].remove(h) {
            return false;
        }
        let permutes = self.forward_permutes(h);
        for (container, &perm) in self.containers.iter_mut().zip(&permutes).skip(1) {
            container.remove(perm);
        }
        true
    }

    /// Exact membership, delegated to the canonical container.
    pub fn contains(&self, h: u64) -> bool {
        self.containers[0].contains(h)
    }

    /// Size of the canonical container.
    pub fn size(&self) -> usize {
        self.containers[0].size()
    }

    /// Empties every sub-container.
    pub fn clear(&mut self) {
        for c in &mut self.containers {
            c.clear();
        }
    }

    /// Dispatches the query to every block's sub-container, recovering
    /// original fingerprints from each hit via the block's backward
    /// permutation. May yield the same fingerprint more than once across
    /// blocks; the caller (the public index facade) sorts and dedups.
    pub fn find_near_dups(&self, h: u64, mask: u64, ans: &mut Vec<u64>) -> bool {
        ans.clear();
        let mut sub_ans = Vec::new();
        for (layout, container) in self.layouts.iter().zip(&self.containers) {
            let perm = layout.forward(h);
            let prefix_mask = layout.left_backward_mask | mask;
            container.find_near_dups(perm, prefix_mask, &mut sub_ans);
            ans.extend(sub_ans.iter().map(|&y| layout.backward(y)));
        }
        !ans.is_empty()
    }

    /// Short-circuits on the first sub-container hit.
    ///
    /// Queries each sub-container with the permuted value `perm`
    /// consistently — not the original `h` — so the prefix-range
    /// restriction actually matches what each sub-container was built
    /// under. (The reference implementation passes `h` here instead of
    /// `perm`, which only happens to be harmless because the identity
    /// block doesn't permute; see `SPEC_FULL.md` §4.4 and §9 for why this
    /// crate diverges.)
    pub fn find_first_near_dup(&self, h: u64, mask: u64) -> Option<u64> {
        for (layout, container) in self.layouts.iter().zip(&self.containers) {
            let perm = layout.forward(h);
            let prefix_mask = layout.left_backward_mask | mask;
            if let Some(y) = container.find_first_near_dup(perm, prefix_mask) {
                return Some(layout.backward(y));
            }
        }
        None
    }

    /// Canonical fingerprints in ascending order, recursing down through
    /// sub-container 0 at every level.
    pub fn canonical_items(&self) -> Vec<u64> {
        self.containers[0].canonical_items()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove_contains() {
        let mut idx = PermutedIndex::new(3, 1, 0, 64);
        assert!(idx.insert(0x78));
        assert!(!idx.insert(0x78));
        assert!(idx.contains(0x78));
        assert_eq!(idx.size(), 1);
        assert!(idx.remove(0x78));
        assert!(!idx.contains(0x78));
        assert!(!idx.remove(0x78));
    }

    #[test]
    fn test_find_near_dups_basic() {
        let mut idx = PermutedIndex::new(3, 1, 0, 64);
        idx.insert(0x0);
        idx.insert(0x78);

        let mut ans = Vec::new();
        idx.find_near_dups(0x70, 0, &mut ans);
        ans.sort_unstable();
        ans.dedup();
        assert_eq!(ans, vec![0x0, 0x78]);

        idx.find_near_dups(0x0, 0, &mut ans);
        ans.sort_unstable();
        ans.dedup();
        assert_eq!(ans, vec![0x0]);
    }

    #[test]
    fn test_find_first_near_dup_and_has() {
        let mut idx = PermutedIndex::new(3, 1, 0, 64);
        idx.insert(0x0);
        idx.insert(0x78);
        assert!(idx.find_first_near_dup(0x70, 0).is_some());
        assert!(idx.find_first_near_dup(0xFFFFFFFFFFFFFFFF, 0).is_none());
    }

    #[test]
    fn test_clear() {
        let mut idx = PermutedIndex::new(3, 1, 0, 64);
        idx.insert(0x1);
        idx.insert(0x2);
        idx.clear();
        assert_eq!(idx.size(), 0);
    }

    #[test]
    fn test_level_two_matches_level_one_results() {
        let mut lvl1 = PermutedIndex::new(3, 1, 0, 64);
        let mut lvl2 = PermutedIndex::new(3, 2, 0, 64);
        for h in [0x0u64, 0x70, 0x78, 0xDEAD, 0xBEEF] {
            lvl1.insert(h);
            lvl2.insert(h);
        }
        for q in [0x0u64, 0x70, 0xDEAD] {
            let mut a1 = Vec::new();
            let mut a2 = Vec::new();
            lvl1.find_near_dups(q, 0, &mut a1);
            lvl2.find_near_dups(q, 0, &mut a2);
            a1.sort_unstable();
            a1.dedup();
            a2.sort_unstable();
            a2.dedup();
            assert_eq!(a1, a2);
        }
    }
}
