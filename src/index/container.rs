//! `Container`: the sum type standing in for the reference implementation's
//! virtual-dispatch base class.
//!
//! Every node in the recursive index is either a [`SequentialSet`] leaf
//! (`level == 0`) or a [`PermutedIndex`] that fans out into `max_ham_dist + 1`
//! further containers. `max_ham_dist` is carried alongside the variant
//! (rather than only inside `PermutedIndex`) because a leaf `SequentialSet`
//! has no notion of distance threshold on its own — every near-dup query
//! needs it supplied from outside, exactly as the reference
//! `SimhashContainer` base class carries `mMaxHamDist` at every level.

use super::permuted::PermutedIndex;
use super::sequential_set::SequentialSet;

enum Inner {
    Sequential(SequentialSet),
    Permuted(PermutedIndex),
}

pub(crate) struct Container {
    max_ham_dist: u32,
    inner: Inner,
}

impl Container {
    /// `level == 0` yields a plain [`SequentialSet`] (no permutation at
    /// all — the "don't use the index" escape hatch); `level >= 1` builds a
    /// [`PermutedIndex`] recursing one level shallower.
    ///
    /// Recursion also bottoms out early, regardless of the requested
    /// `level`, once the mask window is empty (`mask_begin_pos ==
    /// mask_end_pos`): this happens when `max_ham_dist == 0` hands an
    /// already-single, full-width block down to a further recursion level —
    /// there are no bits left to split into sub-blocks, so going further
    /// would ask `BlockLayout::build_all` to tile an empty range.
    pub fn new(max_ham_dist: u32, level: u32, mask_begin_pos: u32, mask_end_pos: u32) -> Self {
        let inner = if level == 0 || mask_begin_pos >= mask_end_pos {
            Inner::Sequential(SequentialSet::new())
        } else {
            Inner::Permuted(PermutedIndex::new(max_ham_dist, level, mask_begin_pos, mask_end_pos))
        };
        Container { max_ham_dist, inner }
    }

    pub fn insert(&mut self, h: u64) -> bool {
        match &mut self.inner {
            Inner::Sequential(s) => s.insert(h),
            Inner::Permuted(p) => p.insert(h),
        }
    }

    pub fn remove(&mut self, h: u64) -> bool {
        match &mut self.inner {
            Inner::Sequential(s) => s.remove(h),
            Inner::Permuted(p) => p.remove(h),
        }
    }

    pub fn contains(&self, h: u64) -> bool {
        match &self.inner {
            Inner::Sequential(s) => s.contains(h),
            Inner::Permuted(p) => p.contains(h),
        }
    }

    pub fn size(&self) -> usize {
        match &self.inner {
            Inner::Sequential(s) => s.size(),
            Inner::Permuted(p) => p.size(),
        }
    }

    pub fn clear(&mut self) {
        match &mut self.inner {
            Inner::Sequential(s) => s.clear(),
            Inner::Permuted(p) => p.clear(),
        }
    }

    pub fn find_near_dups(&self, h: u64, mask: u64, ans: &mut Vec<u64>) -> bool {
        match &self.inner {
            Inner::Sequential(s) => s.find_near_dups(h, self.max_ham_dist, mask, ans),
            Inner::Permuted(p) => p.find_near_dups(h, mask, ans),
        }
    }

    pub fn find_first_near_dup(&self, h: u64, mask: u64) -> Option<u64> {
        match &self.inner {
            Inner::Sequential(s) => s.find_first_near_dup(h, self.max_ham_dist, mask),
            Inner::Permuted(p) => p.find_first_near_dup(h, mask),
        }
    }

    pub fn has_near_dup(&self, h: u64, mask: u64) -> bool {
        self.find_first_near_dup(h, mask).is_some()
    }

    /// Canonical fingerprints in ascending order, used by `save`/`load`.
    pub fn canonical_items(&self) -> Vec<u64> {
        match &self.inner {
            Inner::Sequential(s) => s.iter().collect(),
            Inner::Permuted(p) => p.canonical_items(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_zero_is_plain_sequential() {
        let mut c = Container::new(3, 0, 0, 64);
        assert!(c.insert(0x78));
        assert!(c.contains(0x78));
        assert_eq!(c.size(), 1);

        let mut ans = Vec::new();
        c.find_near_dups(0x70, 0, &mut ans);
        assert_eq!(ans, vec![0x78]);
    }

    #[test]
    fn test_level_one_is_permuted() {
        let mut c = Container::new(3, 1, 0, 64);
        c.insert(0x0);
        c.insert(0x78);
        assert!(c.has_near_dup(0x70, 0));
        assert!(!c.has_near_dup(0xFFFFFFFFFFFFFFFF, 0));
    }

    #[test]
    fn test_remove_and_clear() {
        let mut c = Container::new(3, 1, 0, 64);
        c.insert(0x1);
        c.insert(0x2);
        assert!(c.remove(0x1));
        assert!(!c.contains(0x1));
        c.clear();
        assert_eq!(c.size(), 0);
    }

    #[test]
    fn test_canonical_items_sorted() {
        let mut c = Container::new(3, 1, 0, 64);
        for h in [5u64, 1, 3] {
            c.insert(h);
        }
        assert_eq!(c.canonical_items(), vec![1, 3, 5]);
    }

    #[test]
    fn test_max_ham_dist_zero_bottoms_out_past_one_level() {
        // d = 0 collapses the mask window to a single full-width block, so a
        // sub-container one level deeper gets handed an empty window
        // (mask_begin_pos == mask_end_pos). Recursion must bottom out there
        // instead of asking BlockLayout::build_all to tile an empty range.
        for level in [1u32, 2, 3] {
            let mut c = Container::new(0, level, 0, 64);
            assert!(c.insert(0x78));
            assert!(c.contains(0x78));
            assert!(c.has_near_dup(0x78, 0));
        }
    }
}
