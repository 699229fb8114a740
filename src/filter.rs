use crate::hash;
use crate::key::Key;
use crate::level::Level;
use crate::stats::FilterStats;

/// A leveled bit-array frequency filter with self-referential aging.
///
/// `HotFilter` answers one question in fixed memory: has this key been seen
/// often enough to be considered hot?  Instead of per-key counters it keeps
/// `depth` bit-arrays of `2^width` bits, each with its own XOR seed, and
/// represents a key's approximate touch-count as the number of levels in
/// which the key's seeded position is marked.
///
/// Aging is driven by the filter's own insertion statistics rather than a
/// clock: once the estimated fill probability of the oldest level crosses
/// `demote_at`, that level is discarded and a fresh one takes the newest
/// position, enforcing approximate recency.
///
/// The structure is single-threaded by design: no internal synchronization,
/// no I/O, every operation bounded by `depth`.  Callers sharing a filter
/// across threads must wrap it in their own lock.
///
/// # Example
/// ```
/// use hotfilter::HotFilter;
///
/// let mut filter = HotFilter::new(8, 3).unwrap();
/// assert_eq!(filter.get("a"), 0); // never touched
/// assert_eq!(filter.touch("a"), 1);
/// assert_eq!(filter.get("a"), 2);
/// assert_eq!(filter.touch("a"), 2);
/// assert_eq!(filter.touch("a"), 3);
/// assert_eq!(filter.get("a"), 4); // saturated: depth + 1
/// ```
#[derive(Debug)]
pub struct HotFilter {
    width: u32,
    depth: usize,
    demote_at: f64,
    /// Position mask, `2^width - 1`.
    mask: u32,
    /// Physical level slots.  Logical level `i` (0 = oldest) lives at slot
    /// `(base + i) % depth`; rotation advances `base` instead of shifting
    /// the slots themselves.
    slots: Vec<Level>,
    base: usize,
    /// New level-0 records since the last rotation.
    lifetime: u64,
    touches: u64,
    rotations: u64,
}

impl HotFilter {
    /// A filter with the default demotion threshold of 0.01.
    ///
    /// Equivalent to building via [`crate::HotFilterBuilder`] without
    /// overriding `demote_at`.
    pub fn new(width: u32, depth: usize) -> Result<Self, crate::ConfigError> {
        crate::HotFilterBuilder::new(width, depth).build()
    }

    /// Called by the builder once the configuration has been validated.
    pub(crate) fn with_config(width: u32, depth: usize, demote_at: f64) -> Self {
        let mask = (1u32 << width) - 1;
        let size = 1usize << width;
        // Seed identities count down so that logical level 0 starts with
        // the identity `depth - 1`, matching the construction order of the
        // seed pool.
        let slots = (0..depth)
            .map(|i| Level::new(size, hash::level_seed((depth - 1 - i) as u8, mask)))
            .collect();
        HotFilter {
            width,
            depth,
            demote_at,
            mask,
            slots,
            base: 0,
            lifetime: 0,
            touches: 0,
            rotations: 0,
        }
    }

    /// Records an observation of `key`.
    ///
    /// Walks the levels oldest-first and sets the key's seeded position in
    /// the first level where it is still unset.  Returns the 1-based depth
    /// this touch caused the key to reach, in `[1, depth + 1]`; the maximum
    /// means the key was already recorded at every level.
    ///
    /// A return of 1 is a brand-new level-0 record and feeds the aging
    /// counter, which may trigger a rotation (see [`Self::rotations`]).
    pub fn touch<'a>(&mut self, key: impl Into<Key<'a>>) -> usize {
        let h = hash::position(&key.into().clamped(), self.mask);
        self.touches += 1;

        let mut i = 0;
        while i < self.depth {
            let slot = (self.base + i) % self.depth;
            if !self.slots[slot].probe(h) {
                self.slots[slot].record(h);
                break;
            }
            i += 1;
        }
        let reached = i + 1;

        if reached == 1 {
            self.lifetime += 1;
            if self.saturation() >= self.demote_at {
                self.rotate();
            }
        }
        reached
    }

    /// Reports the current recorded depth of `key` without mutating
    /// anything — no bits, no aging counter, no rotation.
    ///
    /// Returns 0 if the key has no record at all, otherwise the index of
    /// the first level whose bit is not yet set, 1-based — one past the
    /// last confirmed level, so an existing key's `get` exceeds by exactly
    /// one the `touch` result that created its record.  Range is
    /// `[0, depth + 1]`.
    pub fn get<'a>(&self, key: impl Into<Key<'a>>) -> usize {
        let h = hash::position(&key.into().clamped(), self.mask);

        let mut i = 0;
        while i < self.depth {
            if !self.slots[(self.base + i) % self.depth].probe(h) {
                if i == 0 {
                    // No record anywhere; reserved sentinel.
                    return 0;
                }
                break;
            }
            i += 1;
        }
        i + 1
    }

    /// Estimated probability that a fixed slot of the oldest level has been
    /// hit at least once by the `lifetime` insertions since the last
    /// rotation: `1 - exp(-lifetime / 2^width)`.
    ///
    /// Rotation fires when this estimate reaches `demote_at`.
    pub fn saturation(&self) -> f64 {
        1.0 - (-(self.lifetime as f64) / (1u64 << self.width) as f64).exp()
    }

    /// Discards the oldest level and starts a fresh one in its place.
    ///
    /// The slot keeps its seed, so the finite pool of `depth` seeds is
    /// cyclically reassigned to whichever position is currently newest —
    /// no seed is ever invented or discarded.
    fn rotate(&mut self) {
        self.lifetime = 0;
        self.slots[self.base].clear();
        self.base = (self.base + 1) % self.depth;
        self.rotations += 1;
    }

    /// Configured hash width; each level holds `2^width` bits.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of levels.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Level-0 saturation estimate at which rotation fires.
    pub fn demote_at(&self) -> f64 {
        self.demote_at
    }

    /// New level-0 records since the last rotation.
    pub fn lifetime(&self) -> u64 {
        self.lifetime
    }

    /// Number of rotations performed so far.
    pub fn rotations(&self) -> u64 {
        self.rotations
    }

    /// Point-in-time snapshot of the filter's counters.
    pub fn stats(&self) -> FilterStats {
        FilterStats {
            touches: self.touches,
            lifetime: self.lifetime,
            rotations: self.rotations,
            saturation: self.saturation(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untouched_key_reads_zero() {
        let filter = HotFilter::new(8, 3).unwrap();
        assert_eq!(filter.get("never"), 0);
    }

    #[test]
    fn first_touch_reaches_level_one() {
        let mut filter = HotFilter::new(8, 3).unwrap();
        assert_eq!(filter.touch("k"), 1);
    }

    #[test]
    fn get_is_one_past_touch() {
        // Lookup reports the first level whose bit is NOT yet set, so it
        // exceeds the creating touch's result by exactly one.
        let mut filter = HotFilter::new(8, 3).unwrap();
        for expected in 1..=3 {
            assert_eq!(filter.touch("k"), expected);
            assert_eq!(filter.get("k"), expected + 1);
        }
    }

    #[test]
    fn touch_saturates_at_depth_plus_one() {
        let mut filter = HotFilter::new(8, 2).unwrap();
        assert_eq!(filter.touch("k"), 1);
        assert_eq!(filter.touch("k"), 2);
        assert_eq!(filter.touch("k"), 3);
        assert_eq!(filter.touch("k"), 3, "must keep saturating");
        assert_eq!(filter.get("k"), 3);
    }

    #[test]
    fn lifetime_counts_only_new_level_zero_records() {
        let mut filter = HotFilter::new(16, 3).unwrap();
        filter.touch("a"); // new level-0 record
        filter.touch("a"); // level 1, no lifetime change
        filter.touch("b"); // new level-0 record
        assert_eq!(filter.lifetime(), 2);
    }

    #[test]
    fn get_never_advances_aging() {
        let filter = HotFilter::new(4, 2).unwrap();
        for i in 0..1_000_i64 {
            filter.get(i);
        }
        assert_eq!(filter.lifetime(), 0);
        assert_eq!(filter.rotations(), 0);
    }

    #[test]
    fn narrow_filter_rotates_on_first_insert() {
        // width 4 → 16 slots; a single insertion already gives
        // 1 - exp(-1/16) ≈ 0.061 ≥ 0.01, so rotation fires immediately and
        // the freshly written level-0 bit is discarded.
        let mut filter = HotFilter::new(4, 2).unwrap();
        assert_eq!(filter.touch("k"), 1);
        assert_eq!(filter.rotations(), 1);
        assert_eq!(filter.lifetime(), 0);
        assert_eq!(filter.get("k"), 0, "record must age out after rotation");
    }

    #[test]
    fn saturation_tracks_lifetime() {
        let mut filter = crate::HotFilterBuilder::new(8, 2)
            .demote_at(1.0)
            .build()
            .unwrap();
        assert_eq!(filter.saturation(), 0.0);
        filter.touch("a");
        let one = filter.saturation();
        filter.touch("b");
        assert!(filter.saturation() > one);
    }

    #[test]
    fn stats_snapshot_is_consistent() {
        let mut filter = HotFilter::new(16, 2).unwrap();
        filter.touch("a");
        filter.touch("a");
        let stats = filter.stats();
        assert_eq!(stats.touches, 2);
        assert_eq!(stats.lifetime, 1);
        assert_eq!(stats.rotations, 0);
        assert!(stats.saturation > 0.0);
    }
}
