/// A point-in-time snapshot of a filter's counters.
///
/// Plain values, no synchronization: the filter itself is single-threaded.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterStats {
    /// Total `touch` calls over the filter's lifetime.
    pub touches: u64,
    /// New level-0 records since the last rotation.
    pub lifetime: u64,
    /// Rotations performed so far.
    pub rotations: u64,
    /// Current level-0 saturation estimate, `1 - exp(-lifetime / 2^width)`.
    pub saturation: f64,
}
