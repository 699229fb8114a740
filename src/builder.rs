use crate::filter::HotFilter;
use thiserror::Error;

/// Default level-0 saturation estimate at which rotation fires.
pub const DEFAULT_DEMOTE_AT: f64 = 0.01;

/// Rejected construction-time configuration.
///
/// `width`, `depth` and `demote_at` are immutable for the filter's lifetime,
/// so they are validated once, up front.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// `width` must be in `1..=31`: each level holds `2^width` bits and
    /// positions are drawn from the low 32 hash bits.
    #[error("width must be in 1..=31, got {0}")]
    Width(u32),
    /// `depth` must be at least 1.
    #[error("depth must be at least 1, got {0}")]
    Depth(usize),
    /// `demote_at` must be a probability in `(0, 1]`.
    #[error("demote_at must be within (0, 1], got {0}")]
    DemoteAt(f64),
}

/// Builder for configuring and constructing a [`HotFilter`].
///
/// # Example
/// ```
/// use hotfilter::HotFilterBuilder;
///
/// let filter = HotFilterBuilder::new(12, 4)
///     .demote_at(0.05)
///     .build()
///     .unwrap();
/// assert_eq!(filter.depth(), 4);
/// ```
pub struct HotFilterBuilder {
    width: u32,
    depth: usize,
    demote_at: f64,
}

impl HotFilterBuilder {
    pub fn new(width: u32, depth: usize) -> Self {
        HotFilterBuilder {
            width,
            depth,
            demote_at: DEFAULT_DEMOTE_AT,
        }
    }

    /// Level-0 saturation estimate that triggers demotion of the oldest
    /// level; a probability in `(0, 1]` (default: 0.01).  Setting it to
    /// `1.0` effectively disables aging.
    pub fn demote_at(mut self, p: f64) -> Self {
        self.demote_at = p;
        self
    }

    /// Validates the configuration and constructs the filter.
    pub fn build(self) -> Result<HotFilter, ConfigError> {
        if self.width < 1 || self.width > 31 {
            return Err(ConfigError::Width(self.width));
        }
        if self.depth < 1 {
            return Err(ConfigError::Depth(self.depth));
        }
        if !(self.demote_at > 0.0 && self.demote_at <= 1.0) {
            return Err(ConfigError::DemoteAt(self.demote_at));
        }
        Ok(HotFilter::with_config(self.width, self.depth, self.demote_at))
    }
}
