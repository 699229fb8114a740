//! A compact frequency-estimating membership structure.
//!
//! [`HotFilter`] decides whether a key has been observed often enough to be
//! considered hot — e.g. worth admitting into a cache — in fixed memory.  It
//! layers `depth` bit-arrays of `2^width` bits ("levels") and encodes a
//! key's approximate touch-count as the number of levels in which the key's
//! seeded position is marked.  It ages itself without a clock: once its own
//! insertion statistics suggest the oldest level is saturating past
//! `demote_at`, that level is discarded wholesale.
//!
//! ```
//! use hotfilter::HotFilter;
//!
//! let mut filter = HotFilter::new(8, 3).unwrap();
//! assert_eq!(filter.touch("page:/index"), 1);
//! assert_eq!(filter.touch("page:/index"), 2);
//! assert_eq!(filter.get("page:/index"), 3);
//! assert_eq!(filter.get("page:/about"), 0);
//! ```

mod builder;
mod filter;
mod hash;
mod key;
mod level;
mod stats;

pub use builder::{ConfigError, HotFilterBuilder, DEFAULT_DEMOTE_AT};
pub use filter::HotFilter;
pub use key::Key;
pub use stats::FilterStats;
