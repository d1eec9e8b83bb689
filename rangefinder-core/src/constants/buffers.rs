//! Buffer Sizes for Median Filtering
//!
//! Windows live inline in the filter, so the storage bound is a const
//! generic. The runtime window size picked at construction may be anything
//! from 1 up to that bound.

/// Default storage bound for a median window (samples).
///
/// Each slot is a `u16`, so a full window costs 64 bytes plus the sort
/// copy made on every insertion. Polling loops typically use 3 to 15.
pub const MAX_FILTER_WINDOW: usize = 32;

/// Window sizes at or below this value bypass filtering.
///
/// A one-sample median is the sample itself.
pub const FILTER_BYPASS_SIZE: usize = 1;
