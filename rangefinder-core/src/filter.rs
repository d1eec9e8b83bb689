//! Fixed-Capacity Running Median Filter
//!
//! ## Overview
//!
//! IR rangers produce occasional wild readings (reflections, ambient light,
//! supply ripple). A running median discards such spikes without the lag a
//! moving average adds to genuine steps. The filter keeps the last
//! `capacity` values in a ring and reports the median of that window on
//! every insertion.
//!
//! ## Storage
//!
//! The window lives inline in a `heapless::Vec<u16, N>`: `N` is the
//! compile-time storage bound, while the runtime `capacity` (1..=N) is
//! chosen at construction and never changes afterwards. Every slot is
//! pre-filled, so the window always holds exactly `capacity` values and a
//! median is defined from the first insertion on.
//!
//! ```text
//! capacity = 3, fill = 0
//!
//! insert 10   [10,  0,  0]  sorted [ 0,  0, 10]  -> 0
//! insert 20   [10, 20,  0]  sorted [ 0, 10, 20]  -> 10
//! insert 30   [10, 20, 30]  sorted [10, 20, 30]  -> 20
//! insert 40   [40, 20, 30]  sorted [20, 30, 40]  -> 30
//!              ↑ oldest slot overwritten
//! ```
//!
//! ## Median Convention
//!
//! The median is the element at index `capacity / 2` of the ascending sort.
//! For odd capacities that is the exact middle. For even capacities it is
//! the UPPER of the two middle elements; values are never averaged, so the
//! output is always a value that was actually inserted (or the fill value).
//!
//! ## Cost
//!
//! Each insertion copies and sorts the window: O(capacity·log capacity).
//! Windows in polling loops are single or double digit, where this beats
//! maintaining a sorted structure.

use heapless::Vec;

use crate::{
    constants::buffers::MAX_FILTER_WINDOW,
    errors::{ConfigError, ConfigResult},
};

/// Running median over the last `capacity` values
///
/// ## Thread Safety
///
/// Every insertion mutates the ring. Share it across threads only behind a
/// mutex.
#[derive(Debug, Clone)]
pub struct MedianFilter<const N: usize = MAX_FILTER_WINDOW> {
    /// Ring slots, always exactly `capacity` long
    window: Vec<u16, N>,

    /// Slot the next insertion overwrites
    write_index: usize,
}

impl<const N: usize> MedianFilter<N> {
    /// Create a filter of `capacity` slots, all set to `fill_value`
    ///
    /// Fails if `capacity` is zero or larger than the storage bound `N`.
    pub fn new(capacity: usize, fill_value: u16) -> ConfigResult<Self> {
        if capacity == 0 {
            return Err(ConfigError::InvalidWindow);
        }

        let mut window = Vec::new();
        window
            .resize(capacity, fill_value)
            .map_err(|_| ConfigError::WindowTooLarge {
                requested: capacity,
                max: N,
            })?;

        Ok(Self {
            window,
            write_index: 0,
        })
    }

    /// Insert a value and return the median of the updated window
    pub fn insert(&mut self, value: u16) -> u16 {
        self.window[self.write_index] = value;
        self.write_index = (self.write_index + 1) % self.window.len();

        self.median()
    }

    /// Median of the current window
    pub fn median(&self) -> u16 {
        let mut sorted = self.window.clone();
        sorted.sort_unstable();
        sorted[sorted.len() / 2]
    }

    /// Number of slots in the window
    pub fn capacity(&self) -> usize {
        self.window.len()
    }

    /// Window contents in storage order (not chronological)
    pub fn window(&self) -> &[u16] {
        &self.window
    }

    /// Overwrite every slot with `fill_value` and rewind the cursor
    pub fn reset(&mut self, fill_value: u16) {
        self.window.iter_mut().for_each(|slot| *slot = fill_value);
        self.write_index = 0;
    }
}
