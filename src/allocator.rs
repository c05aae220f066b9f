//! First-fit contiguous block allocation.
//!
//! Simulates first-fit allocation over a fixed-size linear block array,
//! the classic pedagogical model for contiguous memory and disk
//! allocation strategies.
//!
//! # Key Concepts
//!
//! ## Why First-Fit?
//!
//! First-fit is the simplest placement policy that still exhibits the
//! interesting behaviors of contiguous allocation:
//! - Allocations cluster toward low indices
//! - Freed space is reused by the next request that fits
//! - Fragmentation can starve large requests even when enough total
//!   space is free
//!
//! The scan always reports the first (lowest-index) run that is big
//! enough, never the best-fitting or largest one. Substituting best-fit
//! or worst-fit changes observable allocation addresses.
//!
//! # Examples
//!
//! ```rust
//! use blockfit::allocator::{AllocatorConfig, BlockAllocator};
//!
//! let mut allocator = BlockAllocator::new(AllocatorConfig::with_capacity(10));
//!
//! let start = allocator.allocate(5).unwrap();
//! assert_eq!(start, 0);
//! assert_eq!(allocator.allocation_map(), "XXXXX.....");
//!
//! allocator.deallocate(start, 5);
//! assert_eq!(allocator.allocation_map(), "..........");
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default number of addressable blocks.
pub const DEFAULT_CAPACITY: usize = 100;

/// Marker rendered for a used block.
pub const DEFAULT_USED_MARKER: char = 'X';

/// Marker rendered for a free block.
pub const DEFAULT_FREE_MARKER: char = '.';

/// State of a single block.
///
/// Every block is in exactly one of these two states at all times; there
/// is no reserved, shared, or transitional state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockState {
    /// Block is free and available.
    Free,
    /// Block is part of an allocation.
    Used,
}

impl BlockState {
    /// Check if block is free.
    pub const fn is_free(&self) -> bool {
        matches!(self, Self::Free)
    }

    /// Check if block is used.
    pub const fn is_used(&self) -> bool {
        matches!(self, Self::Used)
    }
}

/// Configuration for the block allocator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocatorConfig {
    /// Total number of addressable blocks.
    pub capacity: usize,

    /// Marker rendered for used blocks.
    pub used_marker: char,

    /// Marker rendered for free blocks.
    pub free_marker: char,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            used_marker: DEFAULT_USED_MARKER,
            free_marker: DEFAULT_FREE_MARKER,
        }
    }
}

impl AllocatorConfig {
    /// Create a new config with the specified capacity.
    pub const fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            used_marker: DEFAULT_USED_MARKER,
            free_marker: DEFAULT_FREE_MARKER,
        }
    }

    /// Set the used-block marker.
    pub const fn used_marker(mut self, marker: char) -> Self {
        self.used_marker = marker;
        self
    }

    /// Set the free-block marker.
    pub const fn free_marker(mut self, marker: char) -> Self {
        self.free_marker = marker;
        self
    }
}

/// First-fit allocator over a fixed-size linear block array.
///
/// Owns `capacity` block states, index `0..capacity`, all free at
/// construction. The array is never resized; the two mutating operations
/// toggle individual blocks between free and used.
///
/// Not internally synchronized: a scan-then-mark race between two
/// concurrent `allocate` calls could double-allocate the same range, so
/// sharing requires external mutual exclusion around the whole allocator.
///
/// # Examples
///
/// ```rust
/// use blockfit::allocator::{AllocatorConfig, BlockAllocator};
///
/// let mut allocator = BlockAllocator::new(AllocatorConfig::default());
///
/// // First-fit: both calls place at the lowest index that fits
/// assert_eq!(allocator.allocate(10).unwrap(), 0);
/// assert_eq!(allocator.allocate(5).unwrap(), 10);
///
/// allocator.deallocate(0, 10);
/// // Freed space at index 0 is reused before the untouched tail
/// assert_eq!(allocator.allocate(4).unwrap(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct BlockAllocator {
    config: AllocatorConfig,

    /// State of each block.
    blocks: Vec<BlockState>,
}

impl BlockAllocator {
    /// Create a new allocator with every block free.
    pub fn new(config: AllocatorConfig) -> Self {
        let blocks = vec![BlockState::Free; config.capacity];
        Self { config, blocks }
    }

    /// Get configuration.
    pub const fn config(&self) -> &AllocatorConfig {
        &self.config
    }

    /// Total number of addressable blocks.
    pub fn capacity(&self) -> usize {
        self.blocks.len()
    }

    /// Number of free blocks (not necessarily contiguous).
    pub fn free_blocks(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_free()).count()
    }

    /// Number of used blocks.
    pub fn used_blocks(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_used()).count()
    }

    /// State of the block at `index`, or `None` if out of range.
    pub fn block_state(&self, index: usize) -> Option<BlockState> {
        self.blocks.get(index).copied()
    }

    /// Check whether a request of `size` blocks could currently succeed.
    ///
    /// Read-only: runs the same first-fit scan as [`allocate`] without
    /// marking anything.
    ///
    /// [`allocate`]: Self::allocate
    pub fn can_allocate(&self, size: usize) -> bool {
        size >= 1 && size <= self.capacity() && self.find_first_fit(size).is_some()
    }

    /// Allocate `size` contiguous blocks, returning the starting index.
    ///
    /// Scans left-to-right and takes the first free run of at least
    /// `size` blocks. On success exactly `[start, start + size)` is
    /// marked used. On failure nothing is mutated.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidSize`] if `size` is zero or exceeds capacity.
    /// - [`Error::NotFound`] if no contiguous free run of `size` blocks
    ///   exists anywhere in the array.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use blockfit::allocator::{AllocatorConfig, BlockAllocator};
    ///
    /// let mut allocator = BlockAllocator::new(AllocatorConfig::with_capacity(10));
    /// assert_eq!(allocator.allocate(5).unwrap(), 0);
    /// assert!(allocator.allocate(6).is_err());
    /// ```
    pub fn allocate(&mut self, size: usize) -> Result<usize> {
        if size == 0 || size > self.capacity() {
            return Err(Error::invalid_size(format!(
                "requested {} blocks, capacity is {}",
                size,
                self.capacity()
            )));
        }

        let start = self.find_first_fit(size).ok_or_else(|| {
            Error::not_found(format!(
                "no contiguous run of {} free blocks ({} free in total)",
                size,
                self.free_blocks()
            ))
        })?;

        for block in &mut self.blocks[start..start + size] {
            *block = BlockState::Used;
        }

        Ok(start)
    }

    /// Mark every in-range block in `[start, start + size)` free.
    ///
    /// Indices at or past capacity are silently skipped, so an
    /// over-length range is truncated at the end of the array and a
    /// `start` beyond the array is a no-op. Freeing an
    /// already-free block is a no-op for that block. There is no
    /// bookkeeping check that the range was handed out by a single
    /// [`allocate`] call.
    ///
    /// [`allocate`]: Self::allocate
    ///
    /// # Examples
    ///
    /// ```rust
    /// use blockfit::allocator::{AllocatorConfig, BlockAllocator};
    ///
    /// let mut allocator = BlockAllocator::new(AllocatorConfig::with_capacity(10));
    /// allocator.allocate(10).unwrap();
    ///
    /// // Tail past the end is absorbed, not an error
    /// allocator.deallocate(8, 5);
    /// assert_eq!(allocator.allocation_map(), "XXXXXXXX..");
    /// ```
    pub fn deallocate(&mut self, start: usize, size: usize) {
        let lo = start.min(self.blocks.len());
        let hi = start.saturating_add(size).min(self.blocks.len());

        for block in &mut self.blocks[lo..hi] {
            *block = BlockState::Free;
        }
    }

    /// Render the full block array as one marker character per block.
    ///
    /// The result has exactly `capacity` characters in index order with
    /// no separators; used blocks render as the configured used marker,
    /// free blocks as the free marker. Read-only. Multi-line layout is
    /// the caller's concern (see [`crate::map::MapFormatter`]).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use blockfit::allocator::{AllocatorConfig, BlockAllocator};
    ///
    /// let mut allocator = BlockAllocator::new(AllocatorConfig::with_capacity(10));
    /// allocator.allocate(3).unwrap();
    /// assert_eq!(allocator.allocation_map(), "XXX.......");
    /// ```
    pub fn allocation_map(&self) -> String {
        self.blocks
            .iter()
            .map(|b| {
                if b.is_used() {
                    self.config.used_marker
                } else {
                    self.config.free_marker
                }
            })
            .collect()
    }

    /// Get occupancy statistics.
    pub fn stats(&self) -> StorageStats {
        let total = self.capacity();
        let used = self.used_blocks();

        let mut free_runs = 0;
        let mut largest_free_run = 0;
        let mut run = 0;
        for block in &self.blocks {
            if block.is_free() {
                if run == 0 {
                    free_runs += 1;
                }
                run += 1;
                largest_free_run = largest_free_run.max(run);
            } else {
                run = 0;
            }
        }

        StorageStats {
            total_blocks: total,
            used_blocks: used,
            free_blocks: total - used,
            free_runs,
            largest_free_run,
        }
    }

    /// First-fit scan: lowest starting index of a free run of `size`
    /// blocks, or `None`. Stops at the first sufficient run; a used
    /// block resets the candidate.
    fn find_first_fit(&self, size: usize) -> Option<usize> {
        let mut start = 0;
        let mut run = 0;

        for (i, block) in self.blocks.iter().enumerate() {
            if block.is_free() {
                if run == 0 {
                    start = i;
                }
                run += 1;
                if run == size {
                    return Some(start);
                }
            } else {
                run = 0;
            }
        }

        None
    }
}

impl Default for BlockAllocator {
    fn default() -> Self {
        Self::new(AllocatorConfig::default())
    }
}

/// Occupancy statistics for a block allocator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageStats {
    /// Total blocks in the array.
    pub total_blocks: usize,
    /// Currently used blocks.
    pub used_blocks: usize,
    /// Free blocks (not necessarily contiguous).
    pub free_blocks: usize,
    /// Number of maximal contiguous free runs.
    pub free_runs: usize,
    /// Length of the longest contiguous free run.
    pub largest_free_run: usize,
}

impl StorageStats {
    /// Calculate utilization as a fraction.
    pub fn utilization(&self) -> f64 {
        if self.total_blocks == 0 {
            0.0
        } else {
            self.used_blocks as f64 / self.total_blocks as f64
        }
    }
}
