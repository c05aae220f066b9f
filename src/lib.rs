//! First-Fit Block Storage Allocation Simulator
//!
//! A teaching model of contiguous storage allocation: a fixed-size linear
//! array of blocks, a first-fit placement policy, and a textual
//! allocation map.
//!
//! # Overview
//!
//! This crate provides:
//!
//! - **Allocator**: first-fit allocation and clamped deallocation over a
//!   fixed block array
//! - **Map**: offset-labelled row formatting for allocation maps
//! - **Session**: an operation transcript for driving the allocator from
//!   a harness or CLI
//!
//! # Allocation Model
//!
//! Every block is either free or used. `allocate` scans left-to-right
//! and takes the first contiguous free run long enough for the request;
//! `deallocate` clears a range, silently absorbing indices past the end
//! of the array. Failed operations never partially mutate state.
//!
//! # Examples
//!
//! ```rust
//! use blockfit::allocator::{AllocatorConfig, BlockAllocator};
//! use blockfit::map::MapFormatter;
//!
//! let mut allocator = BlockAllocator::new(AllocatorConfig::with_capacity(10));
//!
//! let start = allocator.allocate(5)?;
//! assert_eq!(start, 0);
//! assert_eq!(allocator.allocation_map(), "XXXXX.....");
//!
//! allocator.deallocate(0, 5);
//! assert_eq!(allocator.allocate(3)?, 0);
//!
//! // Presentation is the caller's concern
//! println!("{}", MapFormatter::default().format(&allocator.allocation_map()));
//! # Ok::<(), blockfit::Error>(())
//! ```
//!
//! # Concurrency
//!
//! All operations are synchronous and complete immediately. The
//! allocator is not internally synchronized; wrap it in a mutex if it
//! must be shared.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Allow common patterns that are acceptable for this crate
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]

pub mod allocator;
pub mod error;
pub mod map;
pub mod session;

pub use allocator::{AllocatorConfig, BlockAllocator, BlockState, StorageStats};
pub use error::{Error, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
