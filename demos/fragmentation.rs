//! Fragmentation Demo
//!
//! Shows how first-fit placement fragments a block array: plenty of free
//! space in total, but no single run large enough for a big request.
//!
//! # Run
//!
//! ```bash
//! cargo run --example fragmentation
//! ```

use blockfit::allocator::{AllocatorConfig, BlockAllocator};
use blockfit::map::MapFormatter;

fn main() {
    println!("=== Fragmentation Demo ===\n");

    let mut allocator = BlockAllocator::new(AllocatorConfig::with_capacity(100));
    let formatter = MapFormatter::default();

    // Fill the array with 10-block files, then free every other one
    let mut starts = Vec::new();
    while let Ok(start) = allocator.allocate(10) {
        starts.push(start);
    }
    println!("Filled the array with {} allocations of 10 blocks", starts.len());

    for &start in starts.iter().step_by(2) {
        allocator.deallocate(start, 10);
    }

    let stats = allocator.stats();
    println!("Freed every other allocation:\n");
    println!("{}\n", formatter.format(&allocator.allocation_map()));
    println!(
        "  {} of {} blocks free, in {} runs (largest run: {})",
        stats.free_blocks, stats.total_blocks, stats.free_runs, stats.largest_free_run
    );

    // Half the array is free, yet a 20-block request cannot be placed
    println!("\nRequesting 20 contiguous blocks...");
    match allocator.allocate(20) {
        Ok(start) => println!("  placed at {start}"),
        Err(err) => println!("  [{}] {}", err.code(), err),
    }

    // A request that fits a hole lands in the first one
    println!("Requesting 10 contiguous blocks...");
    match allocator.allocate(10) {
        Ok(start) => println!("  placed at {start} (first hole wins)"),
        Err(err) => println!("  [{}] {}", err.code(), err),
    }

    // Coalescing happens for free: adjacent freed ranges form one run
    allocator.deallocate(10, 10);
    allocator.deallocate(20, 10);
    let stats = allocator.stats();
    println!("\nFreed blocks 10 to 29:");
    println!("  largest free run is now {}", stats.largest_free_run);

    println!("\nRequesting 20 contiguous blocks again...");
    match allocator.allocate(20) {
        Ok(start) => println!("  placed at {start}"),
        Err(err) => println!("  [{}] {}", err.code(), err),
    }

    println!("\nFinal map:\n{}", formatter.format(&allocator.allocation_map()));
}
