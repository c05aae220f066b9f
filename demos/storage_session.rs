//! Storage Session Demo
//!
//! Drives a small allocator through an allocate/deallocate cycle and
//! prints the transcript alongside the allocation map after each step.
//!
//! # Run
//!
//! ```bash
//! cargo run --example storage_session
//! ```

use blockfit::allocator::AllocatorConfig;
use blockfit::map::MapFormatter;
use blockfit::session::StorageSession;

fn main() {
    println!("=== Storage Session Demo ===\n");

    let config = AllocatorConfig::with_capacity(10);
    println!("Allocator configuration:");
    println!("  Capacity: {} blocks", config.capacity);
    println!(
        "  Markers: used = '{}', free = '{}'",
        config.used_marker, config.free_marker
    );
    println!();

    let mut session = StorageSession::new(config);
    let formatter = MapFormatter::new(10);

    let start = session.allocate(5).expect("empty array fits 5 blocks");
    println!("Allocated 5 blocks at {start}");
    println!("{}\n", formatter.format(&session.allocator().allocation_map()));

    let start = session.allocate(3).expect("tail fits 3 blocks");
    println!("Allocated 3 blocks at {start}");
    println!("{}\n", formatter.format(&session.allocator().allocation_map()));

    session.deallocate(0, 5);
    println!("Deallocated blocks 0 to 4");
    println!("{}\n", formatter.format(&session.allocator().allocation_map()));

    // First-fit reuses the freed space at the front
    let start = session.allocate(5).expect("freed space fits 5 blocks");
    println!("Allocated 5 blocks at {start} (freed space reused)");
    println!("{}\n", formatter.format(&session.allocator().allocation_map()));

    // A request no free run can satisfy is reported, not fatal
    println!("--- Oversized request ---");
    match session.allocate(5) {
        Ok(start) => println!("unexpectedly placed at {start}"),
        Err(err) => println!(
            "[{}] {} (retryable: {})",
            err.code(),
            err,
            err.is_retryable()
        ),
    }

    println!("\n--- Transcript ---");
    println!("{}", session.transcript());

    println!("\n--- Event log (JSON) ---");
    match session.to_json() {
        Ok(json) => println!("{json}"),
        Err(err) => println!("export failed: {err}"),
    }

    let stats = session.allocator().stats();
    println!("\n--- Final stats ---");
    println!("  Used: {}/{} blocks", stats.used_blocks, stats.total_blocks);
    println!("  Free runs: {}", stats.free_runs);
    println!("  Largest free run: {}", stats.largest_free_run);
    println!("  Utilization: {:.0}%", stats.utilization() * 100.0);
}
