//! Storage session with an operation transcript.
//!
//! Wraps a [`BlockAllocator`] and records every successful mutation as an
//! ordered event log. This is the driver layer a test harness or CLI sits
//! on: it owns the allocator, narrates what happened, and can export the
//! log as JSON.
//!
//! # Examples
//!
//! ```rust
//! use blockfit::allocator::AllocatorConfig;
//! use blockfit::session::StorageSession;
//!
//! let mut session = StorageSession::new(AllocatorConfig::with_capacity(10));
//!
//! session.allocate(5).unwrap();
//! session.deallocate(0, 5);
//!
//! assert_eq!(
//!     session.transcript(),
//!     "Allocated blocks 0 to 4\nDeallocated blocks 0 to 4"
//! );
//! ```

use crate::allocator::{AllocatorConfig, BlockAllocator};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A recorded allocator operation.
///
/// Only operations that mutated state are recorded; a failed allocation
/// leaves no event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SessionEvent {
    /// Blocks `[start, start + size)` were marked used.
    Allocated {
        /// Starting block index.
        start: usize,
        /// Number of blocks.
        size: usize,
    },
    /// A deallocation request for `[start, start + size)` was applied.
    Deallocated {
        /// Starting block index.
        start: usize,
        /// Number of blocks requested (before any tail clamping).
        size: usize,
    },
}

impl fmt::Display for SessionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allocated { start, size } => {
                write!(f, "Allocated blocks {} to {}", start, start + size - 1)
            }
            Self::Deallocated { start, size } => {
                write!(f, "Deallocated blocks {} to {}", start, start + size - 1)
            }
        }
    }
}

/// A block allocator plus the ordered log of operations applied to it.
#[derive(Debug, Clone, Default)]
pub struct StorageSession {
    allocator: BlockAllocator,
    events: Vec<SessionEvent>,
}

impl StorageSession {
    /// Start a session over a fresh allocator.
    pub fn new(config: AllocatorConfig) -> Self {
        Self {
            allocator: BlockAllocator::new(config),
            events: Vec::new(),
        }
    }

    /// The underlying allocator.
    pub const fn allocator(&self) -> &BlockAllocator {
        &self.allocator
    }

    /// Recorded events, oldest first.
    pub fn events(&self) -> &[SessionEvent] {
        &self.events
    }

    /// Allocate `size` contiguous blocks, recording the placement.
    ///
    /// # Errors
    ///
    /// Propagates the allocator's error; nothing is recorded on failure.
    pub fn allocate(&mut self, size: usize) -> Result<usize> {
        let start = self.allocator.allocate(size)?;
        self.events.push(SessionEvent::Allocated { start, size });
        Ok(start)
    }

    /// Deallocate `[start, start + size)`, recording the request.
    ///
    /// A zero-size request is dropped without recording; anything else is
    /// recorded as issued, even when the allocator clamps the tail.
    pub fn deallocate(&mut self, start: usize, size: usize) {
        if size == 0 {
            return;
        }
        self.allocator.deallocate(start, size);
        self.events.push(SessionEvent::Deallocated { start, size });
    }

    /// Render the event log, one event per line.
    pub fn transcript(&self) -> String {
        self.events
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Serialize the event log as JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn session(capacity: usize) -> StorageSession {
        StorageSession::new(AllocatorConfig::with_capacity(capacity))
    }

    #[test]
    fn test_event_display() {
        let event = SessionEvent::Allocated { start: 5, size: 3 };
        assert_eq!(event.to_string(), "Allocated blocks 5 to 7");

        let event = SessionEvent::Deallocated { start: 0, size: 5 };
        assert_eq!(event.to_string(), "Deallocated blocks 0 to 4");
    }

    #[test]
    fn test_single_block_event_renders_as_range() {
        let event = SessionEvent::Allocated { start: 4, size: 1 };
        assert_eq!(event.to_string(), "Allocated blocks 4 to 4");
    }

    #[test]
    fn test_allocate_records_placement() {
        let mut session = session(10);
        let start = session.allocate(5).unwrap();

        assert_eq!(start, 0);
        assert_eq!(
            session.events(),
            &[SessionEvent::Allocated { start: 0, size: 5 }]
        );
    }

    #[test]
    fn test_failed_allocate_records_nothing() {
        let mut session = session(4);
        let err = session.allocate(5).unwrap_err();

        assert!(matches!(err, Error::InvalidSize(_)));
        assert!(session.events().is_empty());

        session.allocate(3).unwrap();
        let err = session.allocate(2).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
        assert_eq!(session.events().len(), 1);
    }

    #[test]
    fn test_deallocate_recorded_as_issued() {
        let mut session = session(10);
        session.allocate(10).unwrap();

        // Tail runs past the array; the request is logged unclamped
        session.deallocate(8, 5);

        assert_eq!(
            session.events().last(),
            Some(&SessionEvent::Deallocated { start: 8, size: 5 })
        );
        assert_eq!(session.allocator().allocation_map(), "XXXXXXXX..");
    }

    #[test]
    fn test_zero_size_deallocate_not_recorded() {
        let mut session = session(10);
        session.deallocate(0, 0);
        assert!(session.events().is_empty());
    }

    #[test]
    fn test_transcript() {
        let mut session = session(10);
        session.allocate(5).unwrap();
        session.allocate(3).unwrap();
        session.deallocate(0, 5);

        assert_eq!(
            session.transcript(),
            "Allocated blocks 0 to 4\n\
             Allocated blocks 5 to 7\n\
             Deallocated blocks 0 to 4"
        );
    }

    #[test]
    fn test_transcript_empty_session() {
        assert_eq!(session(10).transcript(), "");
    }

    #[test]
    fn test_to_json() {
        let mut session = session(10);
        session.allocate(2).unwrap();
        session.deallocate(0, 2);

        let json = session.to_json().unwrap();
        assert_eq!(
            json,
            "[{\"op\":\"allocated\",\"start\":0,\"size\":2},\
             {\"op\":\"deallocated\",\"start\":0,\"size\":2}]"
        );
    }

    #[test]
    fn test_event_json_round_trip() {
        let events = [
            SessionEvent::Allocated { start: 3, size: 4 },
            SessionEvent::Deallocated { start: 3, size: 4 },
        ];
        let json = serde_json::to_string(&events).unwrap();
        let back: Vec<SessionEvent> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, events);
    }

    #[test]
    fn test_default_session_uses_default_capacity() {
        let session = StorageSession::default();
        assert_eq!(session.allocator().capacity(), 100);
    }
}
