use std::sync::atomic::{AtomicU32, Ordering};

/// The first object number handed out. Number 0 is the head of the free list.
pub const FIRST_ID: u32 = 1;

/// Hands out object numbers.
///
/// Numbers start at [`FIRST_ID`], are strictly increasing and never reused.
/// Every [`Object`](super::Object) created from the same allocator gets a
/// distinct number, no matter which [`Document`](super::Document) it ends up
/// in. The counter is atomic so the allocator can be shared between threads.
#[derive(Debug)]
pub struct IdAllocator {
    next: AtomicU32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self {
            next: AtomicU32::new(FIRST_ID),
        }
    }

    /// Take the next object number.
    pub fn next_id(&self) -> u32 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }

    /// The number the next call to [`next_id`](Self::next_id) returns.
    pub fn peek(&self) -> u32 {
        self.next.load(Ordering::Relaxed)
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
