use std::sync::atomic::{AtomicI64, Ordering};

use entity::prelude::*;

static GLOBAL: IdAllocator = IdAllocator::new();

/// Hands out placeholder ids for records that arrived without one.
///
/// Ids count down from `-1` and are shared by every entity type, so a
/// placeholder never collides with another placeholder or with a real,
/// non-negative backend id. Nothing is persisted: a new process starts
/// again at `-1`.
#[derive(Debug, Default)]
pub struct IdAllocator {
    last: AtomicI64,
}

impl IdAllocator {
    pub const fn new() -> Self {
        Self {
            last: AtomicI64::new(0),
        }
    }

    /// The allocator used by [`crate::Normalizer::global`].
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    pub fn next(&self) -> Id {
        Id::new(self.last.fetch_sub(1, Ordering::Relaxed) - 1)
    }

    /// The most recently issued placeholder, if any.
    pub fn last(&self) -> Option<Id> {
        let last = self.last.load(Ordering::Relaxed);
        (last < 0).then_some(Id::new(last))
    }

    pub fn reset(&self) {
        self.last.store(0, Ordering::Relaxed);
    }
}
