// Canonical event sink and the bounded queue the game loop drains

use super::event::CanonicalEvent;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

/// Default number of events held before the oldest is dropped
pub const DEFAULT_CAPACITY: usize = 64;

/// Append-only destination for canonical events
///
/// Implementations receive value copies and must not block the caller for
/// longer than a short critical section.
pub trait EventSink {
    fn post(&self, event: CanonicalEvent);
}

impl<S: EventSink + ?Sized> EventSink for Arc<S> {
    fn post(&self, event: CanonicalEvent) {
        (**self).post(event)
    }
}

impl<S: EventSink + ?Sized> EventSink for &S {
    fn post(&self, event: CanonicalEvent) {
        (**self).post(event)
    }
}

/// Bounded FIFO of canonical events
///
/// Posting never blocks: once full, the oldest event is discarded to make
/// room, the same way a fixed-size event ring overwrites its tail.
#[derive(Debug)]
pub struct EventQueue {
    events: Mutex<VecDeque<CanonicalEvent>>,
    capacity: usize,
}

impl EventQueue {
    /// Create a queue holding at most `capacity` events (minimum 1)
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            events: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<CanonicalEvent>> {
        // A panicking producer can't leave a half-written event behind.
        self.events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Take the oldest pending event
    pub fn pop(&self) -> Option<CanonicalEvent> {
        self.lock().pop_front()
    }

    /// Take every pending event in posting order
    pub fn drain(&self) -> Vec<CanonicalEvent> {
        self.lock().drain(..).collect()
    }

    /// Get the number of pending events
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Discard everything pending
    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl EventSink for EventQueue {
    fn post(&self, event: CanonicalEvent) {
        let mut events = self.lock();
        if events.len() >= self.capacity {
            if let Some(dropped) = events.pop_front() {
                log::warn!("Event queue full, dropping {:?}", dropped);
            }
        }
        events.push_back(event);
    }
}
