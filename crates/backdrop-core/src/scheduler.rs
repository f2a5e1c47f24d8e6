//! Display-refresh scheduling, abstracted so the lifecycle can be driven by
//! hand in tests.
//!
//! A scheduler hands out one handle per requested tick. The host invokes the
//! orchestrator with that handle when the tick is due; a cancelled handle
//! must never be delivered.

pub trait Scheduler {
    type Handle: Copy + Eq + std::fmt::Debug;

    /// Schedule the next tick. Requests must not fail: the returned handle
    /// is always delivered exactly once unless cancelled, since the
    /// orchestrator has no other way to keep the loop alive.
    fn request_tick(&mut self) -> Self::Handle;
    fn cancel(&mut self, handle: Self::Handle);
}

/// Scheduler that only records requests; tests pull due handles with
/// `next_due` and feed them to the orchestrator.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u32,
    pending: Vec<u32>,
    cancelled: Vec<u32>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Oldest outstanding request, removed from the queue.
    pub fn next_due(&mut self) -> Option<u32> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0))
        }
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn cancelled(&self) -> &[u32] {
        &self.cancelled
    }
}

impl Scheduler for ManualScheduler {
    type Handle = u32;

    fn request_tick(&mut self) -> u32 {
        self.next_id += 1;
        self.pending.push(self.next_id);
        self.next_id
    }

    fn cancel(&mut self, handle: u32) {
        self.pending.retain(|h| *h != handle);
        self.cancelled.push(handle);
    }
}
