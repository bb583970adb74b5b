//! `RequestQueue` — strict first-in first-out request buffer.

use std::collections::VecDeque;

use tracing::debug;

use crate::RideRequest;

/// Pending ride requests in submission order.
///
/// There is no priority, cancellation, or peeking: requests leave only
/// through [`dequeue`](Self::dequeue), oldest first.
#[derive(Debug, Default)]
pub struct RequestQueue {
    inner: VecDeque<RideRequest>,
}

impl RequestQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `request` at the back.
    pub fn enqueue(&mut self, request: RideRequest) {
        debug!(request = %request.id, depth = self.inner.len() + 1, "request enqueued");
        self.inner.push_back(request);
    }

    /// Remove and return the oldest request, or `None` if empty.
    pub fn dequeue(&mut self) -> Option<RideRequest> {
        self.inner.pop_front()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Put a just-dequeued request back at the head so it is retried before
    /// anything submitted after it.
    pub(crate) fn restore_front(&mut self, request: RideRequest) {
        debug!(request = %request.id, "request restored to queue head");
        self.inner.push_front(request);
    }
}
