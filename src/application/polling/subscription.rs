//! Subscriber-side handle for a polling sequence.

use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_util::Stream;
use parking_lot::Mutex;
use tokio::task::JoinHandle;

use super::latest::Reader;
use crate::error::Result;

/// Where a subscription currently is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollPhase {
    /// Subscribed, first tick not issued yet.
    Idle,
    /// Request for `tick` is in flight.
    Waiting { tick: u64 },
    /// Response for `tick` was handed to the subscriber.
    Delivered { tick: u64 },
    /// Request for `tick` failed; the sequence has ended.
    Failed { tick: u64 },
    /// The subscriber cancelled.
    Cancelled,
}

impl PollPhase {
    /// True once no further value can be delivered.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Failed { .. } | Self::Cancelled)
    }
}

/// State shared between the driver task and the subscriber.
pub(super) struct Shared {
    generation: AtomicU64,
    phase: Mutex<PollPhase>,
}

impl Shared {
    pub(super) fn new() -> Self {
        Self {
            generation: AtomicU64::new(0),
            phase: Mutex::new(PollPhase::Idle),
        }
    }

    /// Start a new tick and return its generation (1 for tick 0).
    pub(super) fn advance(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub(super) fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    pub(super) fn phase(&self) -> PollPhase {
        *self.phase.lock()
    }

    /// Record a transition. Terminal phases are sticky.
    pub(super) fn set_phase(&self, next: PollPhase) {
        let mut phase = self.phase.lock();
        if !phase.is_terminal() {
            *phase = next;
        }
    }
}

/// A live sequence of polled responses.
///
/// Pull values with [`next`](Self::next) or use it as a [`Stream`]. Dropping
/// the subscription cancels it.
pub struct Subscription<T> {
    rx: Option<Reader<T>>,
    driver: Option<JoinHandle<()>>,
    shared: Arc<Shared>,
}

impl<T> Subscription<T> {
    pub(super) fn new(
        rx: Reader<T>,
        driver: JoinHandle<()>,
        shared: Arc<Shared>,
    ) -> Self {
        Self {
            rx: Some(rx),
            driver: Some(driver),
            shared,
        }
    }

    /// Wait for the next delivered response.
    ///
    /// Responses are not queued: after a pause this yields the newest one.
    ///
    /// Returns `None` once the subscription is cancelled or after a failed
    /// tick has been reported.
    pub async fn next(&mut self) -> Option<Result<T>> {
        match self.rx.as_mut() {
            Some(rx) => rx.recv().await,
            None => None,
        }
    }

    /// Stop polling.
    ///
    /// The timer and any in-flight request are dropped before this returns
    /// control to the runtime; a value not yet pulled is discarded. A failed
    /// subscription keeps its `Failed` phase.
    pub fn cancel(&mut self) {
        if let Some(driver) = self.driver.take() {
            driver.abort();
        }
        self.rx = None;
        self.shared.set_phase(PollPhase::Cancelled);
    }

    #[must_use]
    pub fn phase(&self) -> PollPhase {
        self.shared.phase()
    }

    /// Number of ticks issued so far.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.shared.generation()
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.rx.is_none()
    }
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl<T> Stream for Subscription<T> {
    type Item = Result<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        match self.get_mut().rx.as_mut() {
            Some(rx) => rx.poll_recv(cx),
            None => Poll::Ready(None),
        }
    }
}

impl<T> std::fmt::Debug for Subscription<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("phase", &self.phase())
            .field("generation", &self.generation())
            .finish()
    }
}
