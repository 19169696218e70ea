//! Fixed-interval polling with switch-latest delivery.
//!
//! A [`Poller`] turns a one-shot request factory into a [`Subscription`]: the
//! request is issued immediately (tick 0) and again on every interval tick
//! for as long as the subscription is held. Each tick advances a generation
//! counter; a response is delivered only while its generation is still the
//! current one, so a slow reply to tick `n` never reaches the subscriber once
//! tick `n + 1` has fired. Only the latest unread response is kept: a
//! subscriber that stops pulling sees the newest tick when it resumes.
//!
//! ```text
//! Idle ─subscribe─▶ Waiting(0) ─▶ Delivered(0) ─tick─▶ Waiting(1) ─▶ …
//!                        │                                   │
//!                        └──error──▶ Failed(k)     cancel ──▶ Cancelled
//! ```

mod latest;
mod subscription;


use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, trace, warn};

use crate::error::Result;

pub use subscription::{PollPhase, Subscription};

use latest::Publisher;
use subscription::Shared;

/// Interval used by the daemon views that need a live value.
pub const DEFAULT_POLLING_INTERVAL: Duration = Duration::from_millis(3000);

/// Shortest interval accepted; tokio rejects a zero period.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Builds polling subscriptions with a fixed interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Poller {
    interval: Duration,
}

impl Default for Poller {
    fn default() -> Self {
        Self::new(DEFAULT_POLLING_INTERVAL)
    }
}

impl Poller {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(MIN_INTERVAL),
        }
    }

    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Start polling `fetch`.
    ///
    /// The first request is issued as soon as the driver task runs. Must be
    /// called from within a tokio runtime.
    pub fn subscribe<T, F, Fut>(&self, fetch: F) -> Subscription<T>
    where
        T: Send + 'static,
        F: Fn() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        let shared = Arc::new(Shared::new());
        let (publisher, reader) = latest::channel();
        let driver = tokio::spawn(drive(self.interval, fetch, publisher, Arc::clone(&shared)));
        Subscription::new(reader, driver, shared)
    }
}

/// Aborts the request task when superseded or when the driver goes away.
struct InFlight {
    generation: u64,
    handle: JoinHandle<()>,
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn drive<T, F, Fut>(
    interval: Duration,
    fetch: F,
    out: Publisher<T>,
    shared: Arc<Shared>,
) where
    T: Send + 'static,
    F: Fn() -> Fut + Send + 'static,
    Fut: Future<Output = Result<T>> + Send + 'static,
{
    let mut ticker = time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let (done_tx, mut done_rx) = mpsc::unbounded_channel::<(u64, Result<T>)>();
    let mut in_flight: Option<InFlight> = None;

    debug!(interval_ms = interval.as_millis() as u64, "Polling started");

    loop {
        tokio::select! {
            biased;

            Some((generation, result)) = done_rx.recv() => {
                if generation != shared.generation() {
                    trace!(generation, current = shared.generation(), "Discarding superseded response");
                    continue;
                }
                in_flight = None;
                let tick = generation - 1;
                match result {
                    Ok(value) => {
                        shared.set_phase(PollPhase::Delivered { tick });
                        if !out.publish(Ok(value)) {
                            debug!("Subscriber gone, stopping poller");
                            break;
                        }
                    }
                    Err(err) => {
                        warn!(tick, error = %err, "Polling request failed, ending subscription");
                        shared.set_phase(PollPhase::Failed { tick });
                        out.publish(Err(err));
                        break;
                    }
                }
            }

            _ = ticker.tick() => {
                let generation = shared.advance();
                if let Some(previous) = in_flight.take() {
                    trace!(superseded = previous.generation, generation, "Switching to newer tick");
                }
                shared.set_phase(PollPhase::Waiting { tick: generation - 1 });

                let request = fetch();
                let done = done_tx.clone();
                let handle = tokio::spawn(async move {
                    let result = request.await;
                    let _ = done.send((generation, result));
                });
                in_flight = Some(InFlight { generation, handle });
            }
        }
    }

    debug!(ticks = shared.generation(), "Polling stopped");
}
