//! Single-slot hand-off between the driver and the subscriber.
//!
//! The driver publishes into one slot; a newer value replaces an unread one,
//! so an idle subscriber always wakes up to the latest tick. A wake-up signal
//! with capacity one tells the subscriber the slot may be full. An error is
//! final and is never replaced.

use std::sync::Arc;
use std::task::{Context, Poll};

use parking_lot::Mutex;
use tokio::sync::mpsc::{self, error::TrySendError};

use crate::error::Result;

type Slot<T> = Arc<Mutex<Option<Result<T>>>>;

/// Create a connected publisher/reader pair.
pub(super) fn channel<T>() -> (Publisher<T>, Reader<T>) {
    let slot: Slot<T> = Arc::new(Mutex::new(None));
    let (signal, wake) = mpsc::channel(1);
    (
        Publisher {
            slot: Arc::clone(&slot),
            signal,
        },
        Reader { slot, wake },
    )
}

pub(super) struct Publisher<T> {
    slot: Slot<T>,
    signal: mpsc::Sender<()>,
}

impl<T> Publisher<T> {
    /// Store `value` as the latest result. Returns false once the reader is gone.
    pub(super) fn publish(&self, value: Result<T>) -> bool {
        if self.signal.is_closed() {
            return false;
        }
        {
            let mut slot = self.slot.lock();
            if !matches!(*slot, Some(Err(_))) {
                *slot = Some(value);
            }
        }
        match self.signal.try_send(()) {
            Ok(()) | Err(TrySendError::Full(())) => true,
            Err(TrySendError::Closed(())) => false,
        }
    }
}

pub(super) struct Reader<T> {
    slot: Slot<T>,
    wake: mpsc::Receiver<()>,
}

impl<T> Reader<T> {
    /// Wait for the next unread value; `None` once the publisher is gone.
    pub(super) async fn recv(&mut self) -> Option<Result<T>> {
        loop {
            match self.wake.recv().await {
                Some(()) => {
                    if let Some(value) = self.slot.lock().take() {
                        return Some(value);
                    }
                }
                None => return self.slot.lock().take(),
            }
        }
    }

    pub(super) fn poll_recv(&mut self, cx: &mut Context<'_>) -> Poll<Option<Result<T>>> {
        loop {
            match self.wake.poll_recv(cx) {
                Poll::Ready(Some(())) => {
                    if let Some(value) = self.slot.lock().take() {
                        return Poll::Ready(Some(value));
                    }
                }
                Poll::Ready(None) => return Poll::Ready(self.slot.lock().take()),
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[tokio::test]
    async fn newer_value_replaces_unread_one() {
        let (publisher, mut reader) = channel();
        assert!(publisher.publish(Ok(1)));
        assert!(publisher.publish(Ok(2)));
        assert!(publisher.publish(Ok(3)));
        drop(publisher);

        assert_eq!(reader.recv().await.unwrap().unwrap(), 3);
        assert!(reader.recv().await.is_none());
    }

    #[tokio::test]
    async fn error_is_never_replaced() {
        let (publisher, mut reader) = channel::<u32>();
        assert!(publisher.publish(Err(Error::Connection("refused".into()))));
        assert!(publisher.publish(Ok(9)));

        assert!(matches!(reader.recv().await, Some(Err(Error::Connection(_)))));
    }

    #[tokio::test]
    async fn publish_reports_dropped_reader() {
        let (publisher, reader) = channel::<u32>();
        drop(reader);
        assert!(!publisher.publish(Ok(1)));
    }
}
