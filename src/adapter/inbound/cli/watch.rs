//! Live views for `--watch`.

use chrono::Utc;
use serde::Serialize;
use tracing::debug;

use crate::adapter::inbound::cli::output;
use crate::application::polling::Subscription;
use crate::error::Result;

/// UTC wall-clock label for a tick line.
#[must_use]
pub fn now_label() -> String {
    Utc::now().format("%H:%M:%S").to_string()
}

/// Print every value a subscription yields until Ctrl-C.
///
/// The first failure is returned so the process exits non-zero; an interrupt
/// cancels the subscription and returns cleanly.
pub async fn follow<T, F>(mut subscription: Subscription<T>, kind: &str, mut render: F) -> Result<()>
where
    T: Serialize,
    F: FnMut(&T),
{
    let interrupt = tokio::signal::ctrl_c();
    tokio::pin!(interrupt);

    loop {
        tokio::select! {
            item = subscription.next() => match item {
                Some(Ok(value)) => output::record(kind, &value, |v| render(v)),
                Some(Err(e)) => return Err(e),
                None => return Ok(()),
            },
            _ = &mut interrupt => {
                subscription.cancel();
                debug!(kind, generation = subscription.generation(), "Watch interrupted");
                output::note("Stopped watching");
                return Ok(());
            }
        }
    }
}
