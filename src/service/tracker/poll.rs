//! The poll loop driver.

use std::time::Duration;

use tokio::sync::watch;

use crate::data::seen::SeenStore;
use crate::error::AppError;
use crate::service::roblox::AuditLogSource;
use crate::service::tracker::classify::classify;
use crate::service::tracker::notify::EventSink;

/// Perpetual poll loop for one (group, channel) pair.
///
/// Each cycle walks the audit log from the start of the available window,
/// following pagination cursors iteratively within the cycle. New events are
/// delivered and then admitted to the seen-set in the same iteration; the
/// admission happens whether or not delivery succeeded, so a sink outage
/// loses that cycle's notifications permanently (at-most-once delivery).
/// Cycles never overlap: the next fetch starts only after the
/// previous cycle finished and the poll interval elapsed.
pub struct RankTracker<S, K, N>
where
    S: AuditLogSource,
    K: SeenStore,
    N: EventSink,
{
    source: S,
    seen: K,
    sink: N,
    poll_interval: Duration,
}

impl<S, K, N> RankTracker<S, K, N>
where
    S: AuditLogSource,
    K: SeenStore,
    N: EventSink,
{
    pub fn new(source: S, seen: K, sink: N, poll_interval: Duration) -> Self {
        Self {
            source,
            seen,
            sink,
            poll_interval,
        }
    }

    /// Runs the loop until the shutdown channel flips to `true`.
    ///
    /// The shutdown signal is raced against the in-flight cycle as well as
    /// the inter-cycle sleep, so an in-progress backoff delay or fetch does
    /// not hold up process exit.
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) {
        tracing::info!("Starting audit log tracking");

        loop {
            tokio::select! {
                biased;

                changed = shutdown.changed() => {
                    // A dropped sender counts as shutdown; treating it as a
                    // plain wakeup would spin this loop forever.
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }

                result = self.run_cycle() => {
                    if let Err(e) = result {
                        tracing::error!("Audit log cycle failed: {}", e);
                    }
                }
            }

            tokio::select! {
                biased;

                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }

                _ = tokio::time::sleep(self.poll_interval) => {}
            }
        }

        tracing::info!("Rank tracker shut down");
    }

    /// Runs one full walk of the audit log.
    ///
    /// A fetch failure aborts the remainder of the cycle; whatever was
    /// already delivered stays delivered. The next cycle restarts from the
    /// beginning of the stream and relies on the seen-set to skip it.
    pub(crate) async fn run_cycle(&mut self) -> Result<(), AppError> {
        tracing::debug!("Checking audit logs for new entries");

        let mut cursor: Option<String> = None;
        loop {
            let page = self.source.fetch_page(cursor.as_deref()).await?;

            for entry in &page.data {
                let event = match classify(entry) {
                    Ok(event) => event,
                    Err(reason) => {
                        tracing::warn!("Discarding audit record: {}", reason);
                        continue;
                    }
                };

                let id = event.identity();
                if self.seen.contains(&id) {
                    tracing::debug!("Skipping already processed log entry {}", id);
                    continue;
                }

                if let Err(e) = self.sink.deliver(&event).await {
                    tracing::error!("Failed to deliver notification for {}: {}", id, e);
                }

                // Admitted regardless of the delivery outcome; see the type
                // docs for the consequence.
                if let Err(e) = self.seen.admit(&id) {
                    tracing::error!("Failed to persist processed log entry {}: {}", id, e);
                }
            }

            match page.next_page_cursor {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        tracing::debug!("All audit log pages processed");
        Ok(())
    }
}
