//! Paginated audit-log fetch with retry and exponential backoff.

use std::time::Duration;

use reqwest::header;
use serenity::async_trait;

use crate::error::fetch::FetchError;
use crate::model::audit::AuditLogPage;
use crate::service::roblox::RobloxClient;

/// Action types the tracker asks the endpoint for.
const TRACKED_ACTION_TYPES: &[&str] = &["ChangeRank", "Exile"];

/// Records requested per page (the endpoint's maximum).
const PAGE_LIMIT: u32 = 100;

/// Retries allowed after the initial attempt of a transient failure.
const MAX_RETRIES: u32 = 5;

/// Source of audit-log pages.
///
/// The poll loop depends only on this trait so that cycle semantics can be
/// tested against a scripted source.
#[async_trait]
pub trait AuditLogSource {
    /// Fetches one page starting at `cursor` (`None` = start of stream).
    async fn fetch_page(&self, cursor: Option<&str>) -> Result<AuditLogPage, FetchError>;
}

/// Backoff delay before retry number `retry` (zero-based): `base * 2^retry`.
pub(crate) fn retry_delay(base: Duration, retry: u32) -> Duration {
    base * 2u32.pow(retry)
}

/// Per-attempt decision for a non-success status: retry after a delay, or
/// abort with the terminal error.
///
/// Only server-side (5xx) statuses are retryable, and only while the retry
/// budget lasts. The fetch loop sleeps on `Ok` and propagates on `Err`, so
/// this function carries the whole retry/abort policy.
pub(crate) fn should_retry(
    status: reqwest::StatusCode,
    retry: u32,
    base: Duration,
) -> Result<Duration, FetchError> {
    if !status.is_server_error() {
        return Err(FetchError::Upstream {
            status: status.as_u16(),
        });
    }

    if retry >= MAX_RETRIES {
        return Err(FetchError::RetriesExhausted {
            attempts: retry + 1,
            last_status: status.as_u16(),
        });
    }

    Ok(retry_delay(base, retry))
}

#[async_trait]
impl AuditLogSource for RobloxClient {
    /// Fetches one audit-log page, retrying the same cursor on server-side
    /// failures.
    ///
    /// Transient (5xx) responses are retried up to 5 times with delays of 1,
    /// 2, 4, 8 and 16 seconds; exhausting the budget fails the call. Other
    /// error statuses and transport failures fail immediately, since only a
    /// server-side status is treated as recoverable.
    async fn fetch_page(&self, cursor: Option<&str>) -> Result<AuditLogPage, FetchError> {
        let url = format!("{}/v1/groups/{}/audit-log", self.api_base, self.group_id);
        let action_types = TRACKED_ACTION_TYPES.join(",");
        let limit = PAGE_LIMIT.to_string();

        let mut retry: u32 = 0;
        loop {
            let mut request = self
                .http
                .get(&url)
                .header(
                    header::COOKIE,
                    format!(".ROBLOSECURITY={}", self.cookie),
                )
                .query(&[
                    ("actionType", action_types.as_str()),
                    ("limit", limit.as_str()),
                ]);
            if let Some(cursor) = cursor {
                request = request.query(&[("cursor", cursor)]);
            }

            let response = request.send().await?;
            let status = response.status();

            if status.is_success() {
                return Ok(response.json::<AuditLogPage>().await?);
            }

            let delay = should_retry(status, retry, self.backoff_base)?;
            tracing::warn!(
                "Audit log fetch returned {}; retrying in {:?} (retry {}/{})",
                status,
                delay,
                retry + 1,
                MAX_RETRIES
            );
            tokio::time::sleep(delay).await;
            retry += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    /// Drives the fetch loop's decision sequence against a scripted run of
    /// response statuses, mirroring the control flow of `fetch_page` without
    /// the transport.
    ///
    /// Returns the number of attempts made, the delays slept between them,
    /// and the terminal error. Panics if the script ends before a terminal
    /// decision, which would mean the loop wanted more attempts than the
    /// script allows.
    fn drive(statuses: &[StatusCode]) -> (u32, Vec<Duration>, FetchError) {
        let base = Duration::from_secs(1);
        let mut retry = 0;
        let mut attempts = 0;
        let mut delays = Vec::new();

        for status in statuses {
            attempts += 1;
            match should_retry(*status, retry, base) {
                Ok(delay) => {
                    delays.push(delay);
                    retry += 1;
                }
                Err(e) => return (attempts, delays, e),
            }
        }

        panic!("status script exhausted without a terminal decision");
    }

    /// Tests that consecutive transient failures stop after the sixth
    /// attempt.
    ///
    /// Seven 500s are scripted; the loop must make one initial attempt plus
    /// five retries with the full backoff schedule and never consume the
    /// seventh status.
    ///
    /// Expected: 6 attempts, delays of 1, 2, 4, 8, 16 seconds, then
    /// RetriesExhausted { attempts: 6, last_status: 500 }
    #[test]
    fn transient_failures_stop_after_six_attempts() {
        let statuses = [StatusCode::INTERNAL_SERVER_ERROR; 7];

        let (attempts, delays, error) = drive(&statuses);

        assert_eq!(attempts, 6);
        let secs: Vec<u64> = delays.iter().map(Duration::as_secs).collect();
        assert_eq!(secs, vec![1, 2, 4, 8, 16]);
        match error {
            FetchError::RetriesExhausted {
                attempts,
                last_status,
            } => {
                assert_eq!(attempts, 6);
                assert_eq!(last_status, 500);
            }
            other => panic!("expected retries exhausted, got {:?}", other),
        }
    }

    /// Tests that a client-side status aborts with zero retries.
    ///
    /// An expired cookie answers 401; the loop must surface it from the
    /// first attempt without sleeping.
    ///
    /// Expected: 1 attempt, no delays, Upstream { status: 401 }
    #[test]
    fn client_error_aborts_without_retry() {
        let (attempts, delays, error) = drive(&[StatusCode::UNAUTHORIZED]);

        assert_eq!(attempts, 1);
        assert!(delays.is_empty());
        match error {
            FetchError::Upstream { status } => assert_eq!(status, 401),
            other => panic!("expected upstream error, got {:?}", other),
        }
    }

    /// Tests that a 503 during the retry run keeps the transient
    /// classification while a 403 midway through ends it.
    ///
    /// Expected: 3 attempts, two delays, Upstream { status: 403 }
    #[test]
    fn non_server_status_ends_retry_run() {
        let statuses = [
            StatusCode::SERVICE_UNAVAILABLE,
            StatusCode::SERVICE_UNAVAILABLE,
            StatusCode::FORBIDDEN,
        ];

        let (attempts, delays, error) = drive(&statuses);

        assert_eq!(attempts, 3);
        assert_eq!(delays.len(), 2);
        match error {
            FetchError::Upstream { status } => assert_eq!(status, 403),
            other => panic!("expected upstream error, got {:?}", other),
        }
    }
}
