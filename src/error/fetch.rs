use thiserror::Error;

/// Errors from the group audit-log endpoint.
///
/// The variants split along the retry taxonomy: `Upstream` with a 5xx status is
/// the only transient case and is retried with backoff by the client;
/// everything else fails the current poll cycle immediately.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level failure (connection, timeout, or malformed body).
    ///
    /// Not retried: any error without an HTTP status is treated as
    /// non-recoverable.
    #[error("audit log request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    ///
    /// Server-side statuses (5xx) are retried by the caller before this
    /// surfaces; client-side statuses (auth, rate limit) surface immediately.
    #[error("audit log request returned status {status}")]
    Upstream { status: u16 },

    /// The retry budget for a transient failure was exhausted.
    ///
    /// Carries the number of attempts made, including the initial one.
    #[error("audit log request failed after {attempts} attempts (last status {last_status})")]
    RetriesExhausted { attempts: u32, last_status: u16 },
}
