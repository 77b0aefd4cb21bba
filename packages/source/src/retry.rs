//! HTTP retry helpers for transient errors.
//!
//! Page fetches go through [`send_text`] instead of calling
//! `reqwest::blocking::RequestBuilder::send()` directly, so every request
//! gets retried with exponential backoff on timeouts, connection failures,
//! rate limiting, and server errors.
//!
//! ```ignore
//! let html = retry::send_text(|| client.get(url), settings.retries)?;
//! ```

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::{RequestBuilder, Response};

use crate::SourceError;

/// Largest backoff exponent; later retries all wait 64s.
const MAX_BACKOFF_EXPONENT: u32 = 6;

/// Delay before retry `attempt` (1-based): 2s, 4s, 8s, ... capped at 64s.
#[must_use]
pub const fn backoff_delay(attempt: u32) -> Duration {
    let exponent = if attempt > MAX_BACKOFF_EXPONENT {
        MAX_BACKOFF_EXPONENT
    } else {
        attempt
    };
    Duration::from_secs(1u64 << exponent)
}

/// Returns `true` for statuses worth retrying: 429 and 5xx.
#[must_use]
pub fn is_retryable_status(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

/// Sends the request built by `build_request` and returns the body as text.
///
/// `build_request` is called once per attempt since builders are consumed
/// by `send()`. Up to `max_retries` retries are made after the first
/// attempt. HTTP 4xx other than 429 is permanent and returned at once.
///
/// # Errors
///
/// Returns [`SourceError::Http`] for transport failures and
/// [`SourceError::Status`] for non-success statuses, once retries are
/// exhausted or the failure is permanent.
pub fn send_text<F>(build_request: F, max_retries: u32) -> Result<String, SourceError>
where
    F: Fn() -> RequestBuilder,
{
    let response = send_inner(&build_request, max_retries)?;
    Ok(response.text()?)
}

fn send_inner<F>(build_request: &F, max_retries: u32) -> Result<Response, SourceError>
where
    F: Fn() -> RequestBuilder,
{
    let mut attempt = 0;

    loop {
        if attempt > 0 {
            let delay = backoff_delay(attempt);
            log::warn!("  retry {attempt}/{max_retries} in {delay:?}...");
            std::thread::sleep(delay);
        }

        match build_request().send() {
            Err(e) => {
                if is_transient(&e) && attempt < max_retries {
                    log::warn!("  transient error: {e}");
                    attempt += 1;
                    continue;
                }
                return Err(SourceError::Http(e));
            }
            Ok(response) => {
                let status = response.status();

                if is_retryable_status(status) && attempt < max_retries {
                    log::warn!("  HTTP {status}");
                    attempt += 1;
                    continue;
                }

                if status.is_client_error() || status.is_server_error() {
                    return Err(SourceError::Status {
                        url: response.url().to_string(),
                        status: status.as_u16(),
                    });
                }

                return Ok(response);
            }
        }
    }
}

/// Returns `true` if the error is likely transient and worth retrying.
fn is_transient(e: &reqwest::Error) -> bool {
    e.is_timeout() || e.is_connect() || e.is_body() || e.is_decode()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backoff_doubles() {
        assert_eq!(backoff_delay(1), Duration::from_secs(2));
        assert_eq!(backoff_delay(2), Duration::from_secs(4));
        assert_eq!(backoff_delay(3), Duration::from_secs(8));
    }

    #[test]
    fn backoff_is_capped() {
        assert_eq!(backoff_delay(6), Duration::from_secs(64));
        assert_eq!(backoff_delay(7), Duration::from_secs(64));
        assert_eq!(backoff_delay(64), Duration::from_secs(64));
        assert_eq!(backoff_delay(u32::MAX), Duration::from_secs(64));
    }

    #[test]
    fn only_rate_limits_and_server_errors_are_retryable() {
        assert!(is_retryable_status(StatusCode::TOO_MANY_REQUESTS));
        assert!(is_retryable_status(StatusCode::BAD_GATEWAY));
        assert!(is_retryable_status(StatusCode::SERVICE_UNAVAILABLE));
        assert!(!is_retryable_status(StatusCode::NOT_FOUND));
        assert!(!is_retryable_status(StatusCode::FORBIDDEN));
        assert!(!is_retryable_status(StatusCode::OK));
    }
}
