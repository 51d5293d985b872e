use std::future::Future;
use std::time::Duration;

use tracing::warn;

use crate::services::{TransportError, TransportResult};

const MAX_ATTEMPTS: u32 = 3;
const BASE_DELAY_MS: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            base_delay: Duration::from_millis(BASE_DELAY_MS),
        }
    }
}

impl RetryPolicy {
    /// Wait after the 0-indexed `attempt` failed.
    pub fn delay_after(&self, attempt: u32) -> Duration {
        self.base_delay * 2u32.pow(attempt)
    }

    /// Run `operation` until it succeeds, fails with a non rate-limit error, or
    /// `max_attempts` is spent. The last error is returned as-is.
    pub async fn run<T, F, Fut>(&self, mut operation: F) -> TransportResult<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = TransportResult<T>>,
    {
        let mut attempt = 0;
        loop {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(err) if !is_rate_limited(&err) || attempt + 1 >= self.max_attempts => {
                    return Err(err);
                }
                Err(err) => {
                    let delay = self.delay_after(attempt);
                    warn!(
                        attempt = attempt + 1,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "rate limited by Linear, backing off"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }
}

// TODO: match on the RATELIMITED extension code instead of the message text.
pub fn is_rate_limited(err: &TransportError) -> bool {
    err.message.contains("429") || err.message.to_lowercase().contains("rate limit")
}

pub fn is_authentication_failure(err: &TransportError) -> bool {
    let message = &err.message;
    message.contains("401") || message.contains("authentication") || message.contains("Unauthorized")
}
