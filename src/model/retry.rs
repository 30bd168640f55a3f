/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::INSTRUMENT_DOWNLOAD_ATTEMPTS;
use crate::error::AppError;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Retry policy for the few calls that are allowed to be repeated
///
/// Only the instrument download performed while building the client uses it;
/// every other endpoint surfaces its failure straight to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    /// Total number of attempts, including the first one
    pub max_attempts: u32,
    /// Pause between attempts in milliseconds (None = retry immediately)
    pub retry_delay_millis: Option<u64>,
}

impl RetryConfig {
    /// Policy used for the instrument bootstrap: three attempts, no backoff
    #[must_use]
    pub fn bootstrap() -> Self {
        Self::with_max_attempts(INSTRUMENT_DOWNLOAD_ATTEMPTS)
    }

    /// Creates a policy with a number of attempts and no pause between them
    #[must_use]
    pub fn with_max_attempts(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            retry_delay_millis: None,
        }
    }

    /// Creates a policy with both a number of attempts and a fixed pause
    #[must_use]
    pub fn with_max_attempts_and_delay(max_attempts: u32, delay_millis: u64) -> Self {
        Self {
            max_attempts,
            retry_delay_millis: Some(delay_millis),
        }
    }

    /// Number of attempts; a zero setting still makes one attempt
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Pause between attempts, if any
    #[must_use]
    pub fn delay(&self) -> Option<Duration> {
        self.retry_delay_millis
            .filter(|&ms| ms > 0)
            .map(Duration::from_millis)
    }

    /// Runs `operation` until it succeeds or the attempts are exhausted.
    ///
    /// Returns the first success, or the error of the last attempt.
    pub async fn run<F, Fut, T>(&self, label: &str, mut operation: F) -> Result<T, AppError>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, AppError>>,
    {
        let attempts = self.attempts();
        let mut attempt = 1;
        loop {
            debug!("{} attempt {}/{}", label, attempt, attempts);
            match operation(attempt).await {
                Ok(value) => return Ok(value),
                Err(e) if attempt >= attempts => return Err(e),
                Err(e) => {
                    warn!("{} attempt {}/{} failed: {}", label, attempt, attempts, e);
                    if let Some(delay) = self.delay() {
                        tokio::time::sleep(delay).await;
                    }
                    attempt += 1;
                }
            }
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::bootstrap()
    }
}
