//! Choosing between the accelerated renderer and the 2D fallback.
//!
//! Startup waits (bounded) for the rendering backend to appear, then runs
//! the accelerated initializer once. Either failure lands on the fallback,
//! but the two causes stay distinguishable in [`FallbackReason`].

use crate::constants::{READY_POLL_ATTEMPTS, READY_POLL_INTERVAL_MS};
use crate::error::{InitError, NotReady};
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PollPolicy {
    pub attempts: u32,
    pub interval: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            attempts: READY_POLL_ATTEMPTS,
            interval: Duration::from_millis(READY_POLL_INTERVAL_MS),
        }
    }
}

impl PollPolicy {
    /// Longest time [`wait_until_ready`] can spend sleeping.
    pub fn deadline(&self) -> Duration {
        self.interval * self.attempts
    }
}

/// Wait until `probe` reports the backend as present.
///
/// The probe runs once immediately, then after each of up to
/// `policy.attempts` sleeps. Returns the number of sleeps it took.
pub async fn wait_until_ready<P, S, F>(
    mut probe: P,
    mut sleep: S,
    policy: PollPolicy,
) -> Result<u32, NotReady>
where
    P: FnMut() -> bool,
    S: FnMut(Duration) -> F,
    F: Future<Output = ()>,
{
    if probe() {
        return Ok(0);
    }
    for attempt in 1..=policy.attempts {
        sleep(policy.interval).await;
        if probe() {
            return Ok(attempt);
        }
    }
    Err(NotReady {
        attempts: policy.attempts,
    })
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FallbackReason {
    #[error(transparent)]
    LibraryUnavailable(NotReady),
    #[error(transparent)]
    Init(InitError),
}

#[derive(Debug)]
pub enum Mode<R> {
    Accelerated(R),
    Fallback(FallbackReason),
}

impl<R> Mode<R> {
    pub fn is_accelerated(&self) -> bool {
        matches!(self, Mode::Accelerated(_))
    }
}

/// Wait for the backend, then run `init` exactly once.
///
/// `init` is never called if the backend does not show up in time, and a
/// failed `init` is not retried.
pub async fn select_mode<R, P, S, F, I, IF>(
    probe: P,
    sleep: S,
    policy: PollPolicy,
    init: I,
) -> Mode<R>
where
    P: FnMut() -> bool,
    S: FnMut(Duration) -> F,
    F: Future<Output = ()>,
    I: FnOnce() -> IF,
    IF: Future<Output = Result<R, InitError>>,
{
    match wait_until_ready(probe, sleep, policy).await {
        Ok(polls) => {
            if polls > 0 {
                log::info!("[startup] backend ready after {} polls", polls);
            }
        }
        Err(e) => {
            log::warn!("[startup] {e}; using fallback");
            return Mode::Fallback(FallbackReason::LibraryUnavailable(e));
        }
    }
    match init().await {
        Ok(r) => Mode::Accelerated(r),
        Err(e) => {
            log::warn!("[startup] accelerated init failed: {e}; using fallback");
            Mode::Fallback(FallbackReason::Init(e))
        }
    }
}
