//! In-memory keyed rate limiter using a sliding window log.

use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use async_trait::async_trait;
use governor::clock::{Clock, DefaultClock, Reference};
use tokio::sync::Mutex;

use socialplan_core::ports::{RateLimitError, RateLimitResult, RateLimiter};

/// In-memory rate limiter configuration.
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum requests per window.
    pub max_requests: u32,
    /// Window duration.
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 15,
            window: Duration::from_secs(60),
        }
    }
}

/// Per-key rate limiter over a rolling window.
///
/// Every admitted request is logged with its arrival time. A key is refused
/// while it has `max_requests` entries younger than `window`; rejected
/// requests are not logged.
/// Note: Limits are per-process, not distributed across instances.
pub struct InMemoryRateLimiter<C: Clock = DefaultClock> {
    max_requests: usize,
    window: Duration,
    clock: C,
    log: Mutex<HashMap<String, VecDeque<C::Instant>>>,
}

impl InMemoryRateLimiter {
    pub fn new(config: RateLimitConfig) -> Result<Self, RateLimitError> {
        Self::with_clock(config, DefaultClock::default())
    }
}

impl<C: Clock> InMemoryRateLimiter<C> {
    pub fn with_clock(config: RateLimitConfig, clock: C) -> Result<Self, RateLimitError> {
        if config.max_requests == 0 {
            return Err(RateLimitError::InvalidConfig(
                "max_requests must be greater than zero".to_string(),
            ));
        }
        if config.window.is_zero() {
            return Err(RateLimitError::InvalidConfig(
                "window must be longer than zero".to_string(),
            ));
        }

        Ok(Self {
            max_requests: config.max_requests as usize,
            window: config.window,
            clock,
            log: Mutex::new(HashMap::new()),
        })
    }

    fn age(&self, now: C::Instant, then: C::Instant) -> Duration {
        now.duration_since(then).into()
    }

    /// Drop keys with no request inside the current window.
    pub async fn sweep(&self) {
        let now = self.clock.now();
        let mut log = self.log.lock().await;

        log.retain(|_, stamps| {
            stamps
                .back()
                .is_some_and(|last| self.age(now, *last) < self.window)
        });
        log.shrink_to_fit();
    }

    /// Number of keys currently tracked.
    pub async fn tracked_keys(&self) -> usize {
        self.log.lock().await.len()
    }
}

#[async_trait]
impl<C> RateLimiter for InMemoryRateLimiter<C>
where
    C: Clock + Send + Sync,
{
    async fn check(&self, key: &str) -> Result<RateLimitResult, RateLimitError> {
        let now = self.clock.now();
        let mut log = self.log.lock().await;
        let stamps = log.entry(key.to_string()).or_default();

        while stamps
            .front()
            .is_some_and(|first| self.age(now, *first) >= self.window)
        {
            stamps.pop_front();
        }

        if stamps.len() < self.max_requests {
            stamps.push_back(now);
            return Ok(RateLimitResult {
                allowed: true,
                remaining: (self.max_requests - stamps.len()) as u32,
                reset_after: Duration::ZERO,
            });
        }

        // The oldest entry leaving the window frees the next slot.
        let reset_after = stamps
            .front()
            .map(|first| self.window.saturating_sub(self.age(now, *first)))
            .unwrap_or(self.window);

        Ok(RateLimitResult {
            allowed: false,
            remaining: 0,
            reset_after,
        })
    }
}
