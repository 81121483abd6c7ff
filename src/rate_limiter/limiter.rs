use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use std::sync::Arc;
use tracing::debug;

use super::clock::{Clock, SystemClock};
use super::store::{InMemoryRateLimitStore, RateLimitEntry, RateLimitStore};
use crate::config_manager::RateLimitConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitDecision {
    pub allowed: bool,
    pub remaining: u32,
    pub limit: u32,
    pub reset_at: DateTime<Utc>,
}

impl RateLimitDecision {
    /// Whole seconds until the window resets, never less than one
    pub fn retry_after_secs(&self, now: DateTime<Utc>) -> u64 {
        let millis = (self.reset_at - now).num_milliseconds().max(0) as u64;
        ((millis + 999) / 1000).max(1)
    }
}

/// Fixed-window limiter: at most `max_requests` per identifier per window
pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    cleanup_probability: f64,
    store: Arc<dyn RateLimitStore>,
    clock: Arc<dyn Clock>,
}

impl RateLimiter {
    pub fn new(
        config: &RateLimitConfig,
        store: Arc<dyn RateLimitStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            max_requests: config.max_requests,
            window: Duration::milliseconds(config.window_ms as i64),
            cleanup_probability: config.cleanup_probability.clamp(0.0, 1.0),
            store,
            clock,
        }
    }

    /// In-memory store on the wall clock
    pub fn in_memory(config: &RateLimitConfig) -> Self {
        Self::new(
            config,
            Arc::new(InMemoryRateLimitStore::new()),
            Arc::new(SystemClock),
        )
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn check(&self, identifier: &str) -> RateLimitDecision {
        let now = self.clock.now();
        self.maybe_cleanup(now);

        let max_requests = self.max_requests;
        let window = self.window;
        let mut decision = None;

        self.store.update(identifier, &mut |slot| {
            if slot.as_ref().map_or(true, |entry| entry.is_expired(now)) {
                *slot = Some(RateLimitEntry {
                    request_count: 0,
                    window_reset_at: now + window,
                });
            }
            let Some(entry) = slot.as_mut() else {
                return;
            };

            if entry.request_count >= max_requests {
                decision = Some(RateLimitDecision {
                    allowed: false,
                    remaining: 0,
                    limit: max_requests,
                    reset_at: entry.window_reset_at,
                });
                return;
            }

            entry.request_count += 1;
            decision = Some(RateLimitDecision {
                allowed: true,
                remaining: max_requests - entry.request_count,
                limit: max_requests,
                reset_at: entry.window_reset_at,
            });
        });

        decision.unwrap_or(RateLimitDecision {
            allowed: false,
            remaining: 0,
            limit: max_requests,
            reset_at: now + window,
        })
    }

    fn maybe_cleanup(&self, now: DateTime<Utc>) {
        if self.cleanup_probability <= 0.0 {
            return;
        }
        if rand::thread_rng().gen_bool(self.cleanup_probability) {
            let evicted = self.store.evict_expired(now);
            if evicted > 0 {
                debug!(
                    "Evicted {} expired rate-limit entries, {} still tracked",
                    evicted,
                    self.store.len()
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rate_limiter::clock::testing::ManualClock;

    fn limiter(cleanup_probability: f64) -> (RateLimiter, Arc<ManualClock>, Arc<InMemoryRateLimitStore>) {
        let clock = Arc::new(ManualClock::new(Utc::now()));
        let store = Arc::new(InMemoryRateLimitStore::new());
        let config = RateLimitConfig {
            max_requests: 10,
            window_ms: 60_000,
            cleanup_probability,
        };
        let limiter = RateLimiter::new(&config, store.clone(), clock.clone());
        (limiter, clock, store)
    }

    #[test]
    fn ten_requests_then_denied() {
        let (limiter, _clock, _store) = limiter(0.0);

        for expected in (0..10).rev() {
            let decision = limiter.check("1.2.3.4");
            assert!(decision.allowed);
            assert_eq!(decision.remaining, expected);
        }

        let denied = limiter.check("1.2.3.4");
        assert!(!denied.allowed);
        assert_eq!(denied.remaining, 0);
    }

    #[test]
    fn denial_does_not_extend_window() {
        let (limiter, clock, _store) = limiter(0.0);
        let first = limiter.check("a");
        for _ in 0..9 {
            limiter.check("a");
        }
        clock.advance(Duration::seconds(30));
        let denied = limiter.check("a");
        assert!(!denied.allowed);
        assert_eq!(denied.reset_at, first.reset_at);
    }

    #[test]
    fn fresh_window_after_reset() {
        let (limiter, clock, _store) = limiter(0.0);
        for _ in 0..11 {
            limiter.check("a");
        }

        clock.advance(Duration::milliseconds(60_000));
        let decision = limiter.check("a");
        assert!(decision.allowed);
        assert_eq!(decision.remaining, 9);
        assert_eq!(decision.reset_at, limiter.now() + Duration::milliseconds(60_000));
    }

    #[test]
    fn identifiers_are_independent() {
        let (limiter, _clock, _store) = limiter(0.0);
        for _ in 0..10 {
            limiter.check("a");
        }
        assert!(!limiter.check("a").allowed);
        assert_eq!(limiter.check("b").remaining, 9);
    }

    #[test]
    fn cleanup_evicts_expired_entries() {
        let (limiter, clock, store) = limiter(1.0);
        limiter.check("a");
        limiter.check("b");
        assert_eq!(store.len(), 2);

        clock.advance(Duration::seconds(61));
        limiter.check("c");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn retry_after_rounds_up() {
        let now = Utc::now();
        let decision = RateLimitDecision {
            allowed: false,
            remaining: 0,
            limit: 10,
            reset_at: now + Duration::milliseconds(1500),
        };
        assert_eq!(decision.retry_after_secs(now), 2);
        assert_eq!(decision.retry_after_secs(now + Duration::seconds(5)), 1);
    }

    #[test]
    fn concurrent_checks_never_overshoot() {
        let (limiter, _clock, _store) = limiter(0.0);
        let limiter = Arc::new(limiter);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let limiter = limiter.clone();
                std::thread::spawn(move || (0..5).filter(|_| limiter.check("shared").allowed).count())
            })
            .collect();
        let allowed: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();

        assert_eq!(allowed, 10);
    }
}
