use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitEntry {
    pub request_count: u32,
    pub window_reset_at: DateTime<Utc>,
}

impl RateLimitEntry {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.window_reset_at
    }
}

/// Mapping of client identifier to its current window.
///
/// `update` must give the closure exclusive access to the slot for `key`, so
/// that a check-then-increment is atomic with respect to other callers.
pub trait RateLimitStore: Send + Sync {
    fn update(
        &self,
        key: &str,
        f: &mut dyn FnMut(&mut Option<RateLimitEntry>),
    );

    /// Drop every entry whose window has ended; returns how many were removed
    fn evict_expired(&self, now: DateTime<Utc>) -> usize;

    /// Number of identifiers currently tracked
    fn len(&self) -> usize;
}

/// Process-local store; each key is guarded by its DashMap shard lock
#[derive(Debug, Default)]
pub struct InMemoryRateLimitStore {
    entries: DashMap<String, RateLimitEntry>,
}

impl InMemoryRateLimitStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RateLimitStore for InMemoryRateLimitStore {
    fn update(
        &self,
        key: &str,
        f: &mut dyn FnMut(&mut Option<RateLimitEntry>),
    ) {
        match self.entries.entry(key.to_string()) {
            Entry::Occupied(mut occupied) => {
                let mut slot = Some(*occupied.get());
                f(&mut slot);
                match slot {
                    Some(entry) => *occupied.get_mut() = entry,
                    None => {
                        occupied.remove();
                    }
                }
            }
            Entry::Vacant(vacant) => {
                let mut slot = None;
                f(&mut slot);
                if let Some(entry) = slot {
                    vacant.insert(entry);
                }
            }
        }
    }

    fn evict_expired(&self, now: DateTime<Utc>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now));
        before.saturating_sub(self.entries.len())
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(count: u32, reset_at: DateTime<Utc>) -> RateLimitEntry {
        RateLimitEntry {
            request_count: count,
            window_reset_at: reset_at,
        }
    }

    #[test]
    fn update_inserts_and_mutates() {
        let store = InMemoryRateLimitStore::new();
        let reset_at = Utc::now();

        store.update("a", &mut |slot| {
            assert!(slot.is_none());
            *slot = Some(entry(1, reset_at));
        });
        store.update("a", &mut |slot| {
            if let Some(e) = slot {
                e.request_count += 1;
            }
        });

        let mut seen = None;
        store.update("a", &mut |slot| seen = *slot);
        assert_eq!(seen, Some(entry(2, reset_at)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn evict_expired_keeps_live_windows() {
        let store = InMemoryRateLimitStore::new();
        let now = Utc::now();
        store.update("old", &mut |slot| *slot = Some(entry(3, now - chrono::Duration::seconds(1))));
        store.update("edge", &mut |slot| *slot = Some(entry(3, now)));
        store.update("live", &mut |slot| *slot = Some(entry(3, now + chrono::Duration::seconds(30))));

        assert_eq!(store.evict_expired(now), 2);
        assert_eq!(store.len(), 1);
    }
}
