use std::time::{Duration, Instant};

/// A single cached value with a wall-clock time-to-live.
#[derive(Debug)]
pub struct TtlCache<T> {
    entry: Option<CacheEntry<T>>,
    ttl: Duration,
}

#[derive(Debug)]
struct CacheEntry<T> {
    value: T,
    stored_at: Instant,
}

impl<T> CacheEntry<T> {
    fn is_fresh_at(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.stored_at) < ttl
    }
}

impl<T> TtlCache<T> {
    pub const fn new(ttl: Duration) -> Self {
        Self { entry: None, ttl }
    }

    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn get(&self) -> Option<&T> {
        self.get_at(Instant::now())
    }

    /// Returns the value if it was stored less than `ttl` before `now`
    pub fn get_at(&self, now: Instant) -> Option<&T> {
        self.entry
            .as_ref()
            .filter(|entry| entry.is_fresh_at(now, self.ttl))
            .map(|entry| &entry.value)
    }

    pub fn insert(&mut self, value: T) {
        self.insert_at(value, Instant::now());
    }

    pub fn insert_at(&mut self, value: T, now: Instant) {
        self.entry = Some(CacheEntry {
            value,
            stored_at: now,
        });
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// Time left before the current entry expires, if there is a fresh one
    pub fn remaining(&self) -> Option<Duration> {
        let entry = self.entry.as_ref()?;
        let age = entry.stored_at.elapsed();
        self.ttl.checked_sub(age).filter(|left| !left.is_zero())
    }
}
