use std::sync::atomic::{AtomicI64, Ordering};

/// Record id source.
///
/// Ids are the creation time in epoch milliseconds, bumped by one when two
/// records are created within the same millisecond, so they stay unique
/// and strictly increasing for the lifetime of the generator.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> i64 {
        let now = chrono::Utc::now().timestamp_millis();
        let mut prev = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(prev + 1);
            match self
                .last
                .compare_exchange_weak(prev, candidate, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => return candidate,
                Err(actual) => prev = actual,
            }
        }
    }

    /// Make sure future ids are greater than `id`. Called with ids loaded
    /// from storage.
    pub fn observe(&self, id: i64) {
        self.last.fetch_max(id, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_strictly_increase() {
        let ids = IdGenerator::new();
        let mut prev = ids.next_id();
        for _ in 0..1_000 {
            let next = ids.next_id();
            assert!(next > prev);
            prev = next;
        }
    }

    #[test]
    fn observed_ids_are_never_reissued() {
        let ids = IdGenerator::new();
        let far_future = chrono::Utc::now().timestamp_millis() + 1_000_000;
        ids.observe(far_future);
        assert_eq!(ids.next_id(), far_future + 1);
    }
}
