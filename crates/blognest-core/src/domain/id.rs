use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

/// Issues ids derived from the creation time in milliseconds.
///
/// Two calls landing in the same millisecond would produce the same timestamp,
/// so every id is bumped to at least one past the previous one handed out by
/// this generator.
#[derive(Debug, Default)]
pub struct TimestampIds {
    last: AtomicI64,
}

impl TimestampIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id for the current wall-clock time.
    pub fn next(&self) -> i64 {
        self.next_at(Utc::now().timestamp_millis())
    }

    /// Next id for an explicit timestamp.
    pub fn next_at(&self, now_millis: i64) -> i64 {
        let (Ok(prev) | Err(prev)) =
            self.last
                .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| {
                    Some(now_millis.max(last + 1))
                });
        now_millis.max(prev + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follows_the_clock() {
        let ids = TimestampIds::new();
        assert_eq!(ids.next_at(1_700_000_000_000), 1_700_000_000_000);
        assert_eq!(ids.next_at(1_700_000_000_500), 1_700_000_000_500);
    }

    #[test]
    fn test_same_millisecond_does_not_repeat() {
        let ids = TimestampIds::new();
        let a = ids.next_at(42);
        let b = ids.next_at(42);
        let c = ids.next_at(41);
        assert_eq!((a, b, c), (42, 43, 44));
    }
}
