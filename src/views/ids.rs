use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

/// Generates time-derived product ids: the current Unix time in milliseconds,
/// bumped forward when two ids are requested within the same millisecond.
///
/// Ids are unique per generator. Share one generator (it is `Sync`) between
/// every form that creates products.
#[derive(Debug, Default)]
pub struct TimestampIds {
    last: AtomicI64,
}

impl TimestampIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> String {
        let now = Utc::now().timestamp_millis();
        let mut prev = self.last.load(Ordering::SeqCst);
        loop {
            let next = now.max(prev + 1);
            match self
                .last
                .compare_exchange(prev, next, Ordering::SeqCst, Ordering::SeqCst)
            {
                Ok(_) => return next.to_string(),
                Err(actual) => prev = actual,
            }
        }
    }
}
