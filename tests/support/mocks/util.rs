// tests/support/mocks/util.rs
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Clone)]
pub struct FixedClock;

impl article_manager::application::ports::time::Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        super::time::fixed_now()
    }
}

/// Hands out `tok1`, `tok2`, ... so stored names are predictable.
#[derive(Default)]
pub struct SequenceTokens {
    next: AtomicUsize,
}

impl article_manager::application::ports::util::TokenGenerator for SequenceTokens {
    fn generate(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        format!("tok{n}")
    }
}
