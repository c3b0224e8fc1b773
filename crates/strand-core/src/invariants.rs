//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::{Context, Stream};

impl<S: Stream> Context<'_, S> {
    #[inline]
    pub(crate) fn ensure_good(&self) {
        assert!(
            self.good(),
            "broken parser invariant: advance past end of input at {} (caller must check the token first)",
            self.position()
        );
    }
}

/// Bounded repetition limits are checked once, at construction.
#[inline]
pub(crate) fn assert_repeat_bounds(min: usize, max: usize) {
    assert!(
        max == 0 || min <= max,
        "broken parser invariant: repetition minimum {min} exceeds maximum {max}"
    );
}
