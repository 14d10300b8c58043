//! Monotonic identifier sequence.
//!
//! A `Sequence` is a plain value; callers that share one across threads keep it
//! behind the same lock as the data it numbers, so that issuing an id and
//! resetting the sequence are ordered with every other mutation.

/// Monotonically increasing counter that hands out identifiers starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sequence {
    next: u64,
}

impl Sequence {
    /// First value handed out by a fresh (or reset) sequence.
    pub const START: u64 = 1;

    pub fn new() -> Self {
        Self { next: Self::START }
    }

    /// Return the current value and advance the counter.
    pub fn advance(&mut self) -> u64 {
        let value = self.next;
        self.next += 1;
        value
    }

    /// Value the next call to [`Sequence::advance`] will return.
    pub fn peek(&self) -> u64 {
        self.next
    }

    /// Rewind to [`Sequence::START`].
    pub fn reset(&mut self) {
        self.next = Self::START;
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_at_one() {
        let mut seq = Sequence::new();
        assert_eq!(seq.peek(), 1);
        assert_eq!(seq.advance(), 1);
        assert_eq!(seq.advance(), 2);
        assert_eq!(seq.peek(), 3);
    }

    #[test]
    fn reset_rewinds_to_start() {
        let mut seq = Sequence::default();
        seq.advance();
        seq.advance();
        seq.reset();
        assert_eq!(seq.advance(), Sequence::START);
    }

    proptest! {
        /// Property: values are strictly increasing, so never repeated.
        #[test]
        fn advance_is_strictly_increasing(n in 1usize..500) {
            let mut seq = Sequence::new();
            let mut last = 0u64;
            for _ in 0..n {
                let v = seq.advance();
                prop_assert!(v > last);
                last = v;
            }
            prop_assert_eq!(last, n as u64);
        }
    }
}
