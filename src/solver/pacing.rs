//! Inter-step pacing for observers that animate solver progress.

use std::iter::{FusedIterator, Peekable};
use std::thread;
use std::time::Duration;

/// Iterator adapter that sleeps between consecutive items.
///
/// The first item is returned immediately and there is no pause after the
/// last one. A zero delay makes this a pass-through.
pub struct Paced<I: Iterator> {
    inner: Peekable<I>,
    delay: Duration,
    started: bool,
}

/// Wraps `iter` so that consecutive items are `delay` apart.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_tsp::solver::paced;
///
/// let items: Vec<_> = paced(1..=3, Duration::ZERO).collect();
/// assert_eq!(items, vec![1, 2, 3]);
/// ```
pub fn paced<I: Iterator>(iter: I, delay: Duration) -> Paced<I> {
    Paced {
        inner: iter.peekable(),
        delay,
        started: false,
    }
}

impl<I: Iterator> Iterator for Paced<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.started && !self.delay.is_zero() {
            // Compute the next step before pausing so nothing sleeps past the end.
            self.inner.peek()?;
            thread::sleep(self.delay);
        }
        self.started = true;
        self.inner.next()
    }
}

impl<I: FusedIterator> FusedIterator for Paced<I> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_pass_through() {
        let out: Vec<u32> = paced(vec![4, 5, 6].into_iter(), Duration::ZERO).collect();
        assert_eq!(out, vec![4, 5, 6]);
    }

    #[test]
    fn test_sleeps_only_between_items() {
        let delay = Duration::from_millis(15);
        let start = Instant::now();
        let out: Vec<u32> = paced(vec![1, 2, 3].into_iter(), delay).collect();
        let elapsed = start.elapsed();
        assert_eq!(out, vec![1, 2, 3]);
        // two gaps, no trailing pause
        assert!(elapsed >= delay * 2);
        assert!(elapsed < delay * 3 + Duration::from_millis(200));
    }

    #[test]
    fn test_single_item_never_sleeps() {
        let start = Instant::now();
        let out: Vec<u32> = paced(std::iter::once(9), Duration::from_secs(5)).collect();
        assert_eq!(out, vec![9]);
        assert!(start.elapsed() < Duration::from_secs(1));
    }
}
