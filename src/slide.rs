use log::debug;

use crate::error::{Result, SliderError};

/// Ordered slide set plus the current position.
///
/// The set is fixed at construction. Every navigation keeps the index inside
/// `[0, len)`; on an empty set they change nothing.
#[derive(Debug, Clone)]
pub struct SlideDeck<S> {
    slides: Vec<S>,
    index: usize,
}

impl<S> SlideDeck<S> {
    pub fn new(slides: Vec<S>) -> Self {
        Self { slides, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&S> {
        self.slides.get(self.index)
    }

    pub fn slides(&self) -> &[S] {
        &self.slides
    }

    // next/previous return `None` on an empty set
    pub fn next(&mut self) -> Option<usize> {
        if self.slides.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.slides.len();
        debug!("Slide {} of {}", self.index + 1, self.slides.len());
        Some(self.index)
    }

    pub fn previous(&mut self) -> Option<usize> {
        let count = self.slides.len();
        if count == 0 {
            return None;
        }
        self.index = (self.index + count - 1) % count;
        debug!("Slide {} of {}", self.index + 1, count);
        Some(self.index)
    }

    /// Jumps straight to `target`. Out-of-range targets are rejected and the
    /// index is left as it was.
    pub fn goto(&mut self, target: usize) -> Result<usize> {
        let count = self.slides.len();
        if target >= count {
            return Err(SliderError::TargetOutOfRange { target, count });
        }
        self.index = target;
        debug!("Slide {} of {}", self.index + 1, count);
        Ok(self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(n: usize) -> SlideDeck<String> {
        SlideDeck::new((0..n).map(|i| format!("slide-{i}.jpg")).collect())
    }

    #[test]
    fn next_wraps_to_first() {
        let mut deck = deck(3);
        assert_eq!(deck.next(), Some(1));
        assert_eq!(deck.next(), Some(2));
        assert_eq!(deck.next(), Some(0));
    }

    #[test]
    fn previous_wraps_to_last() {
        let mut deck = deck(3);
        assert_eq!(deck.previous(), Some(2));
        assert_eq!(deck.current().map(String::as_str), Some("slide-2.jpg"));
    }

    #[test]
    fn n_steps_forward_return_to_start() {
        for n in 1..8 {
            let mut deck = deck(n);
            for start in 0..n {
                deck.goto(start).unwrap();
                for _ in 0..n {
                    deck.next();
                }
                assert_eq!(deck.index(), start, "n = {n}");
            }
        }
    }

    #[test]
    fn previous_undoes_next() {
        for n in 1..8 {
            let mut deck = deck(n);
            for start in 0..n {
                deck.goto(start).unwrap();
                deck.next();
                deck.previous();
                assert_eq!(deck.index(), start, "n = {n}");
            }
        }
    }

    #[test]
    fn goto_rejects_out_of_range() {
        let mut deck = deck(3);
        deck.goto(1).unwrap();
        assert_eq!(
            deck.goto(3),
            Err(SliderError::TargetOutOfRange { target: 3, count: 3 })
        );
        assert_eq!(deck.index(), 1);
    }

    #[test]
    fn empty_deck_never_moves() {
        let mut deck = deck(0);
        assert_eq!(deck.next(), None);
        assert_eq!(deck.previous(), None);
        assert!(deck.goto(0).is_err());
        assert_eq!(deck.index(), 0);
        assert!(deck.current().is_none());
    }
}
