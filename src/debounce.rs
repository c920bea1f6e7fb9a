//! Search Debounce
//!
//! Each keystroke takes a new generation number. A pending search only
//! proceeds if no newer keystroke arrived while it waited out the quiet
//! period, and its results are only applied if that still holds when the
//! response lands.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Debug, Default)]
pub struct Debouncer {
    generation: Rc<Cell<u64>>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new input event, superseding every earlier one
    pub fn bump(&self) -> u64 {
        let next = self.generation.get() + 1;
        self.generation.set(next);
        next
    }

    pub fn is_latest(&self, generation: u64) -> bool {
        self.generation.get() == generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_last_bump_is_latest() {
        let debouncer = Debouncer::new();
        let first = debouncer.bump();
        let second = debouncer.bump();
        let third = debouncer.bump();

        assert!(!debouncer.is_latest(first));
        assert!(!debouncer.is_latest(second));
        assert!(debouncer.is_latest(third));
    }

    #[test]
    fn test_clones_share_generation() {
        let debouncer = Debouncer::new();
        let handle = debouncer.clone();
        let first = debouncer.bump();
        handle.bump();
        assert!(!debouncer.is_latest(first));
    }
}
