//! Button handler registry
//!
//! One handler per command code. Registering again for the same code
//! replaces the previous handler; there is no removal.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;

/// Handlers keyed by command code
#[derive(Default)]
pub struct HandlerRegistry<'a> {
    handlers: BTreeMap<u8, Box<dyn FnMut() + 'a>>,
}

impl<'a> HandlerRegistry<'a> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            handlers: BTreeMap::new(),
        }
    }

    /// Bind `handler` to `code`
    ///
    /// Returns true if a previous handler was replaced.
    pub fn register<F>(&mut self, code: u8, handler: F) -> bool
    where
        F: FnMut() + 'a,
    {
        self.handlers.insert(code, Box::new(handler)).is_some()
    }

    /// Run the handler bound to `code`
    ///
    /// Returns true if a handler ran.
    pub fn dispatch(&mut self, code: u8) -> bool {
        match self.handlers.get_mut(&code) {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }

    /// Check if a handler is bound to `code`
    pub fn contains(&self, code: u8) -> bool {
        self.handlers.contains_key(&code)
    }

    /// Number of bound codes
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if no handler is bound
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl core::fmt::Debug for HandlerRegistry<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.handlers.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    #[test]
    fn test_dispatch_unbound_code() {
        let mut registry = HandlerRegistry::new();
        assert!(!registry.dispatch(3));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_last_registration_wins() {
        let first = Cell::new(0);
        let second = Cell::new(0);
        let mut registry = HandlerRegistry::new();

        assert!(!registry.register(1, || first.set(first.get() + 1)));
        assert!(registry.register(1, || second.set(second.get() + 1)));
        assert!(registry.dispatch(1));

        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_out_of_range_code_accepted() {
        let hits = Cell::new(0);
        let mut registry = HandlerRegistry::new();
        registry.register(200, || hits.set(hits.get() + 1));

        assert!(registry.contains(200));
        assert!(registry.dispatch(200));
        assert_eq!(hits.get(), 1);
    }
}
