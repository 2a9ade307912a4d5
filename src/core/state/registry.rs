//=========================================================================
// State Registry
//=========================================================================
//
// Maps state identifiers to zero-argument factories.
//
// Factories are resolved once per transition and never cached: every
// transition into a state gets a newly built instance.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::{debug, warn, Level};

//=== Internal Dependencies ===============================================

use super::{State, StateKey, TracedState};
use crate::core::error::LoopError;

//=== StateFactory ========================================================

/// Builds a fresh state instance.
pub type StateFactory<K> = Box<dyn Fn() -> Box<dyn State<K>>>;

//=== StateRegistry =======================================================

/// Registry of state factories keyed by identifier.
///
/// # Example
///
/// ```rust
/// # use stateloop::prelude::*;
/// let mut registry = StateRegistry::new();
/// registry.register("idle", IdleState::<&'static str>::new);
///
/// assert!(registry.contains(&"idle"));
/// let state = registry.create(&"idle").unwrap();
/// assert!(!state.check_done());
/// ```
pub struct StateRegistry<K: StateKey> {
    factories: HashMap<K, StateFactory<K>>,
    trace_level: Option<Level>,
}

impl<K: StateKey> StateRegistry<K> {
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
            trace_level: None,
        }
    }

    /// Wraps every state this registry builds in a [`TracedState`]
    /// logging at `level`.
    pub fn with_tracing(mut self, level: Level) -> Self {
        self.trace_level = Some(level);
        self
    }

    /// Enables or disables call tracing on an existing registry.
    pub fn set_tracing(&mut self, level: Option<Level>) {
        self.trace_level = level;
    }

    //--- Registration -----------------------------------------------------

    /// Registers a factory for `key`.
    ///
    /// The factory is called on every transition into `key`. Registering
    /// the same key twice replaces the earlier factory.
    pub fn register<F, T>(&mut self, key: K, factory: F)
    where
        F: Fn() -> T + 'static,
        T: State<K> + 'static,
    {
        let boxed: StateFactory<K> = Box::new(move || -> Box<dyn State<K>> { Box::new(factory()) });
        if self.factories.insert(key.clone(), boxed).is_some() {
            warn!("State {:?} was already registered and has been replaced", key);
        }
    }

    //--- Lookup -----------------------------------------------------------

    /// Builds a fresh instance of the state registered under `key`.
    ///
    /// # Errors
    ///
    /// [`LoopError::UnknownState`] if no factory is registered for `key`.
    pub fn create(&self, key: &K) -> Result<Box<dyn State<K>>, LoopError> {
        let factory = self
            .factories
            .get(key)
            .ok_or_else(|| LoopError::UnknownState(format!("{:?}", key)))?;

        debug!("Constructing state {:?}", key);
        let state = factory();

        Ok(match self.trace_level {
            Some(level) => Box::new(TracedState::new(key.clone(), state, level)),
            None => state,
        })
    }

    pub fn contains(&self, key: &K) -> bool {
        self.factories.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Iterates the registered identifiers in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.factories.keys()
    }
}

impl<K: StateKey> Default for StateRegistry<K> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    use crate::core::input::{JoystickEvent, KeyEvent, MouseEvent};
    use crate::core::platform_bridge::Surface;

    struct Numbered {
        serial: u32,
    }

    impl State<&'static str> for Numbered {
        fn handle_key_event(&mut self, _event: &KeyEvent) {}
        fn handle_mouse_event(&mut self, _event: &MouseEvent) {}
        fn handle_joystick_event(&mut self, _event: &JoystickEvent) {}
        fn update(&mut self, _dt: f32) {}
        fn render(&self, _surface: &mut dyn Surface, _actual_fps: f32) {}

        // Encode the serial so tests can tell instances apart.
        fn check_done(&self) -> bool {
            self.serial % 2 == 1
        }

        fn next_state(&self) -> Option<&'static str> {
            None
        }
    }

    fn counting_registry(counter: Rc<Cell<u32>>) -> StateRegistry<&'static str> {
        let mut registry = StateRegistry::new();
        registry.register("numbered", move || {
            counter.set(counter.get() + 1);
            Numbered {
                serial: counter.get(),
            }
        });
        registry
    }

    #[test]
    fn create_calls_factory_every_time() {
        let counter = Rc::new(Cell::new(0));
        let registry = counting_registry(counter.clone());

        let first = registry.create(&"numbered").unwrap();
        let second = registry.create(&"numbered").unwrap();

        assert_eq!(counter.get(), 2);
        assert!(first.check_done());
        assert!(!second.check_done());
    }

    #[test]
    fn create_unknown_key_fails() {
        let registry: StateRegistry<&'static str> = StateRegistry::new();

        match registry.create(&"missing") {
            Err(LoopError::UnknownState(key)) => assert_eq!(key, "\"missing\""),
            Err(other) => panic!("Expected UnknownState, got {:?}", other),
            Ok(_) => panic!("Expected UnknownState, got a state"),
        }
    }

    #[test]
    fn register_replaces_existing_factory() {
        let counter = Rc::new(Cell::new(0));
        let mut registry = counting_registry(counter.clone());
        registry.register("numbered", || Numbered { serial: 10 });

        let state = registry.create(&"numbered").unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(counter.get(), 0);
        assert!(!state.check_done());
    }

    #[test]
    fn traced_registry_preserves_behavior() {
        let counter = Rc::new(Cell::new(0));
        let registry = counting_registry(counter.clone()).with_tracing(Level::Trace);

        let state = registry.create(&"numbered").unwrap();

        assert!(state.check_done());
        assert_eq!(state.next_state(), None);
    }

    #[test]
    fn keys_and_contains() {
        let registry = counting_registry(Rc::new(Cell::new(0)));
        assert!(registry.contains(&"numbered"));
        assert!(!registry.contains(&"other"));
        assert!(!registry.is_empty());
        assert_eq!(registry.keys().collect::<Vec<_>>(), vec![&"numbered"]);
    }
}
