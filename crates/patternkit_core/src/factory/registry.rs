use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::error::{CoreError, Result};

/// Caller-assigned product key.
pub type Key = i32;

type Builder<B> = Box<dyn Fn() -> Arc<B>>;

/// Registry mapping a [`Key`] to a deferred constructor for products of type `B`.
///
/// `B` is usually a trait object (`Factory<dyn Shape>`). The registry only
/// holds builders; products are handed out and never retained.
pub struct Factory<B: ?Sized> {
    builders: HashMap<Key, Builder<B>>,
}

impl<B: ?Sized + 'static> Factory<B> {
    pub fn new() -> Self {
        Self {
            builders: HashMap::new(),
        }
    }

    /// Bind `key` to `builder`.
    ///
    /// An existing binding for `key` is replaced. Returns `true` when that happened.
    pub fn register<F>(&mut self, key: Key, builder: F) -> bool
    where
        F: Fn() -> Arc<B> + 'static,
    {
        let replaced = self.builders.insert(key, Box::new(builder)).is_some();
        if replaced {
            debug!(key, "factory builder replaced");
        } else {
            debug!(key, "factory builder registered");
        }
        replaced
    }

    /// Bind `key` to `build(args)`, capturing `args` now.
    ///
    /// Each `create` hands `build` its own clone of the captured arguments.
    pub fn register_with<A, F>(&mut self, key: Key, args: A, build: F) -> bool
    where
        A: Clone + 'static,
        F: Fn(A) -> Arc<B> + 'static,
    {
        self.register(key, move || build(args.clone()))
    }

    /// Build a new product for `key`, or `None` when nothing is registered.
    pub fn create(&self, key: Key) -> Option<Arc<B>> {
        self.builders.get(&key).map(|build| build())
    }

    /// Like [`Factory::create`], but reports a miss as a `NotFound` error.
    pub fn require(&self, key: Key) -> Result<Arc<B>> {
        self.create(key).ok_or_else(|| CoreError::unknown_key(key))
    }

    pub fn contains(&self, key: Key) -> bool {
        self.builders.contains_key(&key)
    }

    /// Remove the binding for `key`. Returns `true` if one existed.
    pub fn unregister(&mut self, key: Key) -> bool {
        self.builders.remove(&key).is_some()
    }

    /// Registered keys in ascending order.
    pub fn keys(&self) -> Vec<Key> {
        let mut keys: Vec<Key> = self.builders.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.builders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }
}

impl<B: ?Sized + 'static> Default for Factory<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: ?Sized + 'static> fmt::Debug for Factory<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Factory").field("keys", &self.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Domain, ErrorKind, Payload};
    use std::cell::Cell;
    use std::rc::Rc;

    trait Product {
        fn variant(&self) -> &'static str;
        fn size(&self) -> u32;
    }

    struct Plain;

    impl Product for Plain {
        fn variant(&self) -> &'static str {
            "plain"
        }
        fn size(&self) -> u32 {
            0
        }
    }

    struct Scaled {
        size: u32,
    }

    impl Product for Scaled {
        fn variant(&self) -> &'static str {
            "scaled"
        }
        fn size(&self) -> u32 {
            self.size
        }
    }

    #[test]
    fn register_reports_replacement() {
        let mut factory: Factory<dyn Product> = Factory::new();
        assert!(!factory.register(0, || Arc::new(Plain)));
        assert!(factory.register(0, || Arc::new(Scaled { size: 3 })));
        assert_eq!(factory.len(), 1);
        assert_eq!(factory.create(0).unwrap().variant(), "scaled");
    }

    #[test]
    fn captured_args_are_cloned_per_build() {
        let mut factory: Factory<dyn Product> = Factory::new();
        factory.register_with(1, 5u32, |size| Arc::new(Scaled { size }));

        let a = factory.create(1).unwrap();
        let b = factory.create(1).unwrap();
        assert_eq!(a.size(), 5);
        assert_eq!(b.size(), 5);
    }

    #[test]
    fn builder_runs_once_per_create() {
        let calls = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&calls);

        let mut factory: Factory<dyn Product> = Factory::new();
        factory.register(0, move || {
            counter.set(counter.get() + 1);
            Arc::new(Plain)
        });

        assert_eq!(calls.get(), 0);
        let _ = factory.create(0);
        let _ = factory.create(0);
        let _ = factory.create(9);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn require_miss_is_not_found() {
        let factory: Factory<dyn Product> = Factory::new();
        let e = factory.require(4).err().unwrap();
        assert_eq!(e.kind, ErrorKind::NotFound);
        assert_eq!(e.domain, Domain::Factory);
        assert_eq!(e.payload, Payload::Key(4));
    }

    #[test]
    fn unregister_and_keys() {
        let mut factory: Factory<dyn Product> = Factory::default();
        assert!(factory.is_empty());
        factory.register(2, || Arc::new(Plain));
        factory.register(-1, || Arc::new(Plain));
        factory.register(0, || Arc::new(Plain));
        assert_eq!(factory.keys(), vec![-1, 0, 2]);

        assert!(factory.unregister(0));
        assert!(!factory.unregister(0));
        assert!(!factory.contains(0));
        assert!(factory.create(0).is_none());
        assert_eq!(format!("{factory:?}"), "Factory { keys: [-1, 2] }");
    }
}
