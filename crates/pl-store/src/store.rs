//! The store: state, subscribers and selector dispatch.

use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, warn};

use crate::config::{Mode, StoreConfig};
use crate::error::{SelectorFailure, StoreError, StoreResult};
use crate::registry::SelectorRegistry;
use crate::selectors::{SelectorId, View};
use crate::state::{State, StatePatch};

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub type Subscriber = Box<dyn FnMut(&Store)>;

/// Single-writer store. Construct one per application (or per test) and pass
/// it to whatever renders from it.
pub struct Store {
    config: StoreConfig,
    state: State,
    registry: SelectorRegistry,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl Store {
    pub fn new(config: StoreConfig) -> Self {
        Self::with_state(config, State::default())
    }

    pub fn with_state(config: StoreConfig, state: State) -> Self {
        Self {
            config,
            state,
            registry: SelectorRegistry::with_builtins(),
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn mode(&self) -> Mode {
        self.config.mode
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Merge `patch` into the state, then notify every subscriber in
    /// registration order before returning.
    pub fn set_state(&mut self, patch: StatePatch) {
        patch.apply(&mut self.state);

        // Subscribers only get `&Store`, so the list cannot change while it
        // is being walked. It is put back even if a subscriber panics.
        let mut subscribers = std::mem::take(&mut self.subscribers);
        debug!(subscribers = subscribers.len(), "state updated");
        let store = &*self;
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            for (_, subscriber) in subscribers.iter_mut() {
                subscriber(store);
            }
        }));
        self.subscribers = subscribers;
        if let Err(payload) = outcome {
            panic::resume_unwind(payload);
        }
    }

    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: FnMut(&Store) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub fn register_selector<F>(&mut self, name: &str, selector: F) -> StoreResult<()>
    where
        F: Fn(&State) -> Result<View, SelectorFailure> + 'static,
    {
        self.registry.register(name, selector)
    }

    pub fn selector_names(&self) -> Vec<String> {
        self.registry.names()
    }

    /// Run a built-in selector.
    pub fn select(&self, id: SelectorId, fallback: Option<View>) -> StoreResult<Option<View>> {
        let outcome = id
            .run(&self.state)
            .map_err(|source| self.execution_error(id.name(), source));
        self.settle(id.name(), outcome, fallback)
    }

    /// Run any registered selector by name.
    pub fn select_named(&self, name: &str, fallback: Option<View>) -> StoreResult<Option<View>> {
        let outcome = match self.registry.get(name) {
            Some(selector) => {
                selector(&self.state).map_err(|source| self.execution_error(name, source))
            }
            None => Err(StoreError::Selector {
                name: name.to_string(),
                available: self.registry.names(),
            }),
        };
        self.settle(name, outcome, fallback)
    }

    fn execution_error(&self, name: &str, source: SelectorFailure) -> StoreError {
        StoreError::SelectorExecution {
            name: name.to_string(),
            source,
            state_keys: self.state.keys(),
        }
    }

    fn settle(
        &self,
        name: &str,
        outcome: StoreResult<View>,
        fallback: Option<View>,
    ) -> StoreResult<Option<View>> {
        match (outcome, self.config.mode) {
            (Ok(view), _) => Ok(Some(view)),
            (Err(err), Mode::Strict) => Err(err),
            (Err(err), Mode::Lenient) => {
                warn!(selector = name, error = %err, "selector failed; using fallback");
                Ok(fallback)
            }
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}
