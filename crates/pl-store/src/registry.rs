//! Name -> selector registry.

use std::collections::BTreeMap;

use crate::error::{SelectorFailure, StoreError, StoreResult};
use crate::selectors::{SelectorId, View};
use crate::state::State;

pub type SelectorFn = Box<dyn Fn(&State) -> Result<View, SelectorFailure>>;

/// Selectors addressable by name. Built-ins are registered up front under
/// their [`SelectorId`] names, so custom selectors cannot shadow them.
pub struct SelectorRegistry {
    selectors: BTreeMap<String, SelectorFn>,
}

impl SelectorRegistry {
    pub fn empty() -> Self {
        Self {
            selectors: BTreeMap::new(),
        }
    }

    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        for id in SelectorId::ALL {
            registry
                .selectors
                .insert(id.name().to_string(), Box::new(move |state: &State| id.run(state)));
        }
        registry
    }

    pub fn register<F>(&mut self, name: &str, selector: F) -> StoreResult<()>
    where
        F: Fn(&State) -> Result<View, SelectorFailure> + 'static,
    {
        if name.trim().is_empty() {
            return Err(StoreError::SelectorRegistration {
                name: name.to_string(),
                reason: "name must not be empty",
            });
        }
        if self.selectors.contains_key(name) {
            return Err(StoreError::SelectorRegistration {
                name: name.to_string(),
                reason: "name already registered",
            });
        }
        self.selectors.insert(name.to_string(), Box::new(selector));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&SelectorFn> {
        self.selectors.get(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        self.selectors.keys().cloned().collect()
    }
}

impl Default for SelectorRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
