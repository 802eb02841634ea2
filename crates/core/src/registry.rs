// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Explicit trigger registration
//!
//! Rules are registered by name rather than discovered by filesystem
//! convention; the engine resolves a configured subplugin name to its
//! implementation through the registry.

use crate::trigger::Trigger;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Errors from trigger registration
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("trigger '{name}' is already registered")]
    Duplicate { name: &'static str },
}

/// Maps subplugin names to rule implementations
#[derive(Default)]
pub struct TriggerRegistry {
    triggers: BTreeMap<&'static str, Box<dyn Trigger>>,
}

impl TriggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule under its own subplugin name
    pub fn register(&mut self, trigger: Box<dyn Trigger>) -> Result<(), RegistryError> {
        let name = trigger.subplugin_name();
        if self.triggers.contains_key(name) {
            return Err(RegistryError::Duplicate { name });
        }
        debug!(trigger = name, "registered trigger subplugin");
        self.triggers.insert(name, trigger);
        Ok(())
    }

    /// Resolve a registered rule by subplugin name
    pub fn get(&self, name: &str) -> Option<&dyn Trigger> {
        self.triggers.get(name).map(|t| &**t)
    }

    /// Names of all registered rules, in sorted order
    pub fn names(&self) -> Vec<&'static str> {
        self.triggers.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }
}

impl fmt::Debug for TriggerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriggerRegistry")
            .field("triggers", &self.names())
            .finish()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
