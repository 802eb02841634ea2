// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! lifecycle-triggers: trigger rule subplugins for the lifecycle engine

pub mod emptycourse;

pub use emptycourse::EmptyCourse;

use lifecycle_core::{RegistryError, TriggerRegistry};

/// A registry containing every built-in trigger rule
pub fn builtin_registry() -> Result<TriggerRegistry, RegistryError> {
    let mut registry = TriggerRegistry::new();
    registry.register(Box::new(EmptyCourse::new()))?;
    Ok(registry)
}
