// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Instance settings: declarations, storage contract, in-memory store
//!
//! The host persists per-instance setting rows; rules only read them.
//! `SettingsStore` is the read contract, `MemorySettingsStore` the
//! in-process implementation used by the config loader and in tests.

use crate::trigger::TriggerInstanceId;
use std::collections::HashMap;
use thiserror::Error;

/// Which subplugin family a settings row belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsScope {
    /// Trigger subplugin settings
    Trigger,
    /// Step subplugin settings
    Step,
}

/// Wire type of a declared setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    /// Comma-joined list of opaque tokens
    Sequence,
    Int,
    Text,
    Bool,
}

/// One setting an instance of a subplugin offers for the user to define
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceSetting {
    pub name: &'static str,
    pub param_type: ParamType,
    /// Whether the field must be present in configuration. An empty
    /// value may still be acceptable; required only means "declared".
    pub required: bool,
}

impl InstanceSetting {
    pub fn new(name: &'static str, param_type: ParamType, required: bool) -> Self {
        Self {
            name,
            param_type,
            required,
        }
    }
}

/// Errors from settings retrieval
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("no settings stored for trigger instance {id}")]
    InstanceNotFound { id: TriggerInstanceId },
    #[error("instance {instance} has no value for setting '{name}'")]
    MissingSetting {
        instance: TriggerInstanceId,
        name: String,
    },
}

/// Read access to persisted per-instance settings
pub trait SettingsStore {
    /// All setting values stored for an instance under a scope
    fn get_settings(
        &self,
        instance: TriggerInstanceId,
        scope: SettingsScope,
    ) -> Result<HashMap<String, String>, SettingsError>;
}

/// In-memory settings store
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    rows: HashMap<(i64, SettingsScope), HashMap<String, String>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store one setting value for an instance
    pub fn insert(
        &mut self,
        instance: TriggerInstanceId,
        scope: SettingsScope,
        name: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.rows
            .entry((instance.0, scope))
            .or_default()
            .insert(name.into(), value.into());
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get_settings(
        &self,
        instance: TriggerInstanceId,
        scope: SettingsScope,
    ) -> Result<HashMap<String, String>, SettingsError> {
        self.rows
            .get(&(instance.0, scope))
            .cloned()
            .ok_or(SettingsError::InstanceNotFound { id: instance })
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
