// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Raw instance-configuration types that mirror TOML structure exactly.
//!
//! These types are used for parsing only. The loader validates them
//! against the trigger registry before anything runs.

use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

/// Top-level instance configuration document.
///
/// ```toml
/// [trigger.cleanup-empty]
/// subplugin = "emptycourse"
///
/// [trigger.cleanup-empty.settings]
/// exclude = "19,20"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawInstanceConfig {
    /// Trigger instances keyed by their configured name
    pub trigger: BTreeMap<String, RawTriggerInstance>,
}

/// One configured trigger instance
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawTriggerInstance {
    /// Name of the registered subplugin this instance uses
    pub subplugin: Option<String>,
    /// Setting values keyed by declared setting name
    pub settings: HashMap<String, String>,
}
