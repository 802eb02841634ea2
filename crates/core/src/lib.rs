// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! lifecycle-core: trigger-rule contract for the course lifecycle engine
//!
//! This crate provides:
//! - The `Trigger` trait every rule subplugin implements
//! - Recordset WHERE-fragments handed to the host's course enumeration
//! - Setting declarations and the settings-store contract
//! - The form-builder contract for instance configuration forms
//! - Explicit trigger registration and TOML instance configuration

pub mod activity;
pub mod config;
pub mod form;
pub mod predicate;
pub mod registry;
pub mod settings;
pub mod trigger;

// Re-exports
pub use activity::{activity_type, ActivityType, KNOWN_ACTIVITY_TYPES};
pub use config::{
    load_instances, parse_instances, ConfigError, RawInstanceConfig, RawTriggerInstance,
    TriggerInstance,
};
pub use form::{FormBuilder, MemoryForm, SelectElement};
pub use predicate::RecordsetWhere;
pub use registry::{RegistryError, TriggerRegistry};
pub use settings::{
    InstanceSetting, MemorySettingsStore, ParamType, SettingsError, SettingsScope, SettingsStore,
};
pub use trigger::{CourseId, Trigger, TriggerInstanceId, TriggerVerdict};
