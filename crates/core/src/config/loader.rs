// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Loads raw instance configuration into runtime trigger instances.
//!
//! Instances are assigned ascending ids in name order, so ids are
//! stable for a given document.

use super::types::RawInstanceConfig;
use crate::registry::TriggerRegistry;
use crate::settings::{MemorySettingsStore, SettingsScope};
use crate::trigger::TriggerInstanceId;
use thiserror::Error;
use tracing::debug;

/// Errors from parsing or loading instance configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// TOML syntax or shape error
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Instance does not name a subplugin
    #[error("instance '{instance}' has no subplugin")]
    MissingSubplugin { instance: String },

    /// Instance references a subplugin that is not registered
    #[error("instance '{instance}' references unknown subplugin '{subplugin}'")]
    UnknownSubplugin {
        instance: String,
        subplugin: String,
    },

    /// A setting the subplugin declares as required is absent
    #[error("instance '{instance}' is missing required setting '{setting}'")]
    MissingRequiredSetting {
        instance: String,
        setting: &'static str,
    },
}

/// A validated, loaded trigger instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerInstance {
    pub id: TriggerInstanceId,
    /// Configured instance name (the TOML table key)
    pub name: String,
    /// Subplugin name resolved through the registry
    pub subplugin: String,
}

/// Parse an instance configuration document
pub fn parse_instances(content: &str) -> Result<RawInstanceConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Validate raw configuration against the registry and seed the store.
///
/// Every instance must name a registered subplugin and carry a value
/// for each setting the subplugin declares as required. Setting values
/// themselves are not validated here; rules read them permissively.
pub fn load_instances(
    raw: &RawInstanceConfig,
    registry: &TriggerRegistry,
    store: &mut MemorySettingsStore,
) -> Result<Vec<TriggerInstance>, ConfigError> {
    let mut instances = Vec::new();

    for (idx, (name, raw_instance)) in raw.trigger.iter().enumerate() {
        let subplugin =
            raw_instance
                .subplugin
                .as_deref()
                .ok_or_else(|| ConfigError::MissingSubplugin {
                    instance: name.clone(),
                })?;

        let trigger = registry
            .get(subplugin)
            .ok_or_else(|| ConfigError::UnknownSubplugin {
                instance: name.clone(),
                subplugin: subplugin.to_string(),
            })?;

        for setting in trigger.instance_settings() {
            if setting.required && !raw_instance.settings.contains_key(setting.name) {
                return Err(ConfigError::MissingRequiredSetting {
                    instance: name.clone(),
                    setting: setting.name,
                });
            }
        }

        let id = TriggerInstanceId((idx + 1) as i64);
        for (key, value) in &raw_instance.settings {
            store.insert(id, SettingsScope::Trigger, key, value);
        }

        debug!(instance = %name, subplugin, id = %id, "loaded trigger instance");
        instances.push(TriggerInstance {
            id,
            name: name.clone(),
            subplugin: subplugin.to_string(),
        });
    }

    Ok(instances)
}
