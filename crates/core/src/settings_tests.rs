// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn instance() -> TriggerInstanceId {
    TriggerInstanceId(1)
}

#[test]
fn insert_then_get_returns_values() {
    let mut store = MemorySettingsStore::new();
    store.insert(instance(), SettingsScope::Trigger, "exclude", "19,20");

    let settings = store.get_settings(instance(), SettingsScope::Trigger).unwrap();

    assert_eq!(settings.get("exclude").map(String::as_str), Some("19,20"));
}

#[test]
fn missing_instance_is_an_error() {
    let store = MemorySettingsStore::new();

    let err = store
        .get_settings(TriggerInstanceId(9), SettingsScope::Trigger)
        .unwrap_err();

    assert!(matches!(
        err,
        SettingsError::InstanceNotFound {
            id: TriggerInstanceId(9)
        }
    ));
}

#[test]
fn scopes_are_isolated() {
    let mut store = MemorySettingsStore::new();
    store.insert(instance(), SettingsScope::Trigger, "exclude", "19");

    assert!(store.get_settings(instance(), SettingsScope::Step).is_err());
}

#[test]
fn later_insert_overwrites() {
    let mut store = MemorySettingsStore::new();
    store.insert(instance(), SettingsScope::Trigger, "exclude", "1");
    store.insert(instance(), SettingsScope::Trigger, "exclude", "2");

    let settings = store.get_settings(instance(), SettingsScope::Trigger).unwrap();

    assert_eq!(settings.get("exclude").map(String::as_str), Some("2"));
}

#[test]
fn instance_setting_constructor() {
    let setting = InstanceSetting::new("exclude", ParamType::Sequence, true);

    assert_eq!(setting.name, "exclude");
    assert_eq!(setting.param_type, ParamType::Sequence);
    assert!(setting.required);
}

#[test]
fn error_display_names_the_instance() {
    let err = SettingsError::InstanceNotFound {
        id: TriggerInstanceId(3),
    };
    assert!(err.to_string().contains('3'));

    let err = SettingsError::MissingSetting {
        instance: TriggerInstanceId(3),
        name: "exclude".to_string(),
    };
    assert!(err.to_string().contains("exclude"));
}
