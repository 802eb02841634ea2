// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end flow: TOML instance configuration to emptiness predicate

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use lifecycle_core::{
    load_instances, parse_instances, ConfigError, CourseId, MemorySettingsStore, TriggerVerdict,
};
use lifecycle_triggers::builtin_registry;

#[test]
fn configured_instance_builds_predicate() {
    let registry = builtin_registry().unwrap();
    let raw = parse_instances(
        r#"
        [trigger.cleanup-empty]
        subplugin = "emptycourse"

        [trigger.cleanup-empty.settings]
        exclude = "19,20"
        "#,
    )
    .unwrap();

    let mut store = MemorySettingsStore::new();
    let instances = load_instances(&raw, &registry, &mut store).unwrap();
    assert_eq!(instances.len(), 1);

    let instance = &instances[0];
    let trigger = registry.get(&instance.subplugin).unwrap();

    let condition = trigger.recordset_where(instance.id, &store).unwrap();
    assert_eq!(condition.sql().matches(" AND ").count(), 18);
    assert!(!condition.sql().contains("workshop"));
    assert!(!condition.sql().contains("forum"));
    assert!(condition.params().is_empty());

    // Per-course check affirms whatever the predicate matched
    assert_eq!(
        trigger.check_course(CourseId(5), instance.id),
        TriggerVerdict::Trigger
    );
}

#[test]
fn instance_referencing_unknown_rule_fails_load() {
    let registry = builtin_registry().unwrap();
    let raw = parse_instances(
        r#"
        [trigger.cleanup-empty]
        subplugin = "nosuchrule"
        "#,
    )
    .unwrap();

    let mut store = MemorySettingsStore::new();
    let err = load_instances(&raw, &registry, &mut store).unwrap_err();

    assert!(matches!(err, ConfigError::UnknownSubplugin { .. }));
}

#[test]
fn instance_without_exclude_setting_fails_load() {
    let registry = builtin_registry().unwrap();
    let raw = parse_instances(
        r#"
        [trigger.cleanup-empty]
        subplugin = "emptycourse"
        "#,
    )
    .unwrap();

    let mut store = MemorySettingsStore::new();
    let err = load_instances(&raw, &registry, &mut store).unwrap_err();

    assert!(matches!(
        err,
        ConfigError::MissingRequiredSetting {
            setting: "exclude",
            ..
        }
    ));
}
