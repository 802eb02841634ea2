// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Trigger rule for courses without any activity content
//!
//! A course counts as empty when it has no instance of any activity
//! module the instance configuration has not excluded. The filtering
//! happens entirely in the recordset predicate, so the per-course
//! check is a constant affirmative.

use lifecycle_core::{
    CourseId, FormBuilder, InstanceSetting, ParamType, RecordsetWhere, SettingsError,
    SettingsScope, SettingsStore, Trigger, TriggerInstanceId, TriggerVerdict,
    KNOWN_ACTIVITY_TYPES,
};
use std::collections::HashMap;
use tracing::debug;

/// Localization component for this subplugin's strings
const COMPONENT: &str = "lifecycletrigger_emptycourse";

/// Setting holding the comma-joined keys of excluded activity types
const EXCLUDE: &str = "exclude";

/// Pre-selection on a fresh form: forum and workshop
const DEFAULT_EXCLUDE: [&str; 2] = ["20", "19"];

/// Rule that advances courses containing no non-excluded activities
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyCourse;

impl EmptyCourse {
    pub fn new() -> Self {
        Self
    }
}

impl Trigger for EmptyCourse {
    fn subplugin_name(&self) -> &'static str {
        "emptycourse"
    }

    fn check_course(&self, _course: CourseId, _trigger_id: TriggerInstanceId) -> TriggerVerdict {
        // Emptiness was already decided by the recordset predicate
        TriggerVerdict::Trigger
    }

    /// One `NOT IN` clause per non-excluded activity module.
    ///
    /// Module names come from the closed known set, never from the
    /// configured value: `exclude` only removes clauses, it cannot
    /// contribute literal text to the emitted SQL. Unknown keys in
    /// `exclude` remove nothing. The bind-parameter list stays empty.
    fn recordset_where(
        &self,
        trigger_id: TriggerInstanceId,
        settings: &dyn SettingsStore,
    ) -> Result<RecordsetWhere, SettingsError> {
        let stored = settings.get_settings(trigger_id, SettingsScope::Trigger)?;
        let exclude = stored
            .get(EXCLUDE)
            .ok_or_else(|| SettingsError::MissingSetting {
                instance: trigger_id,
                name: EXCLUDE.to_string(),
            })?;

        let mut remaining = KNOWN_ACTIVITY_TYPES.to_vec();
        if !exclude.is_empty() {
            for key in exclude.split(',') {
                remaining.retain(|t| t.key != key);
            }
        }

        let mut condition = RecordsetWhere::always();
        for activity in &remaining {
            condition = condition.and(format!(
                "{{course}}.id NOT IN (SELECT course FROM {{{}}})",
                activity.name
            ));
        }

        debug!(trigger = %trigger_id, clauses = remaining.len(), "built emptiness predicate");
        Ok(condition)
    }

    fn instance_settings(&self) -> Vec<InstanceSetting> {
        vec![InstanceSetting::new(EXCLUDE, ParamType::Sequence, true)]
    }

    fn extend_form_definition(&self, form: &mut dyn FormBuilder) {
        let options: Vec<(&str, &str)> = KNOWN_ACTIVITY_TYPES
            .iter()
            .map(|t| (t.key, t.name))
            .collect();
        // Label is a localization key under COMPONENT; the host
        // resolves it, same as the help button key below
        form.add_select(EXCLUDE, EXCLUDE, &options);
        form.set_multiple(EXCLUDE, true);
        form.add_help_button(EXCLUDE, EXCLUDE, COMPONENT);
    }

    fn form_definition_after_data(
        &self,
        form: &mut dyn FormBuilder,
        _stored: &HashMap<String, String>,
    ) {
        // Fixed default, independent of stored settings
        form.set_default(EXCLUDE, &DEFAULT_EXCLUDE);
    }
}

#[cfg(test)]
#[path = "emptycourse_tests.rs"]
mod tests;
