// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The trigger-rule plugin contract the lifecycle engine drives
//!
//! A trigger decides whether a course advances to the next lifecycle
//! step. The engine first enumerates candidate courses through the
//! rule's recordset predicate, then asks the rule to check each match.

use crate::form::FormBuilder;
use crate::predicate::RecordsetWhere;
use crate::settings::{InstanceSetting, SettingsError, SettingsStore};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Identifier of a course in the host store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourseId(pub i64);

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a configured trigger instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TriggerInstanceId(pub i64);

impl fmt::Display for TriggerInstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Decision a trigger hands back to the workflow engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerVerdict {
    /// Course is not affected; move on to the next trigger
    Next,
    /// Course enters the workflow's first step
    Trigger,
    /// Course is excluded from this workflow run
    Exclude,
}

impl fmt::Display for TriggerVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriggerVerdict::Next => write!(f, "next"),
            TriggerVerdict::Trigger => write!(f, "trigger"),
            TriggerVerdict::Exclude => write!(f, "exclude"),
        }
    }
}

/// A trigger rule subplugin.
///
/// The engine invokes every registered rule through this trait:
/// per-course check, recordset predicate, settings declaration, and
/// form extension. Rules are stateless; each operation is a pure
/// function of its inputs.
pub trait Trigger {
    /// Technical name of the subplugin.
    ///
    /// Keys registry entries and settings rows, and names the
    /// localization component `lifecycletrigger_<name>`.
    fn subplugin_name(&self) -> &'static str;

    /// Decide whether a course already matched by the recordset
    /// predicate should be processed
    fn check_course(&self, course: CourseId, trigger_id: TriggerInstanceId) -> TriggerVerdict;

    /// Build the WHERE-fragment the engine applies when enumerating
    /// candidate courses for this instance.
    ///
    /// Settings-retrieval failures propagate unchanged to the engine.
    fn recordset_where(
        &self,
        trigger_id: TriggerInstanceId,
        settings: &dyn SettingsStore,
    ) -> Result<RecordsetWhere, SettingsError>;

    /// Settings each instance of this rule offers for the user to define
    fn instance_settings(&self) -> Vec<InstanceSetting> {
        Vec::new()
    }

    /// Add this rule's elements to the instance configuration form
    fn extend_form_definition(&self, _form: &mut dyn FormBuilder) {}

    /// Adjust form state once stored settings have been applied
    fn form_definition_after_data(
        &self,
        _form: &mut dyn FormBuilder,
        _stored: &HashMap<String, String>,
    ) {
    }
}

#[cfg(test)]
#[path = "trigger_tests.rs"]
mod tests;
