// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Form-builder contract for instance configuration forms
//!
//! The host owns form rendering and validation; rules only describe
//! the elements they need. `MemoryForm` records what a rule registered
//! so hosts can render it and tests can assert on it.

use std::collections::BTreeMap;

/// The form operations subplugins call when extending the instance form
pub trait FormBuilder {
    /// Register a select element with (value, label) options
    fn add_select(&mut self, name: &str, label: &str, options: &[(&str, &str)]);

    /// Allow zero or more selections on a registered select
    fn set_multiple(&mut self, name: &str, multiple: bool);

    /// Attach a help annotation resolved from a localization component
    fn add_help_button(&mut self, name: &str, key: &str, component: &str);

    /// Pre-select values when the form is freshly initialized
    fn set_default(&mut self, name: &str, values: &[&str]);
}

/// A recorded select element after form extension
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectElement {
    pub label: String,
    pub options: Vec<(String, String)>,
    pub multiple: bool,
    /// (help key, localization component)
    pub help: Option<(String, String)>,
    pub defaults: Vec<String>,
}

/// Recording form builder
#[derive(Debug, Clone, Default)]
pub struct MemoryForm {
    elements: BTreeMap<String, SelectElement>,
}

impl MemoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded element with the given name, if registered
    pub fn element(&self, name: &str) -> Option<&SelectElement> {
        self.elements.get(name)
    }

    /// Names of all registered elements, in sorted order
    pub fn element_names(&self) -> Vec<&str> {
        self.elements.keys().map(String::as_str).collect()
    }
}

impl FormBuilder for MemoryForm {
    fn add_select(&mut self, name: &str, label: &str, options: &[(&str, &str)]) {
        let element = self.elements.entry(name.to_string()).or_default();
        element.label = label.to_string();
        element.options = options
            .iter()
            .map(|(value, label)| (value.to_string(), label.to_string()))
            .collect();
    }

    fn set_multiple(&mut self, name: &str, multiple: bool) {
        self.elements.entry(name.to_string()).or_default().multiple = multiple;
    }

    fn add_help_button(&mut self, name: &str, key: &str, component: &str) {
        self.elements.entry(name.to_string()).or_default().help =
            Some((key.to_string(), component.to_string()));
    }

    fn set_default(&mut self, name: &str, values: &[&str]) {
        self.elements.entry(name.to_string()).or_default().defaults =
            values.iter().map(|v| v.to_string()).collect();
    }
}

#[cfg(test)]
#[path = "form_tests.rs"]
mod tests;
