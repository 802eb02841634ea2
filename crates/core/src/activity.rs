// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The closed set of course activity modules
//!
//! Trigger settings reference activity modules by numeric key, so the
//! keys here are stable identifiers: persisted configuration breaks if
//! they are renumbered.

use std::fmt;

/// One kind of course content module (quiz, forum, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivityType {
    /// Numeric key as stored in trigger settings ("1".."20")
    pub key: &'static str,
    /// Module name; doubles as the instance table name and the form label
    pub name: &'static str,
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Every activity module the emptiness check knows about
pub const KNOWN_ACTIVITY_TYPES: [ActivityType; 20] = [
    ActivityType { key: "1", name: "book" },
    ActivityType { key: "2", name: "resource" },
    ActivityType { key: "3", name: "folder" },
    ActivityType { key: "4", name: "label" },
    ActivityType { key: "5", name: "imscp" },
    ActivityType { key: "6", name: "url" },
    ActivityType { key: "7", name: "page" },
    ActivityType { key: "8", name: "assignment" },
    ActivityType { key: "9", name: "chat" },
    ActivityType { key: "10", name: "choice" },
    ActivityType { key: "11", name: "data" },
    ActivityType { key: "12", name: "feedback" },
    ActivityType { key: "13", name: "glossary" },
    ActivityType { key: "14", name: "lesson" },
    ActivityType { key: "15", name: "quiz" },
    ActivityType { key: "16", name: "scorm" },
    ActivityType { key: "17", name: "survey" },
    ActivityType { key: "18", name: "wiki" },
    ActivityType { key: "19", name: "workshop" },
    ActivityType { key: "20", name: "forum" },
];

/// Look up an activity type by its numeric key
pub fn activity_type(key: &str) -> Option<ActivityType> {
    KNOWN_ACTIVITY_TYPES.iter().find(|t| t.key == key).copied()
}

#[cfg(test)]
#[path = "activity_tests.rs"]
mod tests;
