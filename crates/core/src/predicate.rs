// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! WHERE-fragments for the host's course enumeration
//!
//! A trigger rule narrows the set of candidate courses by handing the
//! engine a SQL fragment plus bind parameters. Fragments use the
//! host's `{table}` placeholder syntax; the engine resolves prefixes
//! before execution.
//!
//! Rules whose clauses depend on user-entered values bind them through
//! [`RecordsetWhere::and_bound`]; the built-in emptiness rule draws
//! its clause text from a closed internal set and never binds, so its
//! parameter list stays empty.

use serde_json::Value;
use std::fmt;

/// A WHERE-fragment plus bind parameters for the host recordset query
#[derive(Debug, Clone, PartialEq)]
pub struct RecordsetWhere {
    sql: String,
    params: Vec<Value>,
}

impl RecordsetWhere {
    /// The trivially-true seed, so an empty clause set is still valid SQL
    pub fn always() -> Self {
        Self {
            sql: "1=1".to_string(),
            params: Vec::new(),
        }
    }

    /// Append a conjunctive clause with no bind parameters
    pub fn and(mut self, clause: impl AsRef<str>) -> Self {
        self.sql.push_str(" AND ");
        self.sql.push_str(clause.as_ref());
        self
    }

    /// Append a conjunctive clause together with its bind parameters
    pub fn and_bound(
        mut self,
        clause: impl AsRef<str>,
        params: impl IntoIterator<Item = Value>,
    ) -> Self {
        self = self.and(clause);
        self.params.extend(params);
        self
    }

    /// The SQL fragment, ready to splice into a WHERE clause
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Bind parameters in clause order
    pub fn params(&self) -> &[Value] {
        &self.params
    }
}

impl fmt::Display for RecordsetWhere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sql)
    }
}

#[cfg(test)]
#[path = "predicate_tests.rs"]
mod tests;
