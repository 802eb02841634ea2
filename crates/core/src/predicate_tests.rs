// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serde_json::json;

#[test]
fn always_is_trivially_true() {
    let condition = RecordsetWhere::always();

    assert_eq!(condition.sql(), "1=1");
    assert!(condition.params().is_empty());
}

#[test]
fn and_appends_conjunctive_clause() {
    let condition = RecordsetWhere::always()
        .and("{course}.id NOT IN (SELECT course FROM {quiz})")
        .and("{course}.id NOT IN (SELECT course FROM {forum})");

    assert_eq!(
        condition.sql(),
        "1=1 AND {course}.id NOT IN (SELECT course FROM {quiz}) \
         AND {course}.id NOT IN (SELECT course FROM {forum})"
    );
    assert!(condition.params().is_empty());
}

#[test]
fn and_bound_collects_params_in_clause_order() {
    let condition = RecordsetWhere::always()
        .and_bound("{course}.timecreated < ?", [json!(1700000000)])
        .and_bound("{course}.category = ?", [json!(3)]);

    assert_eq!(
        condition.sql(),
        "1=1 AND {course}.timecreated < ? AND {course}.category = ?"
    );
    assert_eq!(condition.params(), &[json!(1700000000), json!(3)]);
}

#[test]
fn display_matches_sql() {
    let condition = RecordsetWhere::always().and("{course}.visible = 1");
    assert_eq!(condition.to_string(), condition.sql());
}

// Property-based tests
use proptest::prelude::*;

proptest! {
    #[test]
    fn conjunct_count_matches_appended_clauses(count in 0..40usize) {
        let mut condition = RecordsetWhere::always();
        for n in 0..count {
            condition = condition.and(format!("{{course}}.category <> {}", n));
        }

        prop_assert_eq!(condition.sql().matches(" AND ").count(), count);
        prop_assert!(condition.sql().starts_with("1=1"));
        prop_assert!(condition.params().is_empty());
    }
}
