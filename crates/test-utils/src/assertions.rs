// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Query model test helpers and custom assertions

use sql_query_model_ir::{ClauseView, ConditionalFormula, OrderBy, Selection, SortDirection, TableRef};

/// Custom assertion helpers for model testing
pub struct ModelAssertions;

impl ModelAssertions {
    /// Assert that a selection carries the given formula and alias
    pub fn assert_selection(selection: &Selection, formula: &str, alias: Option<&str>) {
        assert_eq!(
            selection.formula(),
            formula,
            "Expected formula '{}', found '{}'",
            formula,
            selection.formula()
        );
        assert_eq!(selection.alias(), alias, "Selection alias mismatch");
    }

    /// Assert that a table reference has the given name and alias
    pub fn assert_table(table: &TableRef, name: &str, alias: Option<&str>) {
        assert_eq!(table.table_name(), name, "Table name mismatch");
        assert_eq!(table.alias(), alias, "Table alias mismatch");
    }

    /// Assert that a predicate has the given formula and operator token
    pub fn assert_condition(cond: &ConditionalFormula, formula: &str, operator: &str) {
        assert_eq!(cond.formula(), formula, "Predicate formula mismatch");
        assert_eq!(
            cond.operator().as_str(),
            operator,
            "Expected operator '{}' for '{}', found '{}'",
            operator,
            formula,
            cond.operator()
        );
    }

    /// Assert that an ORDER BY entry wraps the given selection and direction
    pub fn assert_order_by(
        order: &OrderBy,
        formula: &str,
        alias: Option<&str>,
        direction: SortDirection,
    ) {
        Self::assert_selection(order.selection(), formula, alias);
        assert_eq!(order.direction(), direction, "Sort direction mismatch");
    }

    /// Assert the formulas of a selection list, in order
    pub fn assert_formulas(view: &ClauseView<Selection>, expected: &[&str]) {
        let actual: Vec<String> = view.iter().map(|s| s.formula().to_string()).collect();
        assert_eq!(actual, expected, "Selection order mismatch");
    }
}

/// Clause keywords that appear in rendered SQL, in the order they appear
pub fn clause_keywords(sql: &str) -> Vec<&'static str> {
    const KEYWORDS: [&str; 6] = ["SELECT", "FROM", "WHERE", "GROUP BY", "HAVING", "ORDER BY"];

    let mut found: Vec<(usize, &'static str)> = KEYWORDS
        .iter()
        .filter_map(|kw| sql.find(kw).map(|pos| (pos, *kw)))
        .collect();
    found.sort_by_key(|(pos, _)| *pos);
    found.into_iter().map(|(_, kw)| kw).collect()
}

/// Collapse all whitespace runs to a single space
pub fn normalize_whitespace(sql: &str) -> String {
    sql.split_whitespace().collect::<Vec<_>>().join(" ")
}
