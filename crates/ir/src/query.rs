// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Query Model
//!
//! [`SqlQueryModel`] is the structural description of one SELECT statement.
//! A generator fills it in; dialect renderers read it back and produce SQL.
//!
//! ## Lists
//!
//! The model owns six insertion-ordered lists plus a DISTINCT flag:
//!
//! | Accessor | Append | Entry |
//! |---|---|---|
//! | [`selections`](SqlQueryModel::selections) | [`add_selection`](SqlQueryModel::add_selection) | [`Selection`] |
//! | [`tables`](SqlQueryModel::tables) | [`add_table`](SqlQueryModel::add_table) | [`TableRef`] |
//! | [`where_formulas`](SqlQueryModel::where_formulas) | [`add_where_formula`](SqlQueryModel::add_where_formula) | [`ConditionalFormula`] |
//! | [`group_bys`](SqlQueryModel::group_bys) | [`add_group_by`](SqlQueryModel::add_group_by) | [`Selection`] |
//! | [`havings`](SqlQueryModel::havings) | [`add_having_formula`](SqlQueryModel::add_having_formula) | [`ConditionalFormula`] |
//! | [`order_bys`](SqlQueryModel::order_bys) | [`add_order_by`](SqlQueryModel::add_order_by) | [`OrderBy`] |
//!
//! Insertion order is the clause order a renderer emits. The model never sorts,
//! deduplicates, validates or removes entries. Accessors return live
//! [`ClauseView`]s rather than copies.
//!
//! ## Example
//!
//! ```rust
//! use sql_query_model_ir::{CombiningOperator, SortDirection, SqlQueryModel};
//!
//! let mut model = SqlQueryModel::new();
//! model.add_selection("c.region", Some("region"));
//! model.add_selection("SUM(o.total)", Some("revenue"));
//! model.add_table("orders", Some("o"));
//! model.add_table("customers", Some("c"));
//! model.add_where_formula("o.customer_id = c.id", None);
//! model.add_where_formula("c.segment = 'SMB'", CombiningOperator::Or);
//! model.add_group_by("c.region", None);
//! model.add_order_by("SUM(o.total)", None, SortDirection::Descending);
//!
//! assert_eq!(model.selections().len(), 2);
//! assert_eq!(model.where_formulas().get(1).unwrap().operator().as_str(), "OR");
//! ```

use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::clause::{CombiningOperator, ConditionalFormula, OrderBy, Selection, TableRef};
use crate::kind::SortDirection;
use crate::view::{ClauseList, ClauseView};

/// Structural model of a single SQL SELECT statement
///
/// Built in one pass through the `add_*` methods, then handed to a renderer.
/// The model has no equality: two models with the same contents do not compare.
pub struct SqlQueryModel {
    distinct: bool,
    selections: ClauseList<Selection>,
    tables: ClauseList<TableRef>,
    where_formulas: ClauseList<ConditionalFormula>,
    group_bys: ClauseList<Selection>,
    havings: ClauseList<ConditionalFormula>,
    order_bys: ClauseList<OrderBy>,
}

impl SqlQueryModel {
    /// Empty model with DISTINCT enabled
    pub fn new() -> Self {
        Self {
            distinct: true,
            selections: ClauseList::new(),
            tables: ClauseList::new(),
            where_formulas: ClauseList::new(),
            group_bys: ClauseList::new(),
            havings: ClauseList::new(),
            order_bys: ClauseList::new(),
        }
    }

    /// Whether DISTINCT should follow SELECT
    pub fn distinct(&self) -> bool {
        self.distinct
    }

    pub fn set_distinct(&mut self, distinct: bool) {
        self.distinct = distinct;
    }

    pub fn selections(&self) -> ClauseView<Selection> {
        self.selections.view()
    }

    /// Add a column or formula to the SELECT list
    ///
    /// The formula must already be in dialect-specific form.
    pub fn add_selection(&mut self, formula: impl Into<String>, alias: Option<&str>) {
        self.selections.push(Selection::new(formula, alias));
    }

    pub fn tables(&self) -> ClauseView<TableRef> {
        self.tables.view()
    }

    /// Add a table to the FROM list
    pub fn add_table(&mut self, table_name: impl Into<String>, alias: Option<&str>) {
        self.tables.push(TableRef::new(table_name, alias));
    }

    pub fn where_formulas(&self) -> ClauseView<ConditionalFormula> {
        self.where_formulas.view()
    }

    /// Add a WHERE predicate
    ///
    /// `operator` joins this predicate to the previous one. `None` stores
    /// [`CombiningOperator::And`].
    pub fn add_where_formula(
        &mut self,
        formula: impl Into<String>,
        operator: impl Into<Option<CombiningOperator>>,
    ) {
        self.where_formulas
            .push(ConditionalFormula::new(formula, operator));
    }

    pub fn group_bys(&self) -> ClauseView<Selection> {
        self.group_bys.view()
    }

    pub fn add_group_by(&mut self, formula: impl Into<String>, alias: Option<&str>) {
        self.group_bys.push(Selection::new(formula, alias));
    }

    pub fn havings(&self) -> ClauseView<ConditionalFormula> {
        self.havings.view()
    }

    /// Add a HAVING predicate, defaulting the operator like
    /// [`add_where_formula`](Self::add_where_formula)
    pub fn add_having_formula(
        &mut self,
        formula: impl Into<String>,
        operator: impl Into<Option<CombiningOperator>>,
    ) {
        self.havings.push(ConditionalFormula::new(formula, operator));
    }

    pub fn order_bys(&self) -> ClauseView<OrderBy> {
        self.order_bys.view()
    }

    /// Add an ORDER BY entry
    ///
    /// The selection built here is private to the entry and is not added to
    /// the SELECT list.
    pub fn add_order_by(
        &mut self,
        formula: impl Into<String>,
        alias: Option<&str>,
        direction: SortDirection,
    ) {
        self.order_bys
            .push(OrderBy::new(Selection::new(formula, alias), direction));
    }

    /// True when no list has any entry
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
            && self.tables.is_empty()
            && self.where_formulas.is_empty()
            && self.group_bys.is_empty()
            && self.havings.is_empty()
            && self.order_bys.is_empty()
    }
}

impl Default for SqlQueryModel {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SqlQueryModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqlQueryModel")
            .field("distinct", &self.distinct)
            .field("selections", &self.selections())
            .field("tables", &self.tables())
            .field("where_formulas", &self.where_formulas())
            .field("group_bys", &self.group_bys())
            .field("havings", &self.havings())
            .field("order_bys", &self.order_bys())
            .finish()
    }
}

impl Serialize for SqlQueryModel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SqlQueryModel", 7)?;
        state.serialize_field("distinct", &self.distinct)?;
        state.serialize_field("selections", &self.selections())?;
        state.serialize_field("tables", &self.tables())?;
        state.serialize_field("where_formulas", &self.where_formulas())?;
        state.serialize_field("group_bys", &self.group_bys())?;
        state.serialize_field("havings", &self.havings())?;
        state.serialize_field("order_bys", &self.order_bys())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_creation() {
        let model = SqlQueryModel::new();
        assert!(model.distinct());
        assert!(model.is_empty());
        assert!(model.selections().is_empty());
        assert!(model.order_bys().is_empty());
    }

    #[test]
    fn test_set_distinct() {
        let mut model = SqlQueryModel::default();
        model.set_distinct(false);
        assert!(!model.distinct());
        model.set_distinct(true);
        assert!(model.distinct());
    }

    #[test]
    fn test_having_default_operator() {
        let mut model = SqlQueryModel::new();
        model.add_having_formula("COUNT(*) > 5", None);
        let having = model.havings().first().unwrap();
        assert_eq!(having.operator().as_str(), "AND");
        assert!(!model.is_empty());
    }

    #[test]
    fn test_order_by_does_not_touch_selections() {
        let mut model = SqlQueryModel::new();
        model.add_order_by("t.id", Some("id"), SortDirection::Ascending);
        assert!(model.selections().is_empty());
        assert_eq!(model.order_bys().len(), 1);
    }

    #[test]
    fn test_debug_lists_entries() {
        let mut model = SqlQueryModel::new();
        model.add_table("users", Some("u"));
        let debug = format!("{:?}", model);
        assert!(debug.contains("SqlQueryModel"));
        assert!(debug.contains("users"));
    }
}
