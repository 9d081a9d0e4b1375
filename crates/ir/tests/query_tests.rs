// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Unit tests for the query model aggregate

use sql_query_model_ir::{CombiningOperator, SortDirection, SqlQueryModel};
use sql_query_model_test_utils::{ModelAssertions, ModelFixtures};

#[test]
fn test_model_defaults() {
    let model = SqlQueryModel::new();
    assert!(model.distinct());
    assert!(model.is_empty());
    assert!(model.selections().is_empty());
    assert!(model.tables().is_empty());
    assert!(model.where_formulas().is_empty());
    assert!(model.group_bys().is_empty());
    assert!(model.havings().is_empty());
    assert!(model.order_bys().is_empty());
}

#[test]
fn test_set_distinct_false() {
    let mut model = SqlQueryModel::new();
    model.set_distinct(false);
    assert!(!model.distinct());
}

#[test]
fn test_selections_keep_call_order() {
    let mut model = SqlQueryModel::new();
    let inputs = [
        ("t.id", Some("id")),
        ("t.name", None),
        ("UPPER(t.code)", Some("code")),
        ("t.id", Some("id")),
    ];
    for (formula, alias) in inputs {
        model.add_selection(formula, alias);
    }

    let selections = model.selections().to_vec();
    assert_eq!(selections.len(), inputs.len(), "duplicates must be kept");
    for (selection, (formula, alias)) in selections.iter().zip(inputs) {
        ModelAssertions::assert_selection(selection, formula, alias);
    }
}

#[test]
fn test_where_formula_default_operator() {
    let mut model = SqlQueryModel::new();
    model.add_where_formula("a = 1", None);
    let cond = model.where_formulas().first().unwrap();
    ModelAssertions::assert_condition(&cond, "a = 1", "AND");
}

#[test]
fn test_having_formula_default_operator() {
    let mut model = SqlQueryModel::new();
    model.add_having_formula("COUNT(*) > 1", None);
    let cond = model.havings().first().unwrap();
    ModelAssertions::assert_condition(&cond, "COUNT(*) > 1", "AND");
}

#[test]
fn test_where_formula_operator_verbatim() {
    let mut model = SqlQueryModel::new();
    model.add_where_formula("a = 1", CombiningOperator::from("OR"));
    model.add_where_formula("b = 2", CombiningOperator::from("or"));
    model.add_where_formula("c = 3", Some(CombiningOperator::from("OR NOT")));

    let conds = model.where_formulas().to_vec();
    ModelAssertions::assert_condition(&conds[0], "a = 1", "OR");
    ModelAssertions::assert_condition(&conds[1], "b = 2", "or");
    ModelAssertions::assert_condition(&conds[2], "c = 3", "OR NOT");
}

#[test]
fn test_empty_formulas_accepted() {
    let mut model = SqlQueryModel::new();
    model.add_selection("", None);
    model.add_table("", Some(""));
    model.add_where_formula("", None);
    model.add_group_by("   ", None);
    model.add_having_formula("", CombiningOperator::Or);
    model.add_order_by("", None, SortDirection::Descending);

    assert_eq!(model.selections().first().unwrap().formula(), "");
    assert_eq!(model.group_bys().first().unwrap().formula(), "   ");
    assert_eq!(model.tables().first().unwrap().alias(), Some(""));
    assert!(!model.is_empty());
}

#[test]
fn test_basic_scenario() {
    let model = ModelFixtures::single_table();

    assert!(model.distinct());

    let selections = model.selections();
    assert_eq!(selections.len(), 1);
    ModelAssertions::assert_selection(&selections.get(0).unwrap(), "t.id", Some("id"));

    let tables = model.tables();
    assert_eq!(tables.len(), 1);
    ModelAssertions::assert_table(&tables.get(0).unwrap(), "t1", Some("t"));

    let wheres = model.where_formulas();
    assert_eq!(wheres.len(), 1);
    ModelAssertions::assert_condition(&wheres.get(0).unwrap(), "t.active = 1", "AND");

    let orders = model.order_bys();
    assert_eq!(orders.len(), 1);
    ModelAssertions::assert_order_by(
        &orders.get(0).unwrap(),
        "t.id",
        Some("id"),
        SortDirection::Ascending,
    );

    assert!(model.group_bys().is_empty());
    assert!(model.havings().is_empty());
}

#[test]
fn test_group_bys_independent_of_selections() {
    let mut model = SqlQueryModel::new();
    model.add_selection("c.region", Some("region"));
    model.add_group_by("c.region", None);
    model.add_selection("c.country", None);
    model.add_group_by("c.country", None);
    model.add_selection("COUNT(*)", Some("n"));

    ModelAssertions::assert_formulas(&model.group_bys(), &["c.region", "c.country"]);
    ModelAssertions::assert_formulas(&model.selections(), &["c.region", "c.country", "COUNT(*)"]);
}

#[test]
fn test_order_by_selection_is_private() {
    let mut model = SqlQueryModel::new();
    model.add_selection("t.id", Some("id"));
    model.add_order_by("t.id", Some("id"), SortDirection::Descending);

    assert_eq!(model.selections().len(), 1);
    let order = model.order_bys().first().unwrap();
    assert_eq!(order.selection(), &model.selections().first().unwrap());
    assert_eq!(order.direction(), SortDirection::Descending);
}

#[test]
fn test_multiple_tables_stay_flat() {
    let model = ModelFixtures::revenue_by_region();
    let tables = model.tables().to_vec();
    ModelAssertions::assert_table(&tables[0], "orders", Some("o"));
    ModelAssertions::assert_table(&tables[1], "customers", Some("c"));
}

#[test]
fn test_model_serializes_in_insertion_order() {
    let model = ModelFixtures::revenue_by_region();
    let json = serde_json::to_value(&model).unwrap();

    assert_eq!(json["distinct"], false);
    assert_eq!(json["selections"][0]["formula"], "c.region");
    assert_eq!(json["selections"][1]["alias"], "revenue");
    assert_eq!(json["tables"][1]["table_name"], "customers");
    assert_eq!(json["where_formulas"][1]["operator"], "AND");
    assert_eq!(json["havings"][0]["formula"], "SUM(o.total) > 1000");
    assert_eq!(json["order_bys"][0]["direction"], "Descending");
    assert_eq!(json["order_bys"][0]["selection"]["formula"], "SUM(o.total)");
}
