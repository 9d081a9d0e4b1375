// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Sample query models for testing

use sql_query_model_ir::{CombiningOperator, SortDirection, SqlQueryModel};

/// Prebuilt query models
pub struct ModelFixtures;

impl ModelFixtures {
    /// One selection, one table, one filter, one ordering
    pub fn single_table() -> SqlQueryModel {
        let mut model = SqlQueryModel::new();
        model.add_selection("t.id", Some("id"));
        model.add_table("t1", Some("t"));
        model.add_where_formula("t.active = 1", None);
        model.add_order_by("t.id", Some("id"), SortDirection::Ascending);
        model
    }

    /// Revenue per region across two tables, grouped and filtered on the aggregate
    pub fn revenue_by_region() -> SqlQueryModel {
        let mut model = SqlQueryModel::new();
        model.set_distinct(false);
        model.add_selection("c.region", Some("region"));
        model.add_selection("SUM(o.total)", Some("revenue"));
        model.add_table("orders", Some("o"));
        model.add_table("customers", Some("c"));
        model.add_where_formula("o.customer_id = c.id", None);
        model.add_where_formula("o.status = 'closed'", CombiningOperator::And);
        model.add_group_by("c.region", None);
        model.add_having_formula("SUM(o.total) > 1000", None);
        model.add_order_by("SUM(o.total)", Some("revenue"), SortDirection::Descending);
        model
    }

    /// Filters mixing AND, OR and a free-form token
    pub fn mixed_operators() -> SqlQueryModel {
        let mut model = SqlQueryModel::new();
        model.add_selection("p.name", None);
        model.add_table("products", Some("p"));
        model.add_where_formula("p.price > 10", None);
        model.add_where_formula("p.featured = 1", CombiningOperator::Or);
        model.add_where_formula("p.discontinued = 1", CombiningOperator::from("AND NOT"));
        model
    }

    /// Wide model used to measure rendering cost
    pub fn wide(columns: usize) -> SqlQueryModel {
        let mut model = SqlQueryModel::new();
        for i in 0..columns {
            let alias = format!("c{i}");
            model.add_selection(format!("t.col_{i}"), Some(alias.as_str()));
            model.add_where_formula(format!("t.col_{i} IS NOT NULL"), None);
            model.add_group_by(format!("t.col_{i}"), None);
        }
        model.add_table("wide_table", Some("t"));
        model.add_order_by("t.col_0", None, SortDirection::Ascending);
        model
    }
}
