// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Base trait providing shared clause rendering for all dialects

use sql_query_model_ir::{CombiningOperator, ConditionalFormula, OrderBy, Selection, TableRef};
use tracing::trace;

use crate::config::{RenderConfig, TableAliasStyle};
use crate::error::{ClauseKind, RenderError, RenderResult};

/// Base trait providing shared clause rendering
///
/// Every helper takes the entries of one clause list and returns the
/// finished clause text, keyword included. Helpers for optional clauses
/// return `None` when the list is empty so the clause is left out.
pub trait DialectRenderBase {
    fn config(&self) -> &RenderConfig;

    /// Reject an empty formula when the configuration asks for it
    fn check_formula(&self, clause: ClauseKind, position: usize, formula: &str) -> RenderResult<()> {
        if self.config().reject_empty_formulas && formula.trim().is_empty() {
            return Err(RenderError::EmptyFormula { clause, position });
        }
        Ok(())
    }

    /// `formula` or `formula AS alias`; an empty alias counts as none
    fn aliased(&self, formula: &str, alias: Option<&str>) -> String {
        match alias {
            Some(alias) if !alias.is_empty() => format!("{} AS {}", formula, alias),
            _ => formula.to_string(),
        }
    }

    fn select_clause(&self, distinct: bool, items: &[Selection]) -> RenderResult<String> {
        if items.is_empty() {
            return Err(RenderError::EmptySelectList);
        }

        let mut columns = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            self.check_formula(ClauseKind::Select, index, item.formula())?;
            columns.push(self.aliased(item.formula(), item.alias()));
        }

        let keyword = if distinct { "SELECT DISTINCT" } else { "SELECT" };
        Ok(format!("{} {}", keyword, columns.join(", ")))
    }

    fn from_clause(&self, tables: &[TableRef]) -> RenderResult<Option<String>> {
        if tables.is_empty() {
            return Ok(None);
        }

        let mut sources = Vec::with_capacity(tables.len());
        for (index, table) in tables.iter().enumerate() {
            self.check_formula(ClauseKind::From, index, table.table_name())?;
            let source = match (table.alias(), self.config().table_alias) {
                (Some(alias), TableAliasStyle::Bare) if !alias.is_empty() => {
                    format!("{} {}", table.table_name(), alias)
                }
                (Some(alias), TableAliasStyle::As) if !alias.is_empty() => {
                    format!("{} AS {}", table.table_name(), alias)
                }
                _ => table.table_name().to_string(),
            };
            sources.push(source);
        }

        Ok(Some(format!("FROM {}", sources.join(", "))))
    }

    /// WHERE or HAVING
    ///
    /// Each predicate after the first is prefixed with its own combining
    /// operator. The first predicate's operator has nothing to combine with
    /// and is dropped.
    fn predicate_clause(
        &self,
        clause: ClauseKind,
        predicates: &[ConditionalFormula],
    ) -> RenderResult<Option<String>> {
        if predicates.is_empty() {
            return Ok(None);
        }

        let config = self.config();
        let separator = config.predicate_separator();
        let mut out = String::from(clause.keyword());

        for (index, predicate) in predicates.iter().enumerate() {
            self.check_formula(clause, index, predicate.formula())?;
            let body = if config.parenthesize_predicates {
                format!("({})", predicate.formula())
            } else {
                predicate.formula().to_string()
            };

            if index == 0 {
                if predicate.operator() != &CombiningOperator::And {
                    trace!(
                        clause = %clause,
                        operator = %predicate.operator(),
                        "leading predicate operator ignored"
                    );
                }
                out.push(' ');
            } else {
                out.push_str(&separator);
                out.push_str(predicate.operator().as_str());
                out.push(' ');
            }
            out.push_str(&body);
        }

        Ok(Some(out))
    }

    fn group_by_clause(&self, items: &[Selection]) -> RenderResult<Option<String>> {
        if items.is_empty() {
            return Ok(None);
        }

        let mut formulas = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            self.check_formula(ClauseKind::GroupBy, index, item.formula())?;
            formulas.push(item.formula());
        }

        Ok(Some(format!("GROUP BY {}", formulas.join(", "))))
    }

    fn order_by_clause(&self, orders: &[OrderBy]) -> RenderResult<Option<String>> {
        if orders.is_empty() {
            return Ok(None);
        }

        let mut terms = Vec::with_capacity(orders.len());
        for (index, order) in orders.iter().enumerate() {
            let formula = order.selection().formula();
            self.check_formula(ClauseKind::OrderBy, index, formula)?;
            terms.push(format!("{} {}", formula, order.direction().keyword()));
        }

        Ok(Some(format!("ORDER BY {}", terms.join(", "))))
    }
}
