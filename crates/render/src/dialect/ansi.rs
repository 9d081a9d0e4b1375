// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! ANSI SQL renderer
//!
//! Emits the clauses in standard order:
//!
//! ```text
//! SELECT [DISTINCT] <selections>
//! [FROM <tables>]
//! [WHERE <predicates>]
//! [GROUP BY <formulas>]
//! [HAVING <predicates>]
//! [ORDER BY <formula> ASC|DESC, ...]
//! ```
//!
//! Several tables in FROM are written as a comma list, an implicit cross
//! join constrained only by the WHERE predicates.

use sql_query_model_ir::SqlQueryModel;
use tracing::{debug, instrument, warn};

use crate::Renderer;
use crate::config::RenderConfig;
use crate::dialect::DialectRenderBase;
use crate::error::{ClauseKind, RenderResult};

/// ANSI SQL renderer
#[derive(Debug, Clone, Default)]
pub struct AnsiRenderer {
    config: RenderConfig,
}

impl AnsiRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }
}

impl DialectRenderBase for AnsiRenderer {
    fn config(&self) -> &RenderConfig {
        &self.config
    }
}

impl Renderer for AnsiRenderer {
    fn name(&self) -> &str {
        "ansi"
    }

    #[instrument(level = "debug", skip_all, fields(renderer = self.name()))]
    fn render(&self, model: &SqlQueryModel) -> RenderResult<String> {
        // Builder-made configs never pass through `from_json`
        self.config.validate()?;

        debug!(
            distinct = model.distinct(),
            selections = model.selections().len(),
            tables = model.tables().len(),
            "rendering select statement"
        );

        let mut clauses = Vec::with_capacity(6);

        clauses.push(
            model
                .selections()
                .with(|items| self.select_clause(model.distinct(), items))?,
        );

        match model.tables().with(|tables| self.from_clause(tables))? {
            Some(from) => clauses.push(from),
            None => warn!("model has no tables, rendering SELECT without FROM"),
        }

        let optional = [
            model
                .where_formulas()
                .with(|preds| self.predicate_clause(ClauseKind::Where, preds))?,
            model.group_bys().with(|items| self.group_by_clause(items))?,
            model
                .havings()
                .with(|preds| self.predicate_clause(ClauseKind::Having, preds))?,
            model.order_bys().with(|orders| self.order_by_clause(orders))?,
        ];
        clauses.extend(optional.into_iter().flatten());

        Ok(clauses.join(self.config.clause_separator().as_str()))
    }
}
