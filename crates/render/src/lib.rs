// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # SQL Query Model - Rendering
//!
//! Turns a [`SqlQueryModel`] into literal SQL text.
//!
//! The model stores formulas that are already written in the target dialect,
//! so a renderer only arranges clauses: keywords, separators, aliases and the
//! combining operators between predicates. Empty lists leave their clause out
//! entirely; an empty SELECT list is an error.
//!
//! ## Example
//!
//! ```rust
//! use sql_query_model_ir::{SortDirection, SqlQueryModel};
//! use sql_query_model_render::{AnsiRenderer, RenderConfig, Renderer};
//!
//! let mut model = SqlQueryModel::new();
//! model.add_selection("t.id", Some("id"));
//! model.add_table("t1", Some("t"));
//! model.add_where_formula("t.active = 1", None);
//! model.add_order_by("t.id", Some("id"), SortDirection::Ascending);
//!
//! let renderer = AnsiRenderer::new(RenderConfig::default().with_pretty(false));
//! let sql = renderer.render(&model).unwrap();
//! assert_eq!(
//!     sql,
//!     "SELECT DISTINCT t.id AS id FROM t1 t WHERE (t.active = 1) ORDER BY t.id ASC"
//! );
//! ```

pub mod config;
pub mod dialect;
pub mod error;

pub use config::{RenderConfig, TableAliasStyle};
pub use dialect::{AnsiRenderer, DialectRenderBase};
pub use error::{ClauseKind, RenderError, RenderResult};

use sql_query_model_ir::SqlQueryModel;

/// Core trait for rendering a query model to SQL
///
/// Implementations read the model's lists and DISTINCT flag and never
/// modify the model. A renderer may be shared across threads and used for
/// any number of models.
pub trait Renderer {
    /// Short identifier of the dialect, used in logs
    fn name(&self) -> &str;

    /// Render the model as a single SELECT statement
    ///
    /// # Returns
    ///
    /// - `Ok(String)`: the statement text
    /// - `Err(RenderError::EmptySelectList)`: the model has no selections
    /// - `Err(RenderError::EmptyFormula { .. })`: an empty formula was found and
    ///   the configuration rejects those
    fn render(&self, model: &SqlQueryModel) -> RenderResult<String>;
}
