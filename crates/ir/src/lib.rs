// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # SQL Query Model - Intermediate Representation
//!
//! This crate provides a dialect-agnostic model of a single SQL SELECT
//! statement. The IR is designed to:
//! - Be filled in by a query generator with formulas already in dialect form
//! - Preserve clause order exactly as it was appended
//! - Be read by any number of dialect renderers
//!
//! The IR does not parse, validate, quote or render SQL.

pub mod clause;
pub mod kind;
pub mod query;
pub mod view;

// Re-export commonly used types
pub use clause::{
    CombiningOperator, ConditionalFormula, OperatorToken, OrderBy, Selection, TableRef,
};
pub use kind::{JoinKind, SortDirection};
pub use query::SqlQueryModel;
pub use view::ClauseView;
