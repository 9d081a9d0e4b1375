// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Error types for the rendering layer
//!
//! The query model itself never fails; every error here is raised while a
//! renderer turns a model into SQL text or while its configuration is loaded.

use std::fmt;

use serde::Serialize;

/// Result type alias for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;

/// Clause of a SELECT statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ClauseKind {
    Select,
    From,
    Where,
    GroupBy,
    Having,
    OrderBy,
}

impl ClauseKind {
    pub fn keyword(self) -> &'static str {
        match self {
            ClauseKind::Select => "SELECT",
            ClauseKind::From => "FROM",
            ClauseKind::Where => "WHERE",
            ClauseKind::GroupBy => "GROUP BY",
            ClauseKind::Having => "HAVING",
            ClauseKind::OrderBy => "ORDER BY",
        }
    }
}

impl fmt::Display for ClauseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Errors that can occur while rendering a query model
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq, Serialize)]
pub enum RenderError {
    /// Nothing to put after SELECT
    #[error("Cannot render SELECT statement: the SELECT list is empty")]
    EmptySelectList,

    /// A formula or table name is empty or whitespace only
    #[error("Empty formula in {clause} clause at position {position}")]
    EmptyFormula { clause: ClauseKind, position: usize },

    /// Renderer configuration could not be loaded
    #[error("Invalid render configuration: {0}")]
    InvalidConfig(String),
}

impl RenderError {
    /// The clause the error points at, if any
    pub fn clause(&self) -> Option<ClauseKind> {
        match self {
            RenderError::EmptySelectList => Some(ClauseKind::Select),
            RenderError::EmptyFormula { clause, .. } => Some(*clause),
            RenderError::InvalidConfig(_) => None,
        }
    }

    /// Variant name, as used by file-driven render cases
    pub fn variant_name(&self) -> &'static str {
        match self {
            RenderError::EmptySelectList => "EmptySelectList",
            RenderError::EmptyFormula { .. } => "EmptyFormula",
            RenderError::InvalidConfig(_) => "InvalidConfig",
        }
    }
}
