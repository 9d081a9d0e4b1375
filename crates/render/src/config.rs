// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Renderer Configuration
//!
//! Layout and strictness settings for SQL renderers.
//!
//! ## Example
//!
//! ```rust
//! use sql_query_model_render::{RenderConfig, TableAliasStyle};
//!
//! let config = RenderConfig::default()
//!     .with_pretty(false)
//!     .with_table_alias(TableAliasStyle::As);
//! assert!(config.validate().is_ok());
//! ```
//!
//! Settings payloads use camelCase keys; missing keys keep their defaults:
//!
//! ```json
//! { "pretty": false, "tableAlias": "as", "parenthesizePredicates": true }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{RenderError, RenderResult};

/// How a table alias is attached in the FROM clause
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableAliasStyle {
    /// `orders o`, accepted by every common dialect
    #[default]
    Bare,
    /// `orders AS o`
    As,
}

/// Renderer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct RenderConfig {
    /// Put each clause on its own line
    pub pretty: bool,

    /// Prefix for continuation predicates in WHERE and HAVING when `pretty`
    /// is set. Whitespace only.
    pub indent: String,

    /// FROM-clause alias style
    pub table_alias: TableAliasStyle,

    /// Wrap each WHERE/HAVING predicate in parentheses
    pub parenthesize_predicates: bool,

    /// Fail on empty or whitespace-only formulas instead of emitting them
    pub reject_empty_formulas: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
            table_alias: TableAliasStyle::Bare,
            parenthesize_predicates: true,
            reject_empty_formulas: true,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    pub fn with_table_alias(mut self, style: TableAliasStyle) -> Self {
        self.table_alias = style;
        self
    }

    pub fn with_parenthesize_predicates(mut self, parenthesize: bool) -> Self {
        self.parenthesize_predicates = parenthesize;
        self
    }

    pub fn with_reject_empty_formulas(mut self, reject: bool) -> Self {
        self.reject_empty_formulas = reject;
        self
    }

    /// Validate the configuration
    ///
    /// Checks that the indent is whitespace and at most 16 characters long.
    pub fn validate(&self) -> RenderResult<()> {
        if !self.indent.chars().all(char::is_whitespace) {
            return Err(RenderError::InvalidConfig(format!(
                "indent must be whitespace only, got {:?}",
                self.indent
            )));
        }

        if self.indent.chars().count() > 16 {
            return Err(RenderError::InvalidConfig(
                "indent cannot exceed 16 characters".to_string(),
            ));
        }

        Ok(())
    }

    /// Parse a configuration from a JSON settings payload
    pub fn from_json(settings: &Value) -> RenderResult<Self> {
        let config: Self = Self::deserialize(settings)
            .map_err(|e| RenderError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Text placed between two clauses
    pub(crate) fn clause_separator(&self) -> String {
        if self.pretty {
            "\n".to_string()
        } else {
            " ".to_string()
        }
    }

    /// Text placed before the operator of a continuation predicate
    pub(crate) fn predicate_separator(&self) -> String {
        if self.pretty {
            format!("\n{}", self.indent)
        } else {
            " ".to_string()
        }
    }
}
