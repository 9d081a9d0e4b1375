// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Clause Entries
//!
//! Leaf records stored in the lists of a [`SqlQueryModel`](crate::SqlQueryModel).
//!
//! Every record is immutable once built and exposes read accessors only. The
//! formula strings they carry are opaque: they arrive already written in the
//! target dialect and are never inspected, trimmed or rewritten here.
//!
//! | Record | Used by |
//! |---|---|
//! | [`Selection`] | SELECT list, GROUP BY list, inside [`OrderBy`] |
//! | [`TableRef`] | FROM list |
//! | [`ConditionalFormula`] | WHERE list, HAVING list |
//! | [`OrderBy`] | ORDER BY list |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::kind::SortDirection;

/// A formula with an optional display name
///
/// Represents one SELECT-list item or one GROUP BY item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    formula: String,
    alias: Option<String>,
}

impl Selection {
    pub fn new(formula: impl Into<String>, alias: Option<&str>) -> Self {
        Self {
            formula: formula.into(),
            alias: alias.map(str::to_string),
        }
    }

    /// The column or formula, in dialect-specific form
    pub fn formula(&self) -> &str {
        &self.formula
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }
}

/// One source in the FROM clause
///
/// Multiple table references form an implicit cross join; there is no
/// ON condition here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableRef {
    table_name: String,
    alias: Option<String>,
}

impl TableRef {
    pub fn new(table_name: impl Into<String>, alias: Option<&str>) -> Self {
        Self {
            table_name: table_name.into(),
            alias: alias.map(str::to_string),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }
}

/// Token that joins a predicate to the ones before it
///
/// `AND` and `OR` get their own variants; any other token is kept verbatim in
/// [`CombiningOperator::Other`]. Conversion from a string never normalizes case
/// or whitespace, so `"or"` stays `"or"`.
///
/// Free-form tokens can only be built through `From`, so `Other` never holds
/// `"AND"` or `"OR"` and two operators are equal exactly when their tokens are:
///
/// ```rust
/// use sql_query_model_ir::CombiningOperator;
///
/// assert_eq!(CombiningOperator::from("AND"), CombiningOperator::And);
/// assert_ne!(CombiningOperator::from("and"), CombiningOperator::And);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CombiningOperator {
    #[default]
    And,
    Or,
    /// Free-form token such as `OR NOT`
    Other(OperatorToken),
}

/// Operator text that is neither `AND` nor `OR`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OperatorToken(String);

impl OperatorToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OperatorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl CombiningOperator {
    pub fn as_str(&self) -> &str {
        match self {
            CombiningOperator::And => "AND",
            CombiningOperator::Or => "OR",
            CombiningOperator::Other(token) => token.as_str(),
        }
    }
}

impl From<&str> for CombiningOperator {
    fn from(token: &str) -> Self {
        match token {
            "AND" => CombiningOperator::And,
            "OR" => CombiningOperator::Or,
            other => CombiningOperator::Other(OperatorToken(other.to_string())),
        }
    }
}

impl From<String> for CombiningOperator {
    fn from(token: String) -> Self {
        match token.as_str() {
            "AND" => CombiningOperator::And,
            "OR" => CombiningOperator::Or,
            _ => CombiningOperator::Other(OperatorToken(token)),
        }
    }
}

impl From<CombiningOperator> for String {
    fn from(op: CombiningOperator) -> Self {
        match op {
            CombiningOperator::Other(token) => token.0,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for CombiningOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pre-rendered boolean predicate for WHERE or HAVING
///
/// The combining operator is fixed at construction. A missing operator becomes
/// [`CombiningOperator::And`]; this constructor is the only place that default
/// is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConditionalFormula {
    formula: String,
    operator: CombiningOperator,
}

impl ConditionalFormula {
    pub fn new(formula: impl Into<String>, operator: impl Into<Option<CombiningOperator>>) -> Self {
        Self {
            formula: formula.into(),
            operator: operator.into().unwrap_or_default(),
        }
    }

    pub fn formula(&self) -> &str {
        &self.formula
    }

    pub fn operator(&self) -> &CombiningOperator {
        &self.operator
    }
}

/// ORDER BY entry
///
/// The wrapped [`Selection`] belongs to this entry alone; it is never shared
/// with the SELECT list, even when the text is identical.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderBy {
    selection: Selection,
    direction: SortDirection,
}

impl OrderBy {
    pub fn new(selection: Selection, direction: SortDirection) -> Self {
        Self {
            selection,
            direction,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }
}
