// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! YAML render case format
//!
//! A case file holds YAML documents separated by `---`. Each document
//! describes a model, an optional renderer configuration and either the
//! expected SQL or the expected error variant:
//!
//! ```yaml
//! description: Single table with a filter
//! model:
//!   select:
//!     - { formula: t.id, alias: id }
//!   from:
//!     - { formula: t1, alias: t }
//!   where:
//!     - t.active = 1
//! expected: |
//!   SELECT DISTINCT t.id AS id
//!   FROM t1 t
//!   WHERE (t.active = 1)
//! ---
//! description: Empty select list
//! model: {}
//! error: EmptySelectList
//! ```

use std::path::Path;

use serde::Deserialize;
use sql_query_model_ir::{CombiningOperator, SortDirection, SqlQueryModel};
use thiserror::Error;

/// A single render case
#[derive(Debug, Clone, Deserialize)]
pub struct RenderCase {
    pub description: String,
    #[serde(default)]
    pub config: Option<serde_json::Value>,
    #[serde(default)]
    pub model: ModelSpec,
    #[serde(default)]
    pub expected: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// What the case expects from the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expectation<'a> {
    Sql(&'a str),
    Error(&'a str),
}

impl RenderCase {
    /// `None` when the case sets neither `expected` nor `error`
    ///
    /// Parsed cases always have one; hand-built cases may not. When both are
    /// set, `expected` wins.
    pub fn expectation(&self) -> Option<Expectation<'_>> {
        match (&self.expected, &self.error) {
            (Some(sql), _) => Some(Expectation::Sql(sql.trim_end_matches('\n'))),
            (None, Some(variant)) => Some(Expectation::Error(variant.trim())),
            (None, None) => None,
        }
    }
}

/// Model contents, appended in document order
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ModelSpec {
    pub distinct: Option<bool>,
    pub select: Vec<ItemSpec>,
    pub from: Vec<ItemSpec>,
    #[serde(rename = "where")]
    pub where_formulas: Vec<PredicateSpec>,
    pub group_by: Vec<ItemSpec>,
    pub having: Vec<PredicateSpec>,
    pub order_by: Vec<OrderSpec>,
}

/// Formula (or table name) with an optional alias
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ItemSpec {
    Bare(String),
    Full {
        formula: String,
        #[serde(default)]
        alias: Option<String>,
    },
}

impl ItemSpec {
    fn parts(&self) -> (&str, Option<&str>) {
        match self {
            ItemSpec::Bare(formula) => (formula.as_str(), None),
            ItemSpec::Full { formula, alias } => (formula.as_str(), alias.as_deref()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PredicateSpec {
    Bare(String),
    Full {
        formula: String,
        #[serde(default)]
        op: Option<String>,
    },
}

impl PredicateSpec {
    fn parts(&self) -> (&str, Option<CombiningOperator>) {
        match self {
            PredicateSpec::Bare(formula) => (formula.as_str(), None),
            PredicateSpec::Full { formula, op } => (
                formula.as_str(),
                op.as_deref().map(CombiningOperator::from),
            ),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderSpec {
    pub formula: String,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub direction: Option<SortDirection>,
}

impl ModelSpec {
    /// Populate a fresh model through its append operations
    pub fn build(&self) -> SqlQueryModel {
        let mut model = SqlQueryModel::new();
        if let Some(distinct) = self.distinct {
            model.set_distinct(distinct);
        }
        for item in &self.select {
            let (formula, alias) = item.parts();
            model.add_selection(formula, alias);
        }
        for item in &self.from {
            let (table, alias) = item.parts();
            model.add_table(table, alias);
        }
        for pred in &self.where_formulas {
            let (formula, op) = pred.parts();
            model.add_where_formula(formula, op);
        }
        for item in &self.group_by {
            let (formula, alias) = item.parts();
            model.add_group_by(formula, alias);
        }
        for pred in &self.having {
            let (formula, op) = pred.parts();
            model.add_having_formula(formula, op);
        }
        for order in &self.order_by {
            model.add_order_by(
                order.formula.as_str(),
                order.alias.as_deref(),
                order.direction.unwrap_or(SortDirection::Ascending),
            );
        }
        model
    }
}

/// Parse errors
#[derive(Debug, Error)]
pub enum CaseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid YAML in document {index}: {source}")]
    Yaml {
        index: usize,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Case '{0}' must set exactly one of 'expected' or 'error'")]
    AmbiguousExpectation(String),

    #[error("Empty render case file")]
    EmptyFile,
}

/// Parse a render case file
pub fn parse_case_file(path: &Path) -> Result<Vec<RenderCase>, CaseError> {
    let content = std::fs::read_to_string(path)?;
    parse_case_content(&content)
}

/// Parse render cases from a string
pub fn parse_case_content(content: &str) -> Result<Vec<RenderCase>, CaseError> {
    let mut cases = Vec::new();

    for (index, document) in serde_yaml::Deserializer::from_str(content).enumerate() {
        let value = serde_yaml::Value::deserialize(document)
            .map_err(|source| CaseError::Yaml { index, source })?;
        // Blank documents come from leading or trailing separators
        if value.is_null() {
            continue;
        }

        let case: RenderCase =
            serde_yaml::from_value(value).map_err(|source| CaseError::Yaml { index, source })?;
        if case.expected.is_some() == case.error.is_some() {
            return Err(CaseError::AmbiguousExpectation(case.description));
        }
        cases.push(case);
    }

    if cases.is_empty() {
        return Err(CaseError::EmptyFile);
    }

    Ok(cases)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_case() {
        let content = r#"
description: Minimal
model:
  select: [a]
expected: SELECT DISTINCT a
"#;
        let cases = parse_case_content(content).unwrap();
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].expectation(), Some(Expectation::Sql("SELECT DISTINCT a")));

        let model = cases[0].model.build();
        assert_eq!(model.selections().len(), 1);
        assert!(model.tables().is_empty());
    }

    #[test]
    fn test_parse_multiple_documents() {
        let content = r#"
---
description: First
model:
  select: [a]
  where:
    - x = 1
    - { formula: y = 2, op: OR }
expected: irrelevant
---
description: Second
error: EmptySelectList
---
"#;
        let cases = parse_case_content(content).unwrap();
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[1].expectation(), Some(Expectation::Error("EmptySelectList")));

        let model = cases[0].model.build();
        let preds = model.where_formulas().to_vec();
        assert_eq!(preds[0].operator().as_str(), "AND");
        assert_eq!(preds[1].operator().as_str(), "OR");
    }

    #[test]
    fn test_order_spec_direction() {
        let content = r#"
description: Order
model:
  select: [a]
  order_by:
    - { formula: a }
    - { formula: b, alias: bee, direction: Descending }
expected: irrelevant
"#;
        let cases = parse_case_content(content).unwrap();
        let orders = cases[0].model.build().order_bys().to_vec();
        assert_eq!(orders[0].direction(), SortDirection::Ascending);
        assert_eq!(orders[1].direction(), SortDirection::Descending);
        assert_eq!(orders[1].selection().alias(), Some("bee"));
    }

    #[test]
    fn test_missing_expectation() {
        let content = "description: Nothing expected\nmodel: {}\n";
        assert!(matches!(
            parse_case_content(content),
            Err(CaseError::AmbiguousExpectation(_))
        ));
    }

    #[test]
    fn test_hand_built_case_without_expectation() {
        let case = RenderCase {
            description: "built in code".to_string(),
            config: None,
            model: ModelSpec::default(),
            expected: None,
            error: None,
        };
        assert_eq!(case.expectation(), None);

        let case = RenderCase {
            error: Some(" EmptySelectList\n".to_string()),
            ..case
        };
        assert_eq!(case.expectation(), Some(Expectation::Error("EmptySelectList")));
    }

    #[test]
    fn test_empty_file() {
        assert!(matches!(parse_case_content(""), Err(CaseError::EmptyFile)));
        assert!(matches!(parse_case_content("---\n---\n"), Err(CaseError::EmptyFile)));
    }
}
