// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! File-driven render cases
//!
//! Every document in `tests/cases/render_cases.yaml` builds a model through
//! the append operations, renders it and compares the SQL or error variant.

use std::path::Path;

use sql_query_model_render::{AnsiRenderer, RenderConfig, RenderResult, Renderer};
use sql_query_model_test_utils::{Expectation, RenderCase, parse_case_file};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn run_case(case: &RenderCase) -> RenderResult<String> {
    let config = match &case.config {
        Some(settings) => RenderConfig::from_json(settings)?,
        None => RenderConfig::default(),
    };
    AnsiRenderer::new(config).render(&case.model.build())
}

#[test]
fn test_render_cases() {
    init_tracing();

    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/cases/render_cases.yaml");
    let cases = parse_case_file(&path).expect("Failed to parse render_cases.yaml");
    assert!(cases.len() >= 10, "Expected at least 10 cases, found {}", cases.len());

    for case in &cases {
        let outcome = run_case(case);
        let expectation = case
            .expectation()
            .unwrap_or_else(|| panic!("Case '{}' has no expectation", case.description));
        match expectation {
            Expectation::Sql(expected) => {
                let sql = outcome.unwrap_or_else(|e| {
                    panic!("Case '{}' failed to render: {}", case.description, e)
                });
                assert_eq!(sql, expected, "Case '{}' rendered differently", case.description);
            }
            Expectation::Error(variant) => {
                let err = outcome.expect_err(&format!(
                    "Case '{}' rendered but an error was expected",
                    case.description
                ));
                assert_eq!(
                    err.variant_name(),
                    variant,
                    "Case '{}' failed with the wrong error: {}",
                    case.description,
                    err
                );
            }
        }
    }
}
