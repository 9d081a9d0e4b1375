// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Testing utilities for the SQL query model
//!
//! This crate provides common testing components including:
//! - Prebuilt query models
//! - Model-specific assertions and SQL text helpers
//! - The YAML render case format

pub mod assertions;
pub mod fixtures;
pub mod render_case;

// Re-exports for convenience
pub use assertions::{ModelAssertions, clause_keywords, normalize_whitespace};
pub use fixtures::ModelFixtures;
pub use render_case::{
    CaseError, Expectation, ModelSpec, RenderCase, parse_case_content, parse_case_file,
};
