// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Dialect-specific renderer implementations

pub mod ansi;
pub mod base;

pub use ansi::AnsiRenderer;
pub use base::DialectRenderBase;
