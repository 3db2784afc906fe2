//! Test utilities for Eisenstein model tests.
//!
//! This module provides mock implementations and test helpers.

use eisenstein_core::{GenerateRequest, Message};

pub mod mock_driver;

#[allow(unused_imports)]
pub use mock_driver::{MockDriver, MockResponse};

/// Helper to create a test GenerateRequest using the builder pattern.
#[allow(dead_code)]
pub fn create_test_request(
    prompt: &str,
    model: Option<String>,
    max_tokens: Option<u32>,
) -> GenerateRequest {
    GenerateRequest::builder()
        .messages(vec![Message::user(prompt)])
        .max_tokens(max_tokens)
        .temperature(None)
        .model(model)
        .build()
        .expect("Failed to build test request")
}
