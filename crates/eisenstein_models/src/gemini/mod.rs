//! Google Gemini API client implementation.
//!
//! A thin REST client over the `gemini-rust` crate. The pipeline issues
//! exactly one sequential generation call per user action, so there is no
//! retry loop and no streaming surface; every call is bounded by a
//! configurable timeout instead.

mod client;

pub use client::GeminiClient;

/// Result type for Gemini operations.
pub type GeminiResult<T> = Result<T, eisenstein_error::GeminiError>;
