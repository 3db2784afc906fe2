//! Text-generation backends for Eisenstein.
//!
//! Currently provides a single backend: the Google Gemini API via the
//! `gemini-rust` crate.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;

pub use gemini::GeminiClient;
