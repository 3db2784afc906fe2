//! Error types for the Eisenstein library.
//!
//! This crate provides the foundation error types used throughout the Eisenstein
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use eisenstein_error::{EisensteinResult, GeminiError, GeminiErrorKind};
//!
//! fn request_outline() -> EisensteinResult<String> {
//!     Err(GeminiError::new(GeminiErrorKind::EmptyResponse))?
//! }
//!
//! match request_outline() {
//!     Ok(text) => println!("Got: {}", text),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod gemini;
mod outline;
mod registry;

pub use config::ConfigError;
pub use error::{EisensteinError, EisensteinErrorKind, EisensteinResult};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use outline::{OutlineError, OutlineErrorKind};
pub use registry::{RegistryError, RegistryErrorKind};
