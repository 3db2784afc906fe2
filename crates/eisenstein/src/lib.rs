//! Eisenstein: an LLM-driven section registry builder for Remotion videos.
//!
//! The pipeline has three stages:
//!
//! 1. [`OutlineRequester`] turns a free-text video idea into a delimited
//!    outline and parses it into a validated [`SectionOutline`].
//! 2. [`RegistryMaterializer`] writes one TSX artifact per section plus an
//!    aggregate registry module and a JSON manifest.
//! 3. Individual sections are regenerated or revised through
//!    [`RegistryMaterializer::update_section`] without touching the rest.
//!
//! The [`EisensteinDriver`] trait is the seam between the pipeline and the
//! text-generation service; [`GeminiClient`] is the bundled implementation.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cli;
mod config;

pub use cli::{Cli, Commands};
pub use config::EisensteinConfig;

pub use eisenstein_core::{
    GenerateRequest, GenerateResponse, Message, Role, SectionOutline, SectionSpec,
};
pub use eisenstein_error::{
    ConfigError, EisensteinError, EisensteinErrorKind, EisensteinResult, GeminiError,
    GeminiErrorKind, OutlineError, OutlineErrorKind, RegistryError, RegistryErrorKind,
};
pub use eisenstein_interface::EisensteinDriver;
pub use eisenstein_models::GeminiClient;
pub use eisenstein_outline::{parse_outline, OutlineRequester};
pub use eisenstein_registry::{load_manifest, save_manifest, RegistryMaterializer};
