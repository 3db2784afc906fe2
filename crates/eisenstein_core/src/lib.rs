//! Core data types for the Eisenstein video generation library.
//!
//! This crate provides the foundation data types shared across the pipeline:
//! the section data model (outline entries and the ordered outline itself)
//! and the request/response types for the text-generation service.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod message;
mod outline;
mod request;
mod role;
mod section;

pub use message::Message;
pub use outline::{is_reserved_identifier, SectionOutline, RESERVED_IDENTIFIERS};
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse};
pub use role::Role;
pub use section::SectionSpec;
