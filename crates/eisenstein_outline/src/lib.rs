//! Outline request and parsing for Eisenstein.
//!
//! The outline is the ordered, delimited-text description of a video's
//! sections returned by the text-generation service:
//!
//! ```text
//! Intro & 90 & A cute cat appears | Ending & 60 & The cat waves goodbye
//! ```
//!
//! [`OutlineRequester`] turns a free-text video idea into one prompt and
//! extracts the raw response text; [`parse_outline`] treats that text as
//! untrusted input and converts it into a validated [`SectionOutline`]
//! or rejects it wholesale.
//!
//! [`SectionOutline`]: eisenstein_core::SectionOutline

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod parser;
mod requester;

pub use parser::{normalize_identifier, parse_outline};
pub use requester::OutlineRequester;
