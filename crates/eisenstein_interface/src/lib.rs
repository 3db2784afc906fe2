//! Trait definitions for Eisenstein text-generation backends.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::EisensteinDriver;
