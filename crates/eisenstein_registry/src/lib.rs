//! Artifact materialization and the section registry.
//!
//! This crate turns a validated [`SectionOutline`](eisenstein_core::SectionOutline)
//! into files on disk: one TSX artifact per section, an aggregate registry
//! module (`index.tsx`) that imports them all in order, and a JSON manifest
//! (`registry.json`) recording what the registry was built from.
//!
//! [`RegistryMaterializer`] is the entry point. It owns the write lock, the
//! wipe-then-rewrite rebuild, and the single-section LLM update path.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod artifact;
mod extraction;
mod manifest;
mod materializer;

pub use artifact::{
    artifact_file_name, duration_symbol, edited_symbol, finalize_edit, render_index,
    render_placeholder, BOOTSTRAP_FILE, INDEX_FILE, MANIFEST_FILE,
};
pub use extraction::extract_artifact;
pub use manifest::{load_manifest, save_manifest};
pub use materializer::RegistryMaterializer;
