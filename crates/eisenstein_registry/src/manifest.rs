//! Persistence of the section manifest (`registry.json`).
//!
//! The manifest is the durable copy of the outline the registry was last
//! built from. The rendered `index.tsx` is derived from it and never read
//! back; the manifest is the single source of truth for section order,
//! durations, and edited flags.

use crate::artifact::MANIFEST_FILE;
use eisenstein_core::SectionOutline;
use eisenstein_error::{RegistryError, RegistryErrorKind};
use std::path::Path;

/// Load the manifest from a project directory.
///
/// The outline is re-validated after parsing, so a hand-edited manifest
/// with duplicate identifiers or zero durations is rejected rather than
/// propagated into the next rebuild.
///
/// # Errors
///
/// Returns [`RegistryErrorKind::ManifestMissing`] when no manifest exists
/// and [`RegistryErrorKind::ManifestParse`] when it cannot be parsed or
/// fails validation.
pub async fn load_manifest(dir: &Path) -> Result<SectionOutline, RegistryError> {
    let path = dir.join(MANIFEST_FILE);

    let raw = match tokio::fs::read_to_string(&path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(RegistryError::new(RegistryErrorKind::ManifestMissing(
                path.display().to_string(),
            )));
        }
        Err(e) => {
            return Err(RegistryError::new(RegistryErrorKind::FileRead(format!(
                "{}: {}",
                path.display(),
                e
            ))));
        }
    };

    let sections = serde_json::from_str(&raw).map_err(|e| {
        RegistryError::new(RegistryErrorKind::ManifestParse(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })?;

    SectionOutline::new(sections).map_err(|e| {
        RegistryError::new(RegistryErrorKind::ManifestParse(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })
}

/// Write the manifest to a project directory.
///
/// Uses a temp file + rename so a crash mid-write never leaves a
/// half-serialized manifest behind.
///
/// # Errors
///
/// Returns [`RegistryErrorKind::FileWrite`] if either step fails.
pub async fn save_manifest(dir: &Path, outline: &SectionOutline) -> Result<(), RegistryError> {
    let path = dir.join(MANIFEST_FILE);

    let raw = serde_json::to_string_pretty(outline.sections()).map_err(|e| {
        RegistryError::new(RegistryErrorKind::FileWrite(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })?;

    let temp_path = path.with_extension("json.tmp");
    tokio::fs::write(&temp_path, raw).await.map_err(|e| {
        RegistryError::new(RegistryErrorKind::FileWrite(format!(
            "{}: {}",
            temp_path.display(),
            e
        )))
    })?;

    tokio::fs::rename(&temp_path, &path).await.map_err(|e| {
        RegistryError::new(RegistryErrorKind::FileWrite(format!(
            "rename {} to {}: {}",
            temp_path.display(),
            path.display(),
            e
        )))
    })
}
