//! The ordered outline of sections for one video.

use crate::SectionSpec;
use eisenstein_error::{OutlineError, OutlineErrorKind};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// An ordered, validated list of sections.
///
/// Invariants, enforced on construction:
/// - every `duration_frames` is strictly positive
/// - identifiers are unique (two names normalizing to the same symbol
///   reject the whole outline rather than emitting colliding exports)
///
/// # Examples
///
/// ```
/// use eisenstein_core::{SectionOutline, SectionSpec};
///
/// let outline = SectionOutline::new(vec![
///     SectionSpec::new("Intro", "Intro", 90, "A cute cat appears"),
///     SectionSpec::new("Ending", "Ending", 60, "The cat waves goodbye"),
/// ]).unwrap();
///
/// assert_eq!(outline.len(), 2);
/// assert_eq!(outline.total_frames(), 150);
/// ```
/// Identifier stems of files the registry maintains itself: the
/// bootstrap component (`Main.tsx`) and the registry module
/// (`index.tsx`). A section must never materialize onto either.
pub const RESERVED_IDENTIFIERS: &[&str] = &["Main", "Index"];

/// Whether an identifier collides with a registry-maintained file.
///
/// The comparison ignores ASCII case because artifact files land on
/// filesystems that may not distinguish `Index.tsx` from `index.tsx`.
pub fn is_reserved_identifier(identifier: &str) -> bool {
    RESERVED_IDENTIFIERS
        .iter()
        .any(|r| r.eq_ignore_ascii_case(identifier))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionOutline {
    sections: Vec<SectionSpec>,
}

impl SectionOutline {
    /// Build an outline from an ordered list of sections, validating
    /// the registry invariants.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty, any duration is zero, two
    /// sections share an identifier, or an identifier is reserved.
    pub fn new(sections: Vec<SectionSpec>) -> Result<Self, OutlineError> {
        let outline = Self { sections };
        outline.validate()?;
        Ok(outline)
    }

    /// Re-check the outline invariants.
    ///
    /// Deserialized manifests go through this before being trusted.
    pub fn validate(&self) -> Result<(), OutlineError> {
        if self.sections.is_empty() {
            return Err(OutlineError::new(OutlineErrorKind::EmptyOutline));
        }

        let mut seen = HashSet::new();
        for spec in &self.sections {
            if is_reserved_identifier(spec.identifier()) {
                return Err(OutlineError::new(OutlineErrorKind::ReservedIdentifier(
                    spec.identifier().clone(),
                )));
            }
            if *spec.duration_frames() == 0 {
                return Err(OutlineError::new(OutlineErrorKind::InvalidDuration {
                    section: spec.title().clone(),
                    value: "0".to_string(),
                }));
            }
            if !seen.insert(spec.identifier().clone()) {
                return Err(OutlineError::new(OutlineErrorKind::DuplicateIdentifier(
                    spec.identifier().clone(),
                )));
            }
        }

        Ok(())
    }

    /// The sections in play order.
    pub fn sections(&self) -> &[SectionSpec] {
        &self.sections
    }

    /// Number of sections in the outline.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the outline holds no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Total duration in frames, summed in play order.
    pub fn total_frames(&self) -> u64 {
        self.sections
            .iter()
            .map(|s| u64::from(*s.duration_frames()))
            .sum()
    }

    /// Look up a section by identifier.
    pub fn get(&self, identifier: &str) -> Option<&SectionSpec> {
        self.sections.iter().find(|s| s.identifier() == identifier)
    }

    /// Look up a section by identifier, mutably.
    pub fn get_mut(&mut self, identifier: &str) -> Option<&mut SectionSpec> {
        self.sections
            .iter_mut()
            .find(|s| s.identifier() == identifier)
    }

    /// Clear every section's edited flag.
    pub fn reset_edited(&mut self) {
        for spec in &mut self.sections {
            spec.clear_edited();
        }
    }
}

impl IntoIterator for SectionOutline {
    type Item = SectionSpec;
    type IntoIter = std::vec::IntoIter<SectionSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.into_iter()
    }
}

impl<'a> IntoIterator for &'a SectionOutline {
    type Item = &'a SectionSpec;
    type IntoIter = std::slice::Iter<'a, SectionSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(id: &str, frames: u32) -> SectionSpec {
        SectionSpec::new(id, id, frames, "placeholder")
    }

    #[test]
    fn total_frames_sums_in_order() {
        let outline = SectionOutline::new(vec![spec("Intro", 90), spec("Ending", 60)]).unwrap();
        assert_eq!(outline.total_frames(), 150);
        assert_eq!(outline.sections()[0].identifier(), "Intro");
        assert_eq!(outline.sections()[1].identifier(), "Ending");
    }

    #[test]
    fn rejects_empty_outline() {
        assert!(SectionOutline::new(vec![]).is_err());
    }

    #[test]
    fn rejects_zero_duration() {
        assert!(SectionOutline::new(vec![spec("Intro", 0)]).is_err());
    }

    #[test]
    fn rejects_duplicate_identifiers() {
        let err = SectionOutline::new(vec![spec("Intro", 90), spec("Intro", 60)]).unwrap_err();
        assert!(format!("{}", err).contains("Duplicate"));
    }

    #[test]
    fn rejects_reserved_identifiers() {
        // The bootstrap component and the registry module own these stems
        let err = SectionOutline::new(vec![spec("Main", 90)]).unwrap_err();
        assert!(matches!(err.kind, OutlineErrorKind::ReservedIdentifier(_)));
        assert!(SectionOutline::new(vec![spec("Index", 90)]).is_err());
    }

    #[test]
    fn reserved_check_ignores_ascii_case() {
        assert!(is_reserved_identifier("main"));
        assert!(is_reserved_identifier("INDEX"));
        assert!(!is_reserved_identifier("Mainline"));
    }

    #[test]
    fn lookup_by_identifier() {
        let mut outline =
            SectionOutline::new(vec![spec("Intro", 90), spec("Ending", 60)]).unwrap();
        assert!(outline.get("Intro").is_some());
        assert!(outline.get("Missing").is_none());

        outline.get_mut("Intro").unwrap().mark_edited();
        assert!(*outline.get("Intro").unwrap().edited());
    }
}
