//! The section data model.

use serde::{Deserialize, Serialize};

/// One entry in a generated video outline.
///
/// The `identifier` is derived from the model-supplied name and doubles as
/// the TypeScript export symbol and the artifact file stem, so it is
/// restricted to ASCII alphanumerics and underscores and never starts with
/// a digit. `title` preserves the raw name for display.
///
/// # Examples
///
/// ```
/// use eisenstein_core::SectionSpec;
///
/// let spec = SectionSpec::new("Intro", "Intro", 90, "A cute cat appears");
/// assert_eq!(spec.identifier(), "Intro");
/// assert_eq!(*spec.duration_frames(), 90);
/// assert!(!spec.edited());
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct SectionSpec {
    /// Canonical identifier (export symbol and file stem)
    identifier: String,
    /// Raw section name as returned by the model
    title: String,
    /// Length of the section in animation frames
    duration_frames: u32,
    /// Free-text description carried into artifact generation prompts
    description: String,
    /// Whether the artifact has been modified since initial creation
    #[serde(default)]
    edited: bool,
}

impl SectionSpec {
    /// Create a new section spec with `edited` unset.
    pub fn new(
        identifier: impl Into<String>,
        title: impl Into<String>,
        duration_frames: u32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            title: title.into(),
            duration_frames,
            description: description.into(),
            edited: false,
        }
    }

    /// Mark the section's artifact as edited.
    pub fn mark_edited(&mut self) {
        self.edited = true;
    }

    /// Clear the edited flag, e.g. when the artifact reverts to a
    /// placeholder.
    pub fn clear_edited(&mut self) {
        self.edited = false;
    }
}
