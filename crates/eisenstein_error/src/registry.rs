//! Registry materialization error types.

/// Specific error conditions for registry operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum RegistryErrorKind {
    /// Failed to create the artifact directory
    #[display("Failed to create directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to write an artifact or the registry module
    #[display("Failed to write artifact: {}", _0)]
    FileWrite(String),
    /// Failed to read an existing artifact
    #[display("Failed to read artifact: {}", _0)]
    FileRead(String),
    /// The registry manifest could not be parsed
    #[display("Failed to parse registry manifest: {}", _0)]
    ManifestParse(String),
    /// No registry manifest exists for this project yet
    #[display("No registry manifest found at {}", _0)]
    ManifestMissing(String),
    /// An edit targeted an identifier absent from the registry
    #[display("Section '{}' not found in registry", _0)]
    SectionNotFound(String),
    /// An edit response contained no fenced code block
    #[display("Response for section '{}' contained no code block", _0)]
    MissingCodeFence(String),
    /// An edit response produced an empty artifact body
    #[display("Response for section '{}' produced an empty artifact", _0)]
    EmptyArtifact(String),
    /// A write failed after the wipe began; artifacts no longer match
    /// the registry and a full rebuild is required
    #[display("Registry inconsistent, rebuild required: {}", _0)]
    Inconsistent(String),
}

/// Error type for registry operations.
///
/// # Examples
///
/// ```
/// use eisenstein_error::{RegistryError, RegistryErrorKind};
///
/// let err = RegistryError::new(RegistryErrorKind::SectionNotFound("Intro".into()));
/// assert!(format!("{}", err).contains("Intro"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Registry Error: {} at line {} in {}", kind, line, file)]
pub struct RegistryError {
    /// The specific error condition
    pub kind: RegistryErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl RegistryError {
    /// Create a new RegistryError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RegistryErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
