//! Outline request and parse error types.

/// Specific error conditions for outline operations.
///
/// Any malformed segment aborts the whole parse: the parser never
/// constructs a partial section record, and the materializer is never
/// invoked with a rejected outline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum OutlineErrorKind {
    /// The user-supplied video idea was empty
    #[display("Video idea description cannot be empty")]
    EmptyIdea,
    /// The response contained no section segments
    #[display("Outline response contained no sections")]
    EmptyOutline,
    /// A segment did not split into exactly three fields
    #[display("Segment '{}' has {} fields, expected 3 (name & duration & description)", segment, found)]
    FieldCount {
        /// The offending segment text
        segment: String,
        /// Number of fields found
        found: usize,
    },
    /// A duration field was not a positive base-10 integer
    #[display("Invalid duration '{}' for section '{}'", value, section)]
    InvalidDuration {
        /// Section name as returned by the model
        section: String,
        /// The unparseable duration field
        value: String,
    },
    /// A section name normalized to an empty identifier
    #[display("Section name '{}' contains no usable identifier characters", _0)]
    EmptyIdentifier(String),
    /// A normalized identifier started with a digit
    #[display("Identifier '{}' cannot start with a digit", _0)]
    LeadingDigit(String),
    /// Two section names normalized to the same identifier
    #[display("Duplicate section identifier '{}'", _0)]
    DuplicateIdentifier(String),
    /// A section identifier collides with a file the registry maintains
    /// itself (the bootstrap component or the registry module)
    #[display("Section identifier '{}' is reserved", _0)]
    ReservedIdentifier(String),
}

/// Error type for outline operations.
///
/// # Examples
///
/// ```
/// use eisenstein_error::{OutlineError, OutlineErrorKind};
///
/// let err = OutlineError::new(OutlineErrorKind::EmptyOutline);
/// assert!(format!("{}", err).contains("no sections"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Outline Error: {} at line {} in {}", kind, line, file)]
pub struct OutlineError {
    /// The specific error condition
    pub kind: OutlineErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl OutlineError {
    /// Create a new OutlineError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: OutlineErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
