//! Top-level error wrapper types.

use crate::{ConfigError, GeminiError, OutlineError, RegistryError};

/// This is the foundation error enum. Each pipeline stage contributes
/// its own variant so callers can report distinct, user-visible failures.
///
/// # Examples
///
/// ```
/// use eisenstein_error::{EisensteinError, GeminiError, GeminiErrorKind};
///
/// let gemini_err = GeminiError::new(GeminiErrorKind::MissingApiKey);
/// let err: EisensteinError = gemini_err.into();
/// assert!(format!("{}", err).contains("Gemini Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum EisensteinErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Text-generation service error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Outline request/parse error
    #[from(OutlineError)]
    Outline(OutlineError),
    /// Registry materialization error
    #[from(RegistryError)]
    Registry(RegistryError),
}

/// Eisenstein error with kind discrimination.
///
/// # Examples
///
/// ```
/// use eisenstein_error::{EisensteinResult, ConfigError};
///
/// fn might_fail() -> EisensteinResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Eisenstein Error: {}", _0)]
pub struct EisensteinError(Box<EisensteinErrorKind>);

impl EisensteinError {
    /// Create a new error from a kind.
    pub fn new(kind: EisensteinErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &EisensteinErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to EisensteinErrorKind
impl<T> From<T> for EisensteinError
where
    T: Into<EisensteinErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Eisenstein operations.
///
/// # Examples
///
/// ```
/// use eisenstein_error::{EisensteinResult, ConfigError};
///
/// fn load_settings() -> EisensteinResult<String> {
///     Err(ConfigError::new("eisenstein.toml not found"))?
/// }
/// ```
pub type EisensteinResult<T> = std::result::Result<T, EisensteinError>;
