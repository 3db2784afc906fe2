//! Strict parsing of delimited outline text.
//!
//! The model's response is an untrusted external input. Any malformed
//! segment aborts the whole parse with a specific error; the parser never
//! constructs a partial section record.

use eisenstein_core::{SectionOutline, SectionSpec};
use eisenstein_error::{OutlineError, OutlineErrorKind};

/// Parse a delimited outline response into a validated section outline.
///
/// The expected grammar is one line of `|`-separated segments, each
/// holding exactly three `&`-separated fields: name, duration in frames,
/// description. Fields are trimmed; durations must be positive base-10
/// integers; names must normalize to non-empty identifiers unique within
/// the outline.
///
/// # Errors
///
/// Returns an error on the first malformed segment, invalid duration,
/// unusable name, or identifier collision. No partial outline is ever
/// returned.
///
/// # Examples
///
/// ```
/// use eisenstein_outline::parse_outline;
///
/// let outline = parse_outline(
///     "Intro & 90 & A cute cat appears | Ending & 60 & The cat waves goodbye",
/// ).unwrap();
///
/// assert_eq!(outline.len(), 2);
/// assert_eq!(outline.sections()[0].identifier(), "Intro");
/// assert_eq!(outline.total_frames(), 150);
/// ```
#[tracing::instrument(skip(response), fields(response_length = response.len()))]
pub fn parse_outline(response: &str) -> Result<SectionOutline, OutlineError> {
    let trimmed = response.trim();
    if trimmed.is_empty() {
        return Err(OutlineError::new(OutlineErrorKind::EmptyOutline));
    }

    let mut sections = Vec::new();
    for segment in trimmed.split('|') {
        sections.push(parse_segment(segment)?);
    }

    let outline = SectionOutline::new(sections)?;

    tracing::debug!(
        section_count = outline.len(),
        total_frames = outline.total_frames(),
        "Parsed outline"
    );

    Ok(outline)
}

/// Parse one `name & duration & description` segment.
fn parse_segment(segment: &str) -> Result<SectionSpec, OutlineError> {
    let fields: Vec<&str> = segment.split('&').map(str::trim).collect();
    if fields.len() != 3 {
        return Err(OutlineError::new(OutlineErrorKind::FieldCount {
            segment: segment.trim().to_string(),
            found: fields.len(),
        }));
    }

    let (name, duration_field, description) = (fields[0], fields[1], fields[2]);

    let duration_frames: u32 = duration_field.parse().map_err(|_| {
        OutlineError::new(OutlineErrorKind::InvalidDuration {
            section: name.to_string(),
            value: duration_field.to_string(),
        })
    })?;
    if duration_frames == 0 {
        return Err(OutlineError::new(OutlineErrorKind::InvalidDuration {
            section: name.to_string(),
            value: duration_field.to_string(),
        }));
    }

    let identifier = normalize_identifier(name)?;

    Ok(SectionSpec::new(identifier, name, duration_frames, description))
}

/// Derive a canonical identifier from a model-supplied section name.
///
/// Strips whitespace and every character that is not an ASCII alphanumeric
/// or underscore, then uppercases the first letter. The result is used
/// verbatim as a TypeScript export symbol and a file stem, so it must be
/// non-empty and must not start with a digit.
///
/// # Errors
///
/// Returns an error if nothing usable remains after stripping, the
/// remainder starts with a digit, or the result collides with a file
/// the registry maintains itself (`Main`, `Index` in any ASCII case).
///
/// # Examples
///
/// ```
/// use eisenstein_outline::normalize_identifier;
///
/// assert_eq!(normalize_identifier("The Browser Wars").unwrap(), "TheBrowserWars");
/// assert_eq!(normalize_identifier("intro!").unwrap(), "Intro");
/// assert!(normalize_identifier("???").is_err());
/// ```
pub fn normalize_identifier(name: &str) -> Result<String, OutlineError> {
    let stripped: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();

    if stripped.is_empty() {
        return Err(OutlineError::new(OutlineErrorKind::EmptyIdentifier(
            name.to_string(),
        )));
    }

    let first = stripped.chars().next().ok_or_else(|| {
        OutlineError::new(OutlineErrorKind::EmptyIdentifier(name.to_string()))
    })?;
    if first.is_ascii_digit() {
        return Err(OutlineError::new(OutlineErrorKind::LeadingDigit(stripped)));
    }

    let identifier = first.to_ascii_uppercase().to_string() + &stripped[1..];
    if eisenstein_core::is_reserved_identifier(&identifier) {
        return Err(OutlineError::new(OutlineErrorKind::ReservedIdentifier(
            identifier,
        )));
    }

    Ok(identifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use eisenstein_error::OutlineErrorKind;

    #[test]
    fn parses_two_section_outline() {
        let outline = parse_outline(
            "Intro & 90 & A cute cat appears | Ending & 60 & The cat waves goodbye",
        )
        .unwrap();

        assert_eq!(outline.len(), 2);
        let intro = &outline.sections()[0];
        assert_eq!(intro.identifier(), "Intro");
        assert_eq!(*intro.duration_frames(), 90);
        assert_eq!(intro.description(), "A cute cat appears");
        assert!(!intro.edited());

        let ending = &outline.sections()[1];
        assert_eq!(ending.identifier(), "Ending");
        assert_eq!(*ending.duration_frames(), 60);
        assert_eq!(ending.description(), "The cat waves goodbye");

        assert_eq!(outline.total_frames(), 150);
    }

    #[test]
    fn preserves_segment_order() {
        let outline = parse_outline("C & 10 & c | A & 20 & a | B & 30 & b").unwrap();
        let ids: Vec<&str> = outline
            .sections()
            .iter()
            .map(|s| s.identifier().as_str())
            .collect();
        assert_eq!(ids, ["C", "A", "B"]);
    }

    #[test]
    fn rejects_segment_with_two_fields() {
        let err = parse_outline("Intro & 90 | Ending & 60 & bye").unwrap_err();
        assert!(matches!(err.kind, OutlineErrorKind::FieldCount { found: 2, .. }));
    }

    #[test]
    fn rejects_segment_with_four_fields() {
        let err = parse_outline("Intro & 90 & hi & extra").unwrap_err();
        assert!(matches!(err.kind, OutlineErrorKind::FieldCount { found: 4, .. }));
    }

    #[test]
    fn rejects_trailing_delimiter() {
        let err = parse_outline("Intro & 90 & hi |").unwrap_err();
        assert!(matches!(err.kind, OutlineErrorKind::FieldCount { .. }));
    }

    #[test]
    fn rejects_non_numeric_duration() {
        let err = parse_outline("Intro & ninety & hi").unwrap_err();
        assert!(matches!(err.kind, OutlineErrorKind::InvalidDuration { .. }));
    }

    #[test]
    fn rejects_negative_duration() {
        let err = parse_outline("Intro & -90 & hi").unwrap_err();
        assert!(matches!(err.kind, OutlineErrorKind::InvalidDuration { .. }));
    }

    #[test]
    fn rejects_zero_duration() {
        let err = parse_outline("Intro & 0 & hi").unwrap_err();
        assert!(matches!(err.kind, OutlineErrorKind::InvalidDuration { .. }));
    }

    #[test]
    fn rejects_empty_response() {
        let err = parse_outline("   ").unwrap_err();
        assert!(matches!(err.kind, OutlineErrorKind::EmptyOutline));
    }

    #[test]
    fn rejects_identifier_collision() {
        // "Intro!" and "Intro?" both normalize to "Intro"
        let err = parse_outline("Intro! & 90 & one | Intro? & 60 & two").unwrap_err();
        assert!(matches!(
            err.kind,
            OutlineErrorKind::DuplicateIdentifier(ref id) if id.as_str() == "Intro"
        ));
    }

    #[test]
    fn strips_punctuation_from_names() {
        let outline = parse_outline("What is CSS Grid? & 120 & basics").unwrap();
        assert_eq!(outline.sections()[0].identifier(), "WhatisCSSGrid");
        assert_eq!(outline.sections()[0].title(), "What is CSS Grid?");
    }

    #[test]
    fn keeps_underscores_in_names() {
        let outline = parse_outline("Early_Life_And_Rise & 300 & bio").unwrap();
        assert_eq!(outline.sections()[0].identifier(), "Early_Life_And_Rise");
    }

    #[test]
    fn capitalizes_lowercase_names() {
        assert_eq!(normalize_identifier("intro").unwrap(), "Intro");
    }

    #[test]
    fn rejects_name_with_no_letters() {
        let err = parse_outline("!!! & 90 & hi").unwrap_err();
        assert!(matches!(err.kind, OutlineErrorKind::EmptyIdentifier(_)));
    }

    #[test]
    fn rejects_leading_digit_identifier() {
        let err = normalize_identifier("3rd Act").unwrap_err();
        assert!(matches!(err.kind, OutlineErrorKind::LeadingDigit(_)));
    }

    #[test]
    fn rejects_bootstrap_identifier() {
        // "Main & 90 & desc" is otherwise well formed, but Main.tsx is the
        // protected bootstrap component and must never be materialized over
        let err = parse_outline("Main & 90 & desc | Ending & 60 & bye").unwrap_err();
        assert!(matches!(
            err.kind,
            OutlineErrorKind::ReservedIdentifier(ref id) if id.as_str() == "Main"
        ));
    }

    #[test]
    fn rejects_registry_module_identifier_in_any_case() {
        // "index" normalizes to "Index", which collides with index.tsx on
        // case-insensitive filesystems
        let err = normalize_identifier("index").unwrap_err();
        assert!(matches!(err.kind, OutlineErrorKind::ReservedIdentifier(_)));

        let err = normalize_identifier("main").unwrap_err();
        assert!(matches!(
            err.kind,
            OutlineErrorKind::ReservedIdentifier(ref id) if id.as_str() == "Main"
        ));
    }
}
