//! Utilities for extracting section source from LLM responses.
//!
//! LLM responses usually wrap generated component code in markdown fences
//! and pad it with explanatory prose. This module pulls the first fenced
//! block out of a response and normalizes it into an artifact body.

use eisenstein_error::{RegistryError, RegistryErrorKind};

/// Extract the first fenced code block from a response.
///
/// Handles the common response patterns:
/// - ```` ```tsx\n...\n``` ```` (language tag on the fence line)
/// - ```` ``` ... ``` ```` (no language tag)
/// - an opening fence with no closing fence (truncated response; the
///   remainder of the response is taken as the block)
///
/// # Errors
///
/// Returns [`RegistryErrorKind::MissingCodeFence`] when the response has no
/// opening fence at all, and [`RegistryErrorKind::EmptyArtifact`] when the
/// fenced block contains nothing but whitespace.
///
/// # Examples
///
/// ```
/// use eisenstein_registry::extract_artifact;
///
/// let response = "Here is the component:\n\
///     \n\
///     ```tsx\n\
///     export const Intro = () => null;\n\
///     ```\n";
///
/// let body = extract_artifact(response, "Intro").unwrap();
/// assert!(body.contains("export const Intro"));
/// assert!(!body.contains("```"));
/// ```
pub fn extract_artifact(response: &str, identifier: &str) -> Result<String, RegistryError> {
    let Some(start) = response.find("```") else {
        tracing::error!(
            identifier,
            response_length = response.len(),
            "No code fence found in LLM response"
        );
        return Err(RegistryError::new(RegistryErrorKind::MissingCodeFence(
            identifier.to_string(),
        )));
    };

    let content_start = start + 3;
    // Skip past the fence line itself, dropping any language tag
    let skip_to = response[content_start..]
        .find('\n')
        .map(|n| content_start + n + 1)
        .unwrap_or(content_start);

    let body = match response[skip_to..].find("```") {
        Some(end) => response[skip_to..skip_to + end].trim(),
        // No closing fence - likely truncated response, take the rest
        None => response[skip_to..].trim(),
    };

    if body.is_empty() {
        return Err(RegistryError::new(RegistryErrorKind::EmptyArtifact(
            identifier.to_string(),
        )));
    }

    Ok(body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use eisenstein_error::RegistryErrorKind;

    #[test]
    fn test_extract_with_language_tag() {
        let response = "Sure, here you go:\n\n```tsx\nexport const Intro = () => null;\n```\n\nLet me know!";
        let body = extract_artifact(response, "Intro").unwrap();
        assert_eq!(body, "export const Intro = () => null;");
    }

    #[test]
    fn test_extract_without_language_tag() {
        let response = "```\nconst x = 1;\n```";
        let body = extract_artifact(response, "Intro").unwrap();
        assert_eq!(body, "const x = 1;");
    }

    #[test]
    fn test_extract_truncated_response() {
        let response = "```tsx\nexport const Intro = () => {\n  return null;";
        let body = extract_artifact(response, "Intro").unwrap();
        assert!(body.starts_with("export const Intro"));
        assert!(body.ends_with("return null;"));
    }

    #[test]
    fn test_no_fence_is_an_error() {
        let response = "I'm sorry, I can't generate that component.";
        let err = extract_artifact(response, "Intro").unwrap_err();
        assert!(matches!(
            &err.kind,
            RegistryErrorKind::MissingCodeFence(id) if id.as_str() == "Intro"
        ));
    }

    #[test]
    fn test_empty_fence_is_an_error() {
        let response = "```tsx\n\n```";
        let err = extract_artifact(response, "Intro").unwrap_err();
        assert!(matches!(
            &err.kind,
            RegistryErrorKind::EmptyArtifact(id) if id.as_str() == "Intro"
        ));
    }

    #[test]
    fn test_only_first_block_is_used() {
        let response = "```tsx\nfirst\n```\nand also:\n```tsx\nsecond\n```";
        let body = extract_artifact(response, "Intro").unwrap();
        assert_eq!(body, "first");
    }

    #[test]
    fn test_inner_prose_is_preserved() {
        let response = "```tsx\nline one\n\nline two\n```";
        let body = extract_artifact(response, "Intro").unwrap();
        assert_eq!(body, "line one\n\nline two");
    }
}
