//! Trait definitions for text-generation backends.

use async_trait::async_trait;
use eisenstein_core::{GenerateRequest, GenerateResponse};
use eisenstein_error::EisensteinResult;

/// Core trait that all text-generation backends must implement.
///
/// The pipeline makes exactly one sequential call per user action, so this
/// is the whole seam: a request in, a text response out. Validation of the
/// response format belongs to the caller, never the driver.
#[async_trait]
pub trait EisensteinDriver: Send + Sync {
    /// Generate model output given a text request.
    async fn generate(&self, req: &GenerateRequest) -> EisensteinResult<GenerateResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Default model identifier (e.g., "gemini-2.0-flash-lite").
    fn model_name(&self) -> &str;
}
