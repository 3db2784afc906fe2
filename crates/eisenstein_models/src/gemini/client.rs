//! Google Gemini API implementation.
//!
//! This module provides a client for the Google Gemini API with support for
//! per-request model selection: different requests can use different models,
//! while the client carries a default for requests that do not specify one.
//!
//! # Example
//!
//! ```no_run
//! use eisenstein_models::GeminiClient;
//! use eisenstein_core::{GenerateRequest, Message};
//! use eisenstein_interface::EisensteinDriver;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new()?;
//!
//! // Use the default model
//! let request = GenerateRequest::builder()
//!     .messages(vec![Message::user("Hello")])
//!     .build()?;
//! let response = client.generate(&request).await?;
//!
//! // Override to use a different model
//! let request = GenerateRequest::builder()
//!     .messages(vec![Message::user("Complex task")])
//!     .model(Some("gemini-2.5-flash".to_string()))
//!     .build()?;
//! let response = client.generate(&request).await?;
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use std::env;
use std::time::Duration;
use tracing::instrument;

use gemini_rust::{Gemini, client::Model};

use eisenstein_core::{GenerateRequest, GenerateResponse, Role};
use eisenstein_error::{EisensteinResult, GeminiError, GeminiErrorKind};
use eisenstein_interface::EisensteinDriver;

use super::GeminiResult;

/// Default model when a request does not specify one.
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Default bound on a single generation call, in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Client for the Google Gemini API.
///
/// Holds the API key and a default model name; the underlying
/// `gemini-rust` client is constructed per call so each request can
/// target its own model. Every call is bounded by a timeout, and a
/// timeout surfaces as an ordinary request failure.
pub struct GeminiClient {
    /// API key for the Gemini API
    api_key: String,
    /// Default model name when `req.model` is None
    model_name: String,
    /// Upper bound on a single generation call
    timeout_secs: u64,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model_name", &self.model_name)
            .field("timeout_secs", &self.timeout_secs)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a new Gemini client with the default model.
    ///
    /// Reads the API key from the `GEMINI_API_KEY` environment variable.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use eisenstein_models::GeminiClient;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = GeminiClient::new()?;
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(name = "gemini_client_new")]
    pub fn new() -> EisensteinResult<Self> {
        Self::new_internal(DEFAULT_MODEL).map_err(Into::into)
    }

    /// Create a new Gemini client with a specific default model.
    ///
    /// Reads the API key from the `GEMINI_API_KEY` environment variable.
    #[instrument(name = "gemini_client_new_with_model")]
    pub fn new_with_model(model: &str) -> EisensteinResult<Self> {
        Self::new_internal(model).map_err(Into::into)
    }

    /// Override the per-call timeout.
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Internal constructor that returns Gemini-specific errors.
    fn new_internal(model: &str) -> GeminiResult<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;

        Ok(Self {
            api_key,
            model_name: model.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        })
    }

    /// Convert a model name string to a gemini-rust Model enum variant.
    ///
    /// Maps common model name strings to their corresponding Model enum
    /// variants. Uses Model::Custom for unrecognized model names,
    /// automatically adding the "models/" prefix required by the API.
    fn model_name_to_enum(name: &str) -> Model {
        match name {
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-2.5-flash-lite" => Model::Gemini25FlashLite,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            other => {
                if other.starts_with("models/") {
                    Model::Custom(other.to_string())
                } else {
                    Model::Custom(format!("models/{}", other))
                }
            }
        }
    }

    /// Internal generate method that returns Gemini-specific errors.
    async fn generate_internal(&self, req: &GenerateRequest) -> GeminiResult<GenerateResponse> {
        let model_name = req.model().as_deref().unwrap_or(&self.model_name);
        let model_enum = Self::model_name_to_enum(model_name);

        let client = Gemini::with_model(&self.api_key, model_enum)
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        let mut builder = client.generate_content();
        let mut system_prompt = None;

        for msg in req.messages() {
            match msg.role {
                Role::System => {
                    // Gemini uses a separate system prompt
                    system_prompt = Some(msg.content.clone());
                }
                Role::User => {
                    builder = builder.with_user_message(&msg.content);
                }
                Role::Assistant => {
                    builder = builder.with_model_message(&msg.content);
                }
            }
        }

        if let Some(prompt) = system_prompt {
            builder = builder.with_system_prompt(&prompt);
        }

        if let Some(temp) = req.temperature() {
            builder = builder.with_temperature(*temp);
        }

        if let Some(max_tok) = req.max_tokens() {
            builder = builder.with_max_output_tokens(*max_tok as i32);
        }

        let response = tokio::time::timeout(
            Duration::from_secs(self.timeout_secs),
            builder.execute(),
        )
        .await
        .map_err(|_| GeminiError::new(GeminiErrorKind::Timeout(self.timeout_secs)))?
        .map_err(Self::parse_gemini_error)?;

        let text = response.text();
        if text.trim().is_empty() {
            return Err(GeminiError::new(GeminiErrorKind::EmptyResponse));
        }

        Ok(GenerateResponse::new(text))
    }

    /// Parse gemini-rust errors to extract HTTP status codes.
    ///
    /// Converts generic API error strings into structured GeminiError
    /// with HTTP status codes when available.
    fn parse_gemini_error(err: impl std::fmt::Display) -> GeminiError {
        let err_msg = err.to_string();

        // Example: "bad response from server; code 503; description: ..."
        if let Some(status_code) = Self::extract_status_code(&err_msg) {
            GeminiError::new(GeminiErrorKind::HttpError {
                status_code,
                message: err_msg,
            })
        } else {
            GeminiError::new(GeminiErrorKind::ApiRequest(err_msg))
        }
    }

    /// Extract an HTTP status code from an error message string.
    fn extract_status_code(error_msg: &str) -> Option<u16> {
        if let Some(code_start) = error_msg.find("code ") {
            let code_str = &error_msg[code_start + 5..];
            if let Some(end) = code_str.find(|c: char| !c.is_numeric()) {
                return code_str[..end].parse().ok();
            }
        }
        None
    }
}

#[async_trait]
impl EisensteinDriver for GeminiClient {
    async fn generate(&self, req: &GenerateRequest) -> EisensteinResult<GenerateResponse> {
        self.generate_internal(req).await.map_err(Into::into)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    /// Returns the default model name used when `GenerateRequest.model` is None.
    fn model_name(&self) -> &str {
        &self.model_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_status_code_from_api_error() {
        let msg = "bad response from server; code 503; description: overloaded";
        assert_eq!(GeminiClient::extract_status_code(msg), Some(503));
    }

    #[test]
    fn no_status_code_in_plain_error() {
        assert_eq!(GeminiClient::extract_status_code("connection refused"), None);
    }

    #[test]
    fn custom_models_get_prefix() {
        match GeminiClient::model_name_to_enum("gemini-2.0-flash") {
            Model::Custom(name) => assert_eq!(name, "models/gemini-2.0-flash"),
            _ => panic!("expected Custom variant"),
        }
    }

    #[test]
    fn prefixed_names_are_preserved() {
        match GeminiClient::model_name_to_enum("models/gemini-2.0-flash") {
            Model::Custom(name) => assert_eq!(name, "models/gemini-2.0-flash"),
            _ => panic!("expected Custom variant"),
        }
    }
}
