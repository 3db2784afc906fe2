//! A scripted mock driver for deterministic tests.
//!
//! Mirrors the real GeminiClient's surface without making network calls:
//! each invocation consumes the next scripted response and increments a
//! call counter.

use async_trait::async_trait;
use eisenstein_core::{GenerateRequest, GenerateResponse};
use eisenstein_error::{EisensteinResult, GeminiError, GeminiErrorKind};
use eisenstein_interface::EisensteinDriver;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// One scripted response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return this text as a successful generation
    Success(String),
    /// Fail with this Gemini error kind
    Error(GeminiErrorKind),
}

/// Mock text-generation driver with scripted behavior.
pub struct MockDriver {
    responses: Mutex<Vec<MockResponse>>,
    call_count: AtomicUsize,
}

#[allow(dead_code)]
impl MockDriver {
    /// Always answer with the same text.
    pub fn new_success(text: &str) -> Self {
        Self::new_sequence(vec![MockResponse::Success(text.to_string())])
    }

    /// Always fail with the given error kind.
    pub fn new_error(kind: GeminiErrorKind) -> Self {
        Self::new_sequence(vec![MockResponse::Error(kind)])
    }

    /// Answer from a scripted sequence; the final entry repeats once the
    /// script is exhausted.
    pub fn new_sequence(responses: Vec<MockResponse>) -> Self {
        assert!(!responses.is_empty(), "mock needs at least one response");
        Self {
            responses: Mutex::new(responses),
            call_count: AtomicUsize::new(0),
        }
    }

    /// Fail `failures` times with `kind`, then succeed with `text`.
    pub fn new_fail_then_succeed(failures: usize, kind: GeminiErrorKind, text: &str) -> Self {
        let mut responses = vec![MockResponse::Error(kind); failures];
        responses.push(MockResponse::Success(text.to_string()));
        Self::new_sequence(responses)
    }

    /// Number of generate calls made so far.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EisensteinDriver for MockDriver {
    async fn generate(&self, _req: &GenerateRequest) -> EisensteinResult<GenerateResponse> {
        let call = self.call_count.fetch_add(1, Ordering::SeqCst);
        let responses = self.responses.lock().unwrap();
        let response = responses
            .get(call)
            .unwrap_or_else(|| responses.last().expect("non-empty script"));
        match response {
            MockResponse::Success(text) => Ok(GenerateResponse::new(text.clone())),
            MockResponse::Error(kind) => Err(GeminiError::new(kind.clone()).into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock-gemini"
    }

    fn model_name(&self) -> &str {
        "mock-gemini"
    }
}
