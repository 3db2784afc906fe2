//! Outline request construction and response extraction.

use crate::parse_outline;
use eisenstein_core::{GenerateRequest, Message, SectionOutline};
use eisenstein_error::{EisensteinError, EisensteinResult, OutlineError, OutlineErrorKind};
use eisenstein_interface::EisensteinDriver;

/// Default frame rate embedded in the outline prompt.
const DEFAULT_FPS: u32 = 30;

/// Turns a free-text video idea into one outline prompt and extracts the
/// raw response text.
///
/// The requester does not validate the response format; that is
/// [`parse_outline`]'s job. On service failure the error propagates to
/// the caller unchanged, with no retry.
///
/// # Example
///
/// ```rust,ignore
/// use eisenstein_models::GeminiClient;
/// use eisenstein_outline::OutlineRequester;
///
/// let requester = OutlineRequester::new(GeminiClient::new()?).with_fps(30);
/// let outline = requester.fetch_outline("a 2-part video about cats").await?;
/// ```
pub struct OutlineRequester<D: EisensteinDriver> {
    driver: D,
    fps: u32,
    model: Option<String>,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
}

impl<D: EisensteinDriver> OutlineRequester<D> {
    /// Create a new requester around the given driver.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            fps: DEFAULT_FPS,
            model: None,
            temperature: None,
            max_tokens: None,
        }
    }

    /// Set the frame rate embedded in the prompt.
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    /// Override the model for outline requests.
    pub fn with_model(mut self, model: Option<String>) -> Self {
        self.model = model;
        self
    }

    /// Set the sampling temperature for outline requests.
    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    /// Bound the response length for outline requests.
    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Request an outline for the given video idea, returning the raw
    /// response text.
    ///
    /// # Errors
    ///
    /// Returns an error if the idea is empty or the generation call
    /// fails. The response text is returned unvalidated.
    #[tracing::instrument(skip(self, idea), fields(provider = self.driver.provider_name()))]
    pub async fn request_outline(&self, idea: &str) -> EisensteinResult<String> {
        if idea.trim().is_empty() {
            return Err(EisensteinError::from(OutlineError::new(
                OutlineErrorKind::EmptyIdea,
            )));
        }

        let prompt = self.build_prompt(idea);
        let request = GenerateRequest::builder()
            .messages(vec![Message::user(prompt)])
            .model(self.model.clone())
            .temperature(self.temperature)
            .max_tokens(self.max_tokens)
            .build()
            .map_err(|e| {
                EisensteinError::from(eisenstein_error::ConfigError::new(format!(
                    "Failed to build outline request: {}",
                    e
                )))
            })?;

        let response = self.driver.generate(&request).await?;

        tracing::debug!(
            response_length = response.text().len(),
            "Received outline response"
        );

        Ok(response.into_text())
    }

    /// Request and parse an outline in one step.
    ///
    /// # Errors
    ///
    /// Propagates request failures and parse failures distinctly; a
    /// malformed response never yields a partial outline.
    #[tracing::instrument(skip(self, idea))]
    pub async fn fetch_outline(&self, idea: &str) -> EisensteinResult<SectionOutline> {
        let raw = self.request_outline(idea).await?;
        let outline = parse_outline(&raw)?;

        tracing::info!(
            section_count = outline.len(),
            total_frames = outline.total_frames(),
            "Fetched outline"
        );

        Ok(outline)
    }

    /// Build the outline prompt for a video idea.
    ///
    /// The format instruction pins the delimited grammar the parser
    /// expects; the frame rate is stated so durations come back in
    /// frames rather than seconds.
    fn build_prompt(&self, idea: &str) -> String {
        format!(
            "You are creating the structure for a short animated video. \
             Respond with a single line in exactly this format: \
             Name & Duration & Description | Name & Duration & Description. \
             The first field is the section name, the second is the section \
             duration in frames at {fps} fps, and the third is a thorough \
             description of that part of the video using only text and \
             animation. Most videos have more than two sections. Do not \
             include any other text or explanation. The video is about: {idea}",
            fps = self.fps,
            idea = idea
        )
    }

    /// Access the underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }
}
