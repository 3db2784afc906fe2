//! Registry materialization: full rebuilds and single-section updates.

use crate::artifact::{
    self, artifact_file_name, render_index, render_placeholder, BOOTSTRAP_FILE, INDEX_FILE,
};
use crate::extraction::extract_artifact;
use crate::manifest::{load_manifest, save_manifest};
use eisenstein_core::{GenerateRequest, Message, SectionOutline, SectionSpec};
use eisenstein_error::{EisensteinError, EisensteinResult, RegistryError, RegistryErrorKind};
use eisenstein_interface::EisensteinDriver;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// Materializes a section outline into on-disk artifacts and keeps the
/// registry module in sync with them.
///
/// All mutating operations take an internal lock, so concurrent callers
/// sharing one materializer queue rather than interleave writes. The write
/// order inside a rebuild is fixed: artifacts first, the registry module
/// next, the manifest last, so the registry never imports a file that does
/// not exist yet.
///
/// # Example
///
/// ```rust,ignore
/// use eisenstein_models::GeminiClient;
/// use eisenstein_registry::RegistryMaterializer;
///
/// let materializer = RegistryMaterializer::new(GeminiClient::new()?, "video/src/sections");
/// materializer.rebuild_all(&outline).await?;
/// materializer.update_section("Intro", "make the title bounce", true).await?;
/// ```
pub struct RegistryMaterializer<D: EisensteinDriver> {
    driver: D,
    sections_dir: PathBuf,
    model: Option<String>,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
    write_lock: Mutex<()>,
}

impl<D: EisensteinDriver> RegistryMaterializer<D> {
    /// Create a materializer rooted at the given sections directory.
    pub fn new(driver: D, sections_dir: impl Into<PathBuf>) -> Self {
        Self {
            driver,
            sections_dir: sections_dir.into(),
            model: None,
            temperature: None,
            max_tokens: None,
            write_lock: Mutex::new(()),
        }
    }

    /// Override the model for section generation requests.
    pub fn with_model(mut self, model: Option<String>) -> Self {
        self.model = model;
        self
    }

    /// Set the sampling temperature for section generation requests.
    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    /// Bound the response length for section generation requests.
    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// The directory that holds artifacts, the registry module, and the
    /// manifest.
    pub fn sections_dir(&self) -> &Path {
        &self.sections_dir
    }

    /// Load the current manifest.
    ///
    /// # Errors
    ///
    /// Returns an error if no manifest exists or it fails validation.
    pub async fn current(&self) -> EisensteinResult<SectionOutline> {
        let _guard = self.write_lock.lock().await;
        Ok(load_manifest(&self.sections_dir).await?)
    }

    /// Rebuild the whole registry from an outline.
    ///
    /// Wipes every artifact and the registry module (the bootstrap
    /// component `Main.tsx` is left alone), then writes one placeholder
    /// artifact per section, the registry module, and finally the
    /// manifest. Edited flags are cleared: after a rebuild every section
    /// is a placeholder again. Running it twice with the same outline
    /// produces byte-identical files.
    ///
    /// # Errors
    ///
    /// Before the wipe starts, failures leave the previous registry
    /// untouched. Once it has started, any failure is reported as
    /// [`RegistryErrorKind::Inconsistent`]: the artifacts on disk no
    /// longer match the manifest and a fresh rebuild is required.
    #[tracing::instrument(skip(self, outline), fields(sections = outline.len()))]
    pub async fn rebuild_all(&self, outline: &SectionOutline) -> EisensteinResult<()> {
        let _guard = self.write_lock.lock().await;

        // Every section reverts to a placeholder, so edited flags carried
        // in from a previous manifest are cleared.
        let mut outline = outline.clone();
        outline.reset_edited();
        let outline = &outline;

        tokio::fs::create_dir_all(&self.sections_dir)
            .await
            .map_err(|e| {
                RegistryError::new(RegistryErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    self.sections_dir.display(),
                    e
                )))
            })?;

        self.wipe().await?;

        // Past this point the old registry is gone; every failure leaves
        // partial state behind.
        for spec in outline.sections() {
            let path = self.sections_dir.join(artifact_file_name(spec.identifier()));
            write_atomic(&path, &render_placeholder(spec))
                .await
                .map_err(inconsistent)?;
            tracing::debug!(identifier = %spec.identifier(), "Wrote placeholder artifact");
        }

        let index_path = self.sections_dir.join(INDEX_FILE);
        write_atomic(&index_path, &render_index(outline))
            .await
            .map_err(inconsistent)?;

        save_manifest(&self.sections_dir, outline)
            .await
            .map_err(inconsistent)?;

        tracing::info!(
            sections = outline.len(),
            total_frames = outline.total_frames(),
            path = %self.sections_dir.display(),
            "Rebuilt section registry"
        );
        Ok(())
    }

    /// Regenerate a single section's artifact through the LLM.
    ///
    /// With `is_edit` set, the current artifact source is included in the
    /// prompt so the model revises it; otherwise the section is generated
    /// fresh from its description. Either way the manifest records the
    /// section as edited, and the registry module is not rewritten: the
    /// exported symbol names are stable, so its imports stay valid.
    ///
    /// Returns the updated section spec.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryErrorKind::SectionNotFound`] for an unknown
    /// identifier, and extraction errors when the response carries no
    /// usable code block; in both cases the previous artifact is left
    /// intact. No retry is attempted on service failure.
    #[tracing::instrument(skip(self, instruction), fields(provider = self.driver.provider_name()))]
    pub async fn update_section(
        &self,
        identifier: &str,
        instruction: &str,
        is_edit: bool,
    ) -> EisensteinResult<SectionSpec> {
        let _guard = self.write_lock.lock().await;

        let mut outline = load_manifest(&self.sections_dir).await?;
        let spec = outline
            .get(identifier)
            .cloned()
            .ok_or_else(|| {
                RegistryError::new(RegistryErrorKind::SectionNotFound(identifier.to_string()))
            })?;

        let artifact_path = self.sections_dir.join(artifact_file_name(identifier));
        let prompt = if is_edit {
            let current = tokio::fs::read_to_string(&artifact_path).await.map_err(|e| {
                RegistryError::new(RegistryErrorKind::FileRead(format!(
                    "{}: {}",
                    artifact_path.display(),
                    e
                )))
            })?;
            build_edit_prompt(&spec, &current, instruction)
        } else {
            build_generation_prompt(&spec, instruction)
        };

        let request = GenerateRequest::builder()
            .messages(vec![Message::user(prompt)])
            .model(self.model.clone())
            .temperature(self.temperature)
            .max_tokens(self.max_tokens)
            .build()
            .map_err(|e| {
                EisensteinError::from(eisenstein_error::ConfigError::new(format!(
                    "Failed to build section request: {}",
                    e
                )))
            })?;

        let response = self.driver.generate(&request).await?;
        let body = extract_artifact(response.text(), identifier)?;
        let text = artifact::finalize_edit(&body, &spec);

        write_atomic(&artifact_path, &text).await?;

        // The artifact on disk has changed; if the manifest cannot record
        // that, the two are out of step.
        let updated = match outline.get_mut(identifier) {
            Some(entry) => {
                entry.mark_edited();
                entry.clone()
            }
            None => spec,
        };
        save_manifest(&self.sections_dir, &outline)
            .await
            .map_err(inconsistent)?;

        tracing::info!(identifier, is_edit, "Updated section artifact");
        Ok(updated)
    }

    /// Delete every artifact, the registry module, the manifest, and any
    /// temp files left behind by an interrupted run.
    ///
    /// `Main.tsx` and unrelated files survive.
    async fn wipe(&self) -> Result<(), RegistryError> {
        let mut entries = tokio::fs::read_dir(&self.sections_dir).await.map_err(|e| {
            RegistryError::new(RegistryErrorKind::FileRead(format!(
                "{}: {}",
                self.sections_dir.display(),
                e
            )))
        })?;

        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(e) => return Err(inconsistent_io(&self.sections_dir, e)),
            };
            let path = entry.path();
            let name = entry.file_name();
            let name = name.to_string_lossy();

            let is_artifact = name.ends_with(".tsx") && name != BOOTSTRAP_FILE;
            let is_manifest = name == artifact::MANIFEST_FILE;
            // Orphaned temp files from an interrupted prior run
            let is_temp = name.ends_with(".tmp");
            if !is_artifact && !is_manifest && !is_temp {
                continue;
            }

            tokio::fs::remove_file(&path)
                .await
                .map_err(|e| inconsistent_io(&path, e))?;
            tracing::debug!(file = %name, "Removed stale registry file");
        }

        Ok(())
    }

    /// Access the underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }
}

/// Wrap a registry error as an inconsistency, preserving its message.
fn inconsistent(e: RegistryError) -> RegistryError {
    RegistryError::new(RegistryErrorKind::Inconsistent(e.kind.to_string()))
}

/// Wrap an io error during the wipe as an inconsistency.
fn inconsistent_io(path: &Path, e: std::io::Error) -> RegistryError {
    RegistryError::new(RegistryErrorKind::Inconsistent(format!(
        "{}: {}",
        path.display(),
        e
    )))
}

/// Write a file via temp file + rename for atomicity.
async fn write_atomic(path: &Path, text: &str) -> Result<(), RegistryError> {
    let temp_path = path.with_extension("tmp");

    tokio::fs::write(&temp_path, text).await.map_err(|e| {
        RegistryError::new(RegistryErrorKind::FileWrite(format!(
            "{}: {}",
            temp_path.display(),
            e
        )))
    })?;

    tokio::fs::rename(&temp_path, path).await.map_err(|e| {
        RegistryError::new(RegistryErrorKind::FileWrite(format!(
            "rename {} to {}: {}",
            temp_path.display(),
            path.display(),
            e
        )))
    })
}

/// Build the prompt for generating a section from scratch.
fn build_generation_prompt(spec: &SectionSpec, instruction: &str) -> String {
    let mut prompt = format!(
        "You are writing one React component for a Remotion video. \
         Respond with only a single fenced code block containing the \
         complete TSX source, and no other text. Keep exactly these \
         exports: a component `export const {id}: React.FC`, a constant \
         `export const {duration} = {frames};`, and a constant \
         `export const {edited} = true;`. Import only from \"react\" and \
         \"remotion\", style with Tailwind classes, and use only text and \
         animation. The section is titled \"{title}\" and should depict: \
         {description}",
        id = spec.identifier(),
        duration = artifact::duration_symbol(spec.identifier()),
        frames = spec.duration_frames(),
        edited = artifact::edited_symbol(spec.identifier()),
        title = spec.title(),
        description = spec.description(),
    );
    if !instruction.trim().is_empty() {
        prompt.push_str(&format!("\n\nAdditional instruction: {}", instruction));
    }
    prompt
}

/// Build the prompt for revising an existing artifact.
fn build_edit_prompt(spec: &SectionSpec, current: &str, instruction: &str) -> String {
    format!(
        "You are revising one React component for a Remotion video. \
         Respond with only a single fenced code block containing the \
         complete revised TSX source, and no other text. Keep the \
         existing export names unchanged. The current source is:\n\n\
         ```tsx\n{current}\n```\n\n\
         Revise the \"{title}\" section as follows: {instruction}",
        title = spec.title(),
    )
}
