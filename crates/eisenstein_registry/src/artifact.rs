//! Deterministic rendering of section artifacts and the registry module.
//!
//! Everything in this module is a pure function from the section data model
//! to file text. Keeping rendering side-effect free is what makes rebuilds
//! idempotent: the same outline always produces byte-identical output.

use eisenstein_core::{SectionOutline, SectionSpec};

/// File name of the aggregate registry module.
pub const INDEX_FILE: &str = "index.tsx";

/// File name of the persisted section manifest.
pub const MANIFEST_FILE: &str = "registry.json";

/// File name of the protected bootstrap component, never wiped or rewritten.
pub const BOOTSTRAP_FILE: &str = "Main.tsx";

/// File name of a section's artifact, e.g. `Intro.tsx`.
pub fn artifact_file_name(identifier: &str) -> String {
    format!("{identifier}.tsx")
}

/// Exported symbol carrying a section's duration, e.g. `Intro_Duration`.
pub fn duration_symbol(identifier: &str) -> String {
    format!("{identifier}_Duration")
}

/// Exported symbol carrying a section's edited flag, e.g. `Intro_Edited`.
pub fn edited_symbol(identifier: &str) -> String {
    format!("{identifier}_Edited")
}

/// Render a string as a JSX expression containing a JS string literal.
///
/// Titles and descriptions come from LLM output and may contain quotes,
/// braces, or backslashes, so they are embedded as escaped literals rather
/// than raw JSX text.
fn jsx_literal(text: &str) -> String {
    let literal = serde_json::Value::String(text.to_string());
    format!("{{{literal}}}")
}

/// Render the placeholder artifact for a section.
///
/// The placeholder displays the section's title and description and exports
/// the three symbols the registry module imports: the component, the
/// duration constant, and the edited flag.
///
/// # Examples
///
/// ```
/// use eisenstein_core::SectionSpec;
/// use eisenstein_registry::render_placeholder;
///
/// let spec = SectionSpec::new("Intro", "Intro", 90, "A cat appears on screen");
/// let text = render_placeholder(&spec);
/// assert!(text.contains("export const Intro: React.FC"));
/// assert!(text.contains("export const Intro_Duration = 90;"));
/// assert!(text.contains("export const Intro_Edited = false;"));
/// ```
pub fn render_placeholder(spec: &SectionSpec) -> String {
    let id = spec.identifier();
    format!(
        "import React from \"react\";\n\
         import {{ AbsoluteFill }} from \"remotion\";\n\
         \n\
         export const {id}: React.FC = () => {{\n\
         \x20 return (\n\
         \x20   <AbsoluteFill className=\"items-center justify-center bg-gray-100 text-gray-900\">\n\
         \x20     <h1 className=\"text-5xl font-bold\">{title}</h1>\n\
         \x20     <p className=\"mt-4 max-w-2xl text-center text-xl\">{description}</p>\n\
         \x20   </AbsoluteFill>\n\
         \x20 );\n\
         }};\n\
         \n\
         export const {duration} = {frames};\n\
         export const {edited} = {flag};\n",
        title = jsx_literal(spec.title()),
        description = jsx_literal(spec.description()),
        duration = duration_symbol(id),
        frames = spec.duration_frames(),
        edited = edited_symbol(id),
        flag = spec.edited(),
    )
}

/// Render the aggregate registry module from an outline.
///
/// The module imports the component, duration, and edited symbols from every
/// artifact in outline order, exports the ordered `sections` list as both a
/// named and default export, and exports `TOTAL_DURATION` as the sum of all
/// section durations.
pub fn render_index(outline: &SectionOutline) -> String {
    let mut out = String::from("import React from \"react\";\n");

    for spec in outline.sections() {
        let id = spec.identifier();
        out.push_str(&format!(
            "import {{ {id}, {duration}, {edited} }} from \"./{id}\";\n",
            duration = duration_symbol(id),
            edited = edited_symbol(id),
        ));
    }

    out.push_str("\nexport interface SectionEntry {\n");
    out.push_str("  id: string;\n");
    out.push_str("  component: React.FC;\n");
    out.push_str("  durationInFrames: number;\n");
    out.push_str("  edited: boolean;\n");
    out.push_str("}\n\n");

    out.push_str("export const sections: SectionEntry[] = [\n");
    for spec in outline.sections() {
        let id = spec.identifier();
        out.push_str(&format!(
            "  {{ id: \"{id}\", component: {id}, durationInFrames: {duration}, edited: {edited} }},\n",
            duration = duration_symbol(id),
            edited = edited_symbol(id),
        ));
    }
    out.push_str("];\n\n");

    out.push_str(&format!(
        "export const TOTAL_DURATION = {};\n\nexport default sections;\n",
        outline.total_frames()
    ));

    out
}

/// Normalize an edited artifact body before it is written.
///
/// The LLM is told to keep the exported symbol names, but the registry
/// module breaks if it forgets, so the contract is enforced here: a stale
/// `false` edited flag is flipped to `true`, and missing duration or edited
/// exports are appended from the section data.
///
/// The flip only applies to a line that is exactly the stale export, so
/// mentions of the export inside string literals or comments are left
/// alone.
pub fn finalize_edit(body: &str, spec: &SectionSpec) -> String {
    let id = spec.identifier();
    let duration = duration_symbol(id);
    let edited = edited_symbol(id);

    let stale = format!("export const {edited} = false;");
    let fresh = format!("export const {edited} = true;");
    let mut out = body
        .trim_end()
        .lines()
        .map(|line| if line.trim() == stale { fresh.as_str() } else { line })
        .collect::<Vec<_>>()
        .join("\n");
    out.push('\n');

    if !out.contains(&format!("export const {duration}")) {
        out.push_str(&format!(
            "\nexport const {duration} = {};\n",
            spec.duration_frames()
        ));
    }
    if !out.contains(&format!("export const {edited}")) {
        out.push_str(&format!("\nexport const {edited} = true;\n"));
    }

    out
}
