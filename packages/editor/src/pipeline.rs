//! # Editing Pipeline
//!
//! Coordinates the edit → render cycle: apply a mutation, regenerate HTML
//! and CSS, and report whether the output moved since the last render.

use crate::{Document, Mutation};
use bemforge_compiler_css::compile_to_css;
use bemforge_compiler_html::{compile_to_html_with, CompileOptions};
use serde::Serialize;
use tracing::debug;

/// Generated code for one document version
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedCode {
    pub html: String,
    pub css: String,
}

impl RenderedCode {
    pub fn render(document: &Document, options: &CompileOptions) -> Self {
        Self {
            html: compile_to_html_with(document.forest(), document.block_name(), options),
            css: compile_to_css(document.forest(), document.block_name()),
        }
    }
}

/// Manages the full edit → render pipeline
pub struct Pipeline {
    document: Document,
    options: CompileOptions,
    last_code: Option<RenderedCode>,
}

impl Pipeline {
    /// Create pipeline for document
    pub fn new(document: Document) -> Self {
        Self::with_options(document, CompileOptions::default())
    }

    pub fn with_options(document: Document, options: CompileOptions) -> Self {
        Self {
            document,
            options,
            last_code: None,
        }
    }

    /// Apply mutation and regenerate code
    pub fn apply_mutation(&mut self, mutation: Mutation) -> PipelineResult {
        let mutation_result = self.document.apply(mutation);
        let code = RenderedCode::render(&self.document, &self.options);
        let changed = self.last_code.as_ref() != Some(&code);

        debug!(version = mutation_result.version, changed, "Rendered document");
        self.last_code = Some(code.clone());

        PipelineResult {
            version: mutation_result.version,
            code,
            changed,
            selected_index: mutation_result.selected_index,
        }
    }

    /// Full re-render (initial render, or after editing the document directly)
    pub fn full_render(&mut self) -> RenderedCode {
        let code = RenderedCode::render(&self.document, &self.options);
        self.last_code = Some(code.clone());
        code
    }

    /// Get current document
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Get mutable document reference
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    /// Get last rendered code (if any)
    pub fn last_code(&self) -> Option<&RenderedCode> {
        self.last_code.as_ref()
    }

    /// Clear render cache (next mutation always reports a change)
    pub fn clear_cache(&mut self) {
        self.last_code = None;
    }
}

/// Result of pipeline execution
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineResult {
    /// New version number
    pub version: u64,

    pub code: RenderedCode,

    /// Whether `code` differs from the previous render
    pub changed: bool,

    pub selected_index: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use bemforge_model::ElementId;

    #[test]
    fn test_pipeline_initial_render() {
        let mut pipeline = Pipeline::new(Document::main());
        let code = pipeline.full_render();

        assert_eq!(code.html, r#"<div class="component">Main element</div>"#);
        assert_eq!(code.css, ".component {\n\n}\n\n");
        assert!(pipeline.last_code().is_some());
    }

    #[test]
    fn test_pipeline_reports_changes() {
        let mut pipeline = Pipeline::new(Document::main());
        pipeline.full_render();

        let result = pipeline.apply_mutation(Mutation::SetText {
            target: ElementId(1),
            text: "Hello".to_string(),
        });
        assert_eq!(result.version, 1);
        assert!(result.changed);
        assert!(result.code.html.contains(">Hello</div>"));

        let result = pipeline.apply_mutation(Mutation::SelectIndex { index: 0 });
        assert_eq!(result.version, 2);
        assert!(!result.changed);
    }

    #[test]
    fn test_pipeline_mutation_increments_version() {
        let mut pipeline = Pipeline::new(Document::main());

        let _ = pipeline.apply_mutation(Mutation::SetText {
            target: ElementId(123),
            text: "Hello".to_string(),
        });

        assert_eq!(pipeline.document().version, 1);
    }
}
