//! Payloads accepted by the admin API.
//!
//! Drafts are loosely typed on purpose: they carry exactly what an operator typed
//! into a form. Turning a draft into a storable record goes through its `clean`
//! method in [`crate::validation`], which is the only path to the `New*` model types.

use serde::Deserialize;

/// Create a course (no `original_code`) or edit the course stored under
/// `original_code`. The code doubles as the key, so an edit may rename it.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseDraft {
    #[serde(default)]
    pub original_code: Option<String>,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Create (no `id`) or update (`id` set) an application template.
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateDraft {
    #[serde(default)]
    pub id: Option<i64>,
    pub course_code: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SectionDraft {
    #[serde(default)]
    pub id: Option<i64>,
    pub template_id: i64,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub help_html: String,
}

/// Create or update a question.
///
/// `question_type` stays a plain string until validation so that a misspelled
/// type is reported as a validation error instead of a malformed payload.
///
/// The vocabulary can arrive either as a list or as the raw contents of the
/// multi-line text box (`vocabulary_text`, one option per line). When both are
/// present the text box wins.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionDraft {
    #[serde(default)]
    pub id: Option<i64>,
    pub section_id: i64,
    pub label: String,
    pub question: String,
    pub position: i32,
    pub question_type: String,
    #[serde(default = "default_required")]
    pub required: bool,
    #[serde(default)]
    pub min_words: Option<i64>,
    #[serde(default)]
    pub vocabulary: Vec<String>,
    #[serde(default)]
    pub vocabulary_text: Option<String>,
    #[serde(default)]
    pub filetypes_allowed: Option<Vec<String>>,
}

fn default_required() -> bool {
    true
}

/// Record (no `id`) or re-file (`id` set) an application under a template.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ApplicationDraft {
    #[serde(default)]
    pub id: Option<i64>,
    pub template_id: i64,
}

/// The operator's selection for the "copy templates to a different course" action.
#[derive(Debug, Clone, Deserialize)]
pub struct CopyTemplatesRequest {
    pub ids: Vec<i64>,
}

/// `?course=<code>` filter on the template list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemplateFilter {
    pub course: Option<String>,
}

/// `?template=<id>` filter on the section list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SectionFilter {
    pub template: Option<i64>,
}

/// `?section=<id>` filter on the question list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionFilter {
    pub section: Option<i64>,
}

/// `?template=<id>` and/or `?course=<code>` filters on the application list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplicationFilter {
    pub template: Option<i64>,
    pub course: Option<String>,
}
