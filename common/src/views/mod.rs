//! Response shapes for the admin list and detail pages.

use crate::model::application::Application;
use crate::model::course::Course;
use crate::model::question::Question;
use crate::model::section::TemplateSection;
use crate::model::template::ApplicationTemplate;
use serde::Serialize;

/// A derived count together with the filtered list it was counted from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountLink {
    pub count: i64,
    pub href: String,
}

/// One row of the course list.
#[derive(Debug, Clone, Serialize)]
pub struct CourseRow {
    #[serde(flatten)]
    pub course: Course,
    pub num_templates: CountLink,
    pub num_applications: CountLink,
}

/// Read-only line in the course page's template inline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateLink {
    pub id: i64,
    pub name: String,
    pub change_href: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CourseDetail {
    #[serde(flatten)]
    pub course: Course,
    pub num_templates: CountLink,
    pub num_applications: CountLink,
    pub templates: Vec<TemplateLink>,
}

/// One row of the template list.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateRow {
    #[serde(flatten)]
    pub template: ApplicationTemplate,
    pub num_applications: CountLink,
}

#[derive(Debug, Clone, Serialize)]
pub struct TemplateDetail {
    #[serde(flatten)]
    pub template: ApplicationTemplate,
    pub num_applications: CountLink,
    pub sections: Vec<TemplateSection>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionDetail {
    #[serde(flatten)]
    pub section: TemplateSection,
    /// Ordered by position.
    pub questions: Vec<Question>,
}

/// Applications are listed with the course they belong to, when the template still exists.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationRow {
    #[serde(flatten)]
    pub application: Application,
    pub course_code: Option<String>,
}
