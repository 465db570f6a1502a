use serde::{Deserialize, Serialize};

/// A named group of questions inside an application template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSection {
    pub id: i64,
    pub template_id: i64,
    pub code: String,
    pub name: String,
    /// Rich help text shown above the section's questions.
    pub help_html: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSection {
    pub template_id: i64,
    pub code: String,
    pub name: String,
    pub help_html: String,
}

impl NewSection {
    pub fn with_id(self, id: i64) -> TemplateSection {
        TemplateSection {
            id,
            template_id: self.template_id,
            code: self.code,
            name: self.name,
            help_html: self.help_html,
        }
    }
}
