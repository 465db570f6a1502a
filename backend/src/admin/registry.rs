//! Admin registry.
//!
//! One `ModelAdmin` per entity, describing how the admin shell lists and edits it.
//! The registry is assembled in [`AdminRegistry::build`] when the process starts,
//! handed to actix as `web::Data`, and never mutated afterwards.

use common::model::question::QuestionType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Course,
    ApplicationTemplate,
    ApplicationTemplateSection,
    Question,
    Application,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InlineStyle {
    /// One row per child, columns side by side.
    Tabular,
    /// One full form per child.
    Stacked,
}

/// Child records edited from the parent's page.
#[derive(Debug, Clone, Serialize)]
pub struct InlineAdmin {
    pub model: EntityKind,
    pub style: InlineStyle,
    pub fields: Vec<&'static str>,
    pub readonly_fields: Vec<&'static str>,
    /// Blank forms offered beyond the existing children.
    pub extra: usize,
    pub can_add: bool,
    pub can_delete: bool,
    pub show_change_link: bool,
}

impl InlineAdmin {
    pub fn new(model: EntityKind, style: InlineStyle) -> Self {
        Self {
            model,
            style,
            fields: Vec::new(),
            readonly_fields: Vec::new(),
            extra: 0,
            can_add: true,
            can_delete: true,
            show_change_link: false,
        }
    }

    pub fn fields(mut self, fields: &[&'static str]) -> Self {
        self.fields = fields.to_vec();
        self
    }

    pub fn readonly_fields(mut self, fields: &[&'static str]) -> Self {
        self.readonly_fields = fields.to_vec();
        self
    }

    /// Children are listed and linked but cannot be added or removed here.
    pub fn read_only_links(mut self) -> Self {
        self.can_add = false;
        self.can_delete = false;
        self.show_change_link = true;
        self
    }
}

/// A bulk action offered on the entity's list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdminAction {
    pub name: &'static str,
    pub description: &'static str,
    pub endpoint: &'static str,
}

pub const COPY_TEMPLATES: AdminAction = AdminAction {
    name: "copy_templates",
    description: "Copy templates to a different course",
    endpoint: "/api/templates/actions/copy",
};

/// One option of a choice field: the stored token and what the operator sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldChoices {
    pub field: &'static str,
    pub options: Vec<Choice>,
}

fn question_type_choices() -> Vec<Choice> {
    QuestionType::ALL
        .into_iter()
        .map(|qt| Choice {
            value: qt.as_str(),
            label: qt.label(),
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelAdmin {
    pub model: EntityKind,
    pub fields: Vec<&'static str>,
    pub list_display: Vec<&'static str>,
    pub list_display_links: Vec<&'static str>,
    pub list_filter: Vec<&'static str>,
    pub readonly_fields: Vec<&'static str>,
    pub choices: Vec<FieldChoices>,
    pub inlines: Vec<InlineAdmin>,
    pub actions: Vec<AdminAction>,
}

impl ModelAdmin {
    pub fn new(model: EntityKind) -> Self {
        Self {
            model,
            fields: Vec::new(),
            list_display: Vec::new(),
            list_display_links: Vec::new(),
            list_filter: Vec::new(),
            readonly_fields: Vec::new(),
            choices: Vec::new(),
            inlines: Vec::new(),
            actions: Vec::new(),
        }
    }

    pub fn fields(mut self, fields: &[&'static str]) -> Self {
        self.fields = fields.to_vec();
        self
    }

    pub fn list_display(mut self, fields: &[&'static str]) -> Self {
        self.list_display = fields.to_vec();
        self
    }

    pub fn list_display_links(mut self, fields: &[&'static str]) -> Self {
        self.list_display_links = fields.to_vec();
        self
    }

    pub fn list_filter(mut self, fields: &[&'static str]) -> Self {
        self.list_filter = fields.to_vec();
        self
    }

    pub fn readonly_fields(mut self, fields: &[&'static str]) -> Self {
        self.readonly_fields = fields.to_vec();
        self
    }

    pub fn choices(mut self, field: &'static str, options: Vec<Choice>) -> Self {
        self.choices.push(FieldChoices { field, options });
        self
    }

    pub fn inline(mut self, inline: InlineAdmin) -> Self {
        self.inlines.push(inline);
        self
    }

    pub fn action(mut self, action: AdminAction) -> Self {
        self.actions.push(action);
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminRegistry {
    entries: Vec<ModelAdmin>,
}

impl AdminRegistry {
    pub fn build() -> Self {
        let course = ModelAdmin::new(EntityKind::Course)
            .fields(&["code", "name", "description", "num_templates", "num_applications"])
            .list_display(&["code", "name", "num_templates", "num_applications"])
            .list_display_links(&["code", "name"])
            .readonly_fields(&["num_templates", "num_applications"])
            .inline(
                InlineAdmin::new(EntityKind::ApplicationTemplate, InlineStyle::Tabular)
                    .fields(&["name"])
                    .readonly_fields(&["name"])
                    .read_only_links(),
            );

        let template = ModelAdmin::new(EntityKind::ApplicationTemplate)
            .fields(&["course", "name", "description", "num_applications"])
            .list_display(&["id", "name", "course", "description", "num_applications"])
            .list_display_links(&["id", "name"])
            .list_filter(&["course"])
            .readonly_fields(&["num_applications"])
            .inline(InlineAdmin::new(
                EntityKind::ApplicationTemplateSection,
                InlineStyle::Stacked,
            ))
            .action(COPY_TEMPLATES);

        let section = ModelAdmin::new(EntityKind::ApplicationTemplateSection)
            .fields(&["template", "code", "name", "help_html"])
            .list_display(&["code", "name", "template"])
            .list_display_links(&["code", "name"])
            .list_filter(&["template"])
            .inline(InlineAdmin::new(EntityKind::Question, InlineStyle::Stacked));

        let question = ModelAdmin::new(EntityKind::Question)
            .fields(&[
                "section",
                "label",
                "question",
                "position",
                "question_type",
                "required",
                "min_words",
                "vocabulary",
                "filetypes_allowed",
            ])
            .list_display(&["label", "question", "section", "position", "question_type"])
            .list_display_links(&["label"])
            .list_filter(&["section"])
            .choices("question_type", question_type_choices());

        let application = ModelAdmin::new(EntityKind::Application)
            .fields(&["template"])
            .list_display(&["id", "template"])
            .list_display_links(&["id"])
            .list_filter(&["template", "course"]);

        Self {
            entries: vec![course, template, section, question, application],
        }
    }

    pub fn get(&self, model: EntityKind) -> Option<&ModelAdmin> {
        self.entries.iter().find(|entry| entry.model == model)
    }

    pub fn entries(&self) -> &[ModelAdmin] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entity_is_registered_once() {
        let registry = AdminRegistry::build();
        for kind in [
            EntityKind::Course,
            EntityKind::ApplicationTemplate,
            EntityKind::ApplicationTemplateSection,
            EntityKind::Question,
            EntityKind::Application,
        ] {
            let count = registry.entries().iter().filter(|e| e.model == kind).count();
            assert_eq!(count, 1, "{:?}", kind);
        }
    }

    #[test]
    fn course_page_lists_templates_without_add_or_delete() {
        let registry = AdminRegistry::build();
        let course = registry.get(EntityKind::Course).unwrap();
        let inline = &course.inlines[0];
        assert_eq!(inline.model, EntityKind::ApplicationTemplate);
        assert!(!inline.can_add);
        assert!(!inline.can_delete);
        assert!(inline.show_change_link);
        assert_eq!(inline.extra, 0);
    }

    #[test]
    fn template_section_inline_stays_editable() {
        let registry = AdminRegistry::build();
        let template = registry.get(EntityKind::ApplicationTemplate).unwrap();
        assert!(template.inlines[0].can_add);
        assert!(template.inlines[0].can_delete);
        assert_eq!(template.actions, vec![COPY_TEMPLATES]);
    }

    #[test]
    fn counts_are_read_only() {
        let registry = AdminRegistry::build();
        let course = registry.get(EntityKind::Course).unwrap();
        assert_eq!(course.readonly_fields, vec!["num_templates", "num_applications"]);
    }

    #[test]
    fn question_type_choices_pair_tokens_with_labels() {
        let registry = AdminRegistry::build();
        let question = registry.get(EntityKind::Question).unwrap();
        assert_eq!(question.choices[0].field, "question_type");
        let options = &question.choices[0].options;
        assert_eq!(options.len(), 5);
        assert!(options.contains(&Choice {
            value: "multiselect",
            label: "Select-Multiple"
        }));
    }

    #[test]
    fn registry_serializes_kinds_in_snake_case() {
        let json = serde_json::to_value(AdminRegistry::build()).unwrap();
        assert_eq!(json["entries"][2]["model"], "application_template_section");
    }
}
