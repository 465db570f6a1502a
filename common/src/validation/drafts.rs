use super::fields::{self, in_range, max_len, required, slug};
use super::vocabulary::{check_vocabulary, normalize_vocabulary, parse_vocabulary_text};
use super::ValidationError;
use crate::model::course::Course;
use crate::model::question::{NewQuestion, QuestionType, UnknownQuestionType, DEFAULT_FILETYPES};
use crate::model::section::NewSection;
use crate::model::template::NewTemplate;
use crate::requests::{CourseDraft, QuestionDraft, SectionDraft, TemplateDraft};

impl CourseDraft {
    pub fn clean(self) -> Result<Course, ValidationError> {
        let code = slug("code", &self.code, fields::COURSE_CODE_MAX)?;
        let name = required("name", &self.name)?;
        max_len("name", &name, fields::COURSE_NAME_MAX)?;
        Ok(Course {
            code,
            name,
            description: self.description,
        })
    }
}

impl TemplateDraft {
    pub fn clean(self) -> Result<NewTemplate, ValidationError> {
        let course_code = slug("course_code", &self.course_code, fields::COURSE_CODE_MAX)?;
        let name = required("name", &self.name)?;
        max_len("name", &name, fields::TEMPLATE_NAME_MAX)?;
        Ok(NewTemplate {
            course_code,
            name,
            description: self.description,
        })
    }
}

impl SectionDraft {
    pub fn clean(self) -> Result<NewSection, ValidationError> {
        let code = slug("code", &self.code, fields::SECTION_CODE_MAX)?;
        let name = required("name", &self.name)?;
        max_len("name", &name, fields::SECTION_NAME_MAX)?;
        if self.help_html.trim().is_empty() {
            return Err(ValidationError::Required { field: "help_html" });
        }
        Ok(NewSection {
            template_id: self.template_id,
            code,
            name,
            help_html: self.help_html,
        })
    }
}

impl QuestionDraft {
    pub fn clean(self) -> Result<NewQuestion, ValidationError> {
        let label = required("label", &self.label)?;
        max_len("label", &label, fields::QUESTION_LABEL_MAX)?;
        let question = required("question", &self.question)?;
        max_len("question", &question, fields::QUESTION_TEXT_MAX)?;

        let question_type: QuestionType = self
            .question_type
            .parse()
            .map_err(|UnknownQuestionType(token)| ValidationError::UnknownQuestionType(token))?;

        let min_words = match self.min_words {
            Some(n) => Some(in_range("min_words", n, 0, fields::MIN_WORDS_MAX)? as u16),
            None => None,
        };

        let vocabulary = match &self.vocabulary_text {
            Some(raw) => {
                let entries = parse_vocabulary_text(raw);
                for entry in &entries {
                    max_len("vocabulary_text", entry, fields::VOCABULARY_TEXT_ENTRY_MAX)?;
                }
                entries
            }
            None => normalize_vocabulary(&self.vocabulary),
        };
        if vocabulary.iter().any(|entry| entry.trim().is_empty()) {
            return Err(ValidationError::Required { field: "vocabulary" });
        }
        check_vocabulary(question_type, &vocabulary)?;

        let filetypes_allowed = match self.filetypes_allowed {
            Some(list) => {
                let mut cleaned = Vec::with_capacity(list.len());
                for ext in &list {
                    let ext = required("filetypes_allowed", ext)?;
                    max_len("filetypes_allowed", &ext, fields::FILETYPE_MAX)?;
                    cleaned.push(ext);
                }
                cleaned
            }
            None => DEFAULT_FILETYPES.iter().map(|s| s.to_string()).collect(),
        };

        Ok(NewQuestion {
            section_id: self.section_id,
            label,
            question,
            position: self.position,
            question_type,
            required: self.required,
            min_words,
            vocabulary,
            filetypes_allowed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn draft(question_type: &str, vocabulary: &[&str]) -> QuestionDraft {
        QuestionDraft {
            id: None,
            section_id: 1,
            label: "color".to_string(),
            question: "Favorite color?".to_string(),
            position: 1,
            question_type: question_type.to_string(),
            required: true,
            min_words: None,
            vocabulary: vocabulary.iter().map(|s| s.to_string()).collect(),
            vocabulary_text: None,
            filetypes_allowed: None,
        }
    }

    #[test]
    fn select_without_vocabulary_is_rejected() {
        assert_eq!(draft("select", &[]).clean(), Err(ValidationError::MissingVocabulary));
    }

    #[test]
    fn text_with_vocabulary_is_rejected() {
        assert_eq!(draft("text", &["x"]).clean(), Err(ValidationError::UnexpectedVocabulary));
    }

    #[test]
    fn select_with_vocabulary_is_accepted() {
        let q = draft("select", &["A", "B"]).clean().unwrap();
        assert_eq!(q.question_type, QuestionType::Select);
        assert_eq!(q.vocabulary, vec!["A", "B"]);
    }

    #[test]
    fn boolean_without_vocabulary_is_accepted() {
        let q = draft("boolean", &[]).clean().unwrap();
        assert_eq!(q.question_type, QuestionType::Boolean);
        assert!(q.vocabulary.is_empty());
    }

    #[rstest]
    #[case("boolean", false)]
    #[case("text", false)]
    #[case("select", true)]
    #[case("multiselect", true)]
    #[case("file", false)]
    fn vocabulary_required_exactly_for_select_types(
        #[case] token: &str,
        #[case] needs_vocab: bool,
    ) {
        assert_eq!(draft(token, &[]).clean().is_ok(), !needs_vocab);
        assert_eq!(draft(token, &["Yes", "No"]).clean().is_ok(), needs_vocab);
    }

    #[rstest]
    #[case("Select")]
    #[case("Select-Multiple")]
    fn capitalized_labels_are_not_question_types(#[case] token: &str) {
        assert_eq!(
            draft(token, &["A"]).clean(),
            Err(ValidationError::UnknownQuestionType(token.to_string()))
        );
    }

    #[test]
    fn vocabulary_entries_are_normalized_before_storage() {
        let q = draft("multiselect", &["Red\n", "Blue\n", "Green\n"]).clean().unwrap();
        assert_eq!(q.vocabulary, vec!["Red", "Blue", "Green"]);
    }

    #[test]
    fn text_box_takes_precedence_over_list() {
        let mut d = draft("select", &["ignored"]);
        d.vocabulary_text = Some("Red\n\nBlue\n\nGreen\n".to_string());
        assert_eq!(d.clean().unwrap().vocabulary, vec!["Red", "Blue", "Green"]);
    }

    #[test]
    fn text_box_options_are_capped_at_fifty_characters() {
        let mut d = draft("select", &[]);
        d.vocabulary_text = Some(format!("Red\n{}\n", "b".repeat(50)));
        assert_eq!(d.clone().clean().unwrap().vocabulary.len(), 2);

        d.vocabulary_text = Some(format!("Red\n{}\n", "b".repeat(51)));
        assert!(matches!(
            d.clean(),
            Err(ValidationError::TooLong { field: "vocabulary_text", max: 50, .. })
        ));
    }

    #[test]
    fn list_options_keep_the_stored_limit() {
        let long = "b".repeat(80);
        let d = draft("select", &[long.as_str()]);
        assert_eq!(d.clean().unwrap().vocabulary, vec![long]);
    }

    #[test]
    fn blank_option_is_rejected() {
        assert_eq!(
            draft("select", &["A", "\n"]).clean(),
            Err(ValidationError::Required { field: "vocabulary" })
        );
    }

    #[test]
    fn filetypes_default_to_documents() {
        let q = draft("file", &[]).clean().unwrap();
        assert_eq!(q.filetypes_allowed, vec!["pdf", "doc", "docx", "odt"]);
    }

    #[test]
    fn filetypes_are_kept_for_non_file_questions() {
        let mut d = draft("text", &[]);
        d.filetypes_allowed = Some(vec!["txt".to_string()]);
        assert_eq!(d.clean().unwrap().filetypes_allowed, vec!["txt"]);
    }

    #[test]
    fn min_words_must_fit_a_small_positive_integer() {
        let mut d = draft("text", &[]);
        d.min_words = Some(-1);
        assert!(matches!(
            d.clean(),
            Err(ValidationError::OutOfRange { field: "min_words", .. })
        ));

        let mut d = draft("text", &[]);
        d.min_words = Some(250);
        assert_eq!(d.clean().unwrap().min_words, Some(250));
    }

    #[test]
    fn label_is_required_and_bounded() {
        let mut d = draft("text", &[]);
        d.label = "   ".to_string();
        assert_eq!(d.clean(), Err(ValidationError::Required { field: "label" }));

        let mut d = draft("text", &[]);
        d.label = "x".repeat(26);
        assert!(matches!(d.clean(), Err(ValidationError::TooLong { field: "label", .. })));
    }

    #[test]
    fn course_code_must_be_a_slug() {
        let course = CourseDraft {
            original_code: None,
            code: "fellowship 2016".to_string(),
            name: "Fellowship".to_string(),
            description: String::new(),
        };
        assert_eq!(course.clean(), Err(ValidationError::InvalidSlug { field: "code" }));
    }

    #[test]
    fn template_name_is_trimmed() {
        let template = TemplateDraft {
            id: None,
            course_code: "fellowship".to_string(),
            name: "  Spring 2016 Fellowship ".to_string(),
            description: String::new(),
        }
        .clean()
        .unwrap();
        assert_eq!(template.name, "Spring 2016 Fellowship");
    }

    #[test]
    fn section_requires_help_text() {
        let section = SectionDraft {
            id: None,
            template_id: 1,
            code: "about".to_string(),
            name: "About you".to_string(),
            help_html: " ".to_string(),
        };
        assert_eq!(section.clean(), Err(ValidationError::Required { field: "help_html" }));
    }
}
