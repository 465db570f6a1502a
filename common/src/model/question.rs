use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// File extensions accepted for upload questions unless the question overrides them.
pub const DEFAULT_FILETYPES: [&str; 4] = ["pdf", "doc", "docx", "odt"];

/// The kind of answer a question expects.
///
/// The lowercase token (`"multiselect"`, not `"Select-Multiple"`) is the only
/// representation used on the wire and in the database. Display labels come from
/// [`QuestionType::label`] (offered as choices by the admin registry) and are never
/// parsed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Boolean,
    Text,
    Select,
    MultiSelect,
    File,
}

impl QuestionType {
    pub const ALL: [QuestionType; 5] = [
        QuestionType::Boolean,
        QuestionType::Text,
        QuestionType::Select,
        QuestionType::MultiSelect,
        QuestionType::File,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            QuestionType::Boolean => "boolean",
            QuestionType::Text => "text",
            QuestionType::Select => "select",
            QuestionType::MultiSelect => "multiselect",
            QuestionType::File => "file",
        }
    }

    /// Human readable label for choice widgets.
    pub fn label(self) -> &'static str {
        match self {
            QuestionType::Boolean => "Yes/No",
            QuestionType::Text => "Text",
            QuestionType::Select => "Select",
            QuestionType::MultiSelect => "Select-Multiple",
            QuestionType::File => "File Upload",
        }
    }

    /// Whether answers are picked from a fixed vocabulary.
    pub fn takes_vocabulary(self) -> bool {
        matches!(self, QuestionType::Select | QuestionType::MultiSelect)
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the five question type tokens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a question type")]
pub struct UnknownQuestionType(pub String);

impl FromStr for QuestionType {
    type Err = UnknownQuestionType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuestionType::ALL
            .into_iter()
            .find(|qt| qt.as_str() == s)
            .ok_or_else(|| UnknownQuestionType(s.to_string()))
    }
}

/// A question on an application, as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub section_id: i64,
    /// Short label that identifies the question on reports. Unique per section.
    pub label: String,
    /// The question as phrased on the application.
    pub question: String,
    /// Display order inside the section, low numbers first.
    pub position: i32,
    pub question_type: QuestionType,
    pub required: bool,
    pub min_words: Option<u16>,
    pub vocabulary: Vec<String>,
    pub filetypes_allowed: Vec<String>,
}

/// A question that has passed validation but has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub section_id: i64,
    pub label: String,
    pub question: String,
    pub position: i32,
    pub question_type: QuestionType,
    pub required: bool,
    pub min_words: Option<u16>,
    pub vocabulary: Vec<String>,
    pub filetypes_allowed: Vec<String>,
}

impl NewQuestion {
    pub fn with_id(self, id: i64) -> Question {
        Question {
            id,
            section_id: self.section_id,
            label: self.label,
            question: self.question,
            position: self.position,
            question_type: self.question_type,
            required: self.required,
            min_words: self.min_words,
            vocabulary: self.vocabulary,
            filetypes_allowed: self.filetypes_allowed,
        }
    }
}
