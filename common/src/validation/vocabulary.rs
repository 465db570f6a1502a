use super::fields::{max_len, VOCABULARY_ENTRY_MAX};
use super::ValidationError;
use crate::model::question::QuestionType;

/// Strips the newline artifacts a multi-line text box leaves on each option.
pub fn normalize_vocabulary<S: AsRef<str>>(entries: &[S]) -> Vec<String> {
    entries
        .iter()
        .map(|entry| entry.as_ref().trim_matches(|c| c == '\n' || c == '\r').to_string())
        .collect()
}

/// Splits the raw contents of the vocabulary text box into options.
///
/// One option per line, any newline convention. Blank lines are dropped.
pub fn parse_vocabulary_text(raw: &str) -> Vec<String> {
    raw.lines()
        .map(|line| line.trim_matches(|c| c == '\n' || c == '\r'))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// A vocabulary is required for select and multiselect questions and forbidden
/// for every other type.
pub fn check_vocabulary(
    question_type: QuestionType,
    vocabulary: &[String],
) -> Result<(), ValidationError> {
    match (question_type.takes_vocabulary(), vocabulary.is_empty()) {
        (true, true) => Err(ValidationError::MissingVocabulary),
        (false, false) => Err(ValidationError::UnexpectedVocabulary),
        _ => {
            for entry in vocabulary {
                max_len("vocabulary", entry, VOCABULARY_ENTRY_MAX)?;
            }
            Ok(())
        }
    }
}
