//! # Validation
//!
//! Every write goes through here before it touches the database. A draft either
//! comes out as a storable `New*` record or the whole write is refused with a
//! [`ValidationError`] whose message is shown next to the form.
//!
//! - `fields`: generic field checks (required, max length, slug, range).
//! - `vocabulary`: the question-type/vocabulary rule and the cleanup of raw
//!   options typed into the multi-line box.
//! - `drafts`: `clean` for each request draft, combining the two.

mod drafts;
pub mod fields;
pub mod vocabulary;

pub use vocabulary::{check_vocabulary, normalize_vocabulary, parse_vocabulary_text};

/// Why a draft was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Select and Select-Multiple fields must provide a vocabulary.")]
    MissingVocabulary,

    #[error("Only Select and Select-Multiple fields can provide a vocabulary.")]
    UnexpectedVocabulary,

    #[error("question_type: '{0}' is not one of the available choices.")]
    UnknownQuestionType(String),

    #[error("{field}: This field is required.")]
    Required { field: &'static str },

    #[error("{field}: Ensure this value has at most {max} characters (it has {actual}).")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("{field}: Enter a valid slug consisting of letters, numbers, underscores or hyphens.")]
    InvalidSlug { field: &'static str },

    #[error("{field}: Ensure this value is between {min} and {max}.")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },
}
