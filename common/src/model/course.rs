use serde::{Deserialize, Serialize};

/// A course offering, e.g. the Fellowship.
///
/// The `code` is the primary key, so a course is created and updated through the
/// same record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}
