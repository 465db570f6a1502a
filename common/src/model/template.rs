use serde::{Deserialize, Serialize};

/// An application template, e.g. "Spring 2016 Fellowship".
///
/// Templates tie a group of sections (and through them, questions) to one course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationTemplate {
    pub id: i64,
    pub course_code: String,
    pub name: String,
    pub description: String,
}

/// A template that has passed validation but has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTemplate {
    pub course_code: String,
    pub name: String,
    pub description: String,
}

impl NewTemplate {
    pub fn with_id(self, id: i64) -> ApplicationTemplate {
        ApplicationTemplate {
            id,
            course_code: self.course_code,
            name: self.name,
            description: self.description,
        }
    }
}
