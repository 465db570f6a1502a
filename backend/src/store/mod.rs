//! # Entity store
//!
//! Plain functions over a `rusqlite::Connection`, one sub-module per table. They
//! take a `&Connection` so callers can pass either a connection or an open
//! transaction; the handlers wrap every write in a transaction of its own.
//!
//! Records reaching `insert`/`update` have already been cleaned by
//! `common::validation`. The store relies on the schema's constraints for the rest
//! (unique names, unique `(section, label)`, foreign keys) and reports violations
//! as `AppError::Integrity`.

pub mod applications;
pub mod counts;
pub mod courses;
pub mod questions;
pub mod sections;
pub mod templates;

#[cfg(test)]
pub(crate) mod fixtures {
    //! Small builders shared by the store and service tests.

    use common::model::course::Course;
    use common::model::question::{NewQuestion, QuestionType};
    use common::model::section::NewSection;
    use common::model::template::NewTemplate;
    use rusqlite::Connection;

    pub fn course(conn: &Connection, code: &str) {
        super::courses::insert(
            conn,
            &Course {
                code: code.to_string(),
                name: format!("{} course", code),
                description: String::new(),
            },
        )
        .unwrap();
    }

    pub fn template(conn: &Connection, course_code: &str, name: &str) -> i64 {
        super::templates::insert(
            conn,
            NewTemplate {
                course_code: course_code.to_string(),
                name: name.to_string(),
                description: String::new(),
            },
        )
        .unwrap()
        .id
    }

    pub fn section(conn: &Connection, template_id: i64, code: &str) -> i64 {
        super::sections::insert(
            conn,
            NewSection {
                template_id,
                code: code.to_string(),
                name: code.to_uppercase(),
                help_html: "<p>Help</p>".to_string(),
            },
        )
        .unwrap()
        .id
    }

    pub fn new_question(section_id: i64, label: &str, position: i32) -> NewQuestion {
        NewQuestion {
            section_id,
            label: label.to_string(),
            question: format!("What about {}?", label),
            position,
            question_type: QuestionType::Text,
            required: true,
            min_words: None,
            vocabulary: Vec::new(),
            filetypes_allowed: vec!["pdf".to_string()],
        }
    }

    pub fn application(conn: &Connection, template_id: i64) -> i64 {
        super::applications::insert(conn, template_id).unwrap().id
    }
}
