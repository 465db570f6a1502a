//! Derived counts for the admin list and detail pages.
//!
//! Counts are recomputed on every call. All of them go through `COUNT(DISTINCT ...)`
//! over joins, so a course or template that does not exist counts as zero and a
//! row whose parent is missing is simply not counted.

use crate::error::AppResult;
use common::model::course::Course;
use common::model::template::ApplicationTemplate;
use rusqlite::{params, Connection};

/// A course with its annotated counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseCounts {
    pub course: Course,
    pub num_templates: i64,
    pub num_applications: i64,
}

/// A template with its annotated application count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateCounts {
    pub template: ApplicationTemplate,
    pub num_applications: i64,
}

pub fn num_templates(conn: &Connection, course_code: &str) -> AppResult<i64> {
    let count = conn.query_row(
        "SELECT COUNT(DISTINCT t.id) FROM application_templates t WHERE t.course_code = ?1",
        params![course_code],
        |row| row.get(0),
    )?;
    Ok(count)
}

/// Applications filed under any of the course's templates.
pub fn num_applications_for_course(conn: &Connection, course_code: &str) -> AppResult<i64> {
    let count = conn.query_row(
        "SELECT COUNT(DISTINCT a.id)
         FROM applications a
         JOIN application_templates t ON t.id = a.template_id
         WHERE t.course_code = ?1",
        params![course_code],
        |row| row.get(0),
    )?;
    Ok(count)
}

pub fn num_applications_for_template(conn: &Connection, template_id: i64) -> AppResult<i64> {
    let count = conn.query_row(
        "SELECT COUNT(DISTINCT a.id) FROM applications a WHERE a.template_id = ?1",
        params![template_id],
        |row| row.get(0),
    )?;
    Ok(count)
}

/// Every course with its template and application counts, ordered by code.
pub fn list_courses_with_counts(conn: &Connection) -> AppResult<Vec<CourseCounts>> {
    let mut stmt = conn.prepare(
        "SELECT c.code, c.name, c.description, COUNT(DISTINCT t.id), COUNT(DISTINCT a.id)
         FROM courses c
         LEFT JOIN application_templates t ON t.course_code = c.code
         LEFT JOIN applications a ON a.template_id = t.id
         GROUP BY c.code, c.name, c.description
         ORDER BY c.code",
    )?;
    let rows = stmt
        .query_map([], |row| {
            Ok(CourseCounts {
                course: Course {
                    code: row.get(0)?,
                    name: row.get(1)?,
                    description: row.get(2)?,
                },
                num_templates: row.get(3)?,
                num_applications: row.get(4)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// Templates with their application counts, ordered by id, optionally for one course.
pub fn list_templates_with_counts(
    conn: &Connection,
    course_code: Option<&str>,
) -> AppResult<Vec<TemplateCounts>> {
    let mut stmt = conn.prepare(
        "SELECT t.id, t.course_code, t.name, t.description, COUNT(DISTINCT a.id)
         FROM application_templates t
         LEFT JOIN applications a ON a.template_id = t.id
         WHERE ?1 IS NULL OR t.course_code = ?1
         GROUP BY t.id, t.course_code, t.name, t.description
         ORDER BY t.id",
    )?;
    let rows = stmt
        .query_map(params![course_code], |row| {
            Ok(TemplateCounts {
                template: ApplicationTemplate {
                    id: row.get(0)?,
                    course_code: row.get(1)?,
                    name: row.get(2)?,
                    description: row.get(3)?,
                },
                num_applications: row.get(4)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}
