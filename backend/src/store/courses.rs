use crate::error::{AppError, AppResult};
use common::model::course::Course;
use rusqlite::{params, Connection, OptionalExtension, Row};

fn from_row(row: &Row) -> rusqlite::Result<Course> {
    Ok(Course {
        code: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
    })
}

/// Creates a course. An existing code is an integrity error, never an overwrite.
pub fn insert(conn: &Connection, course: &Course) -> AppResult<()> {
    conn.execute(
        "INSERT INTO courses (code, name, description) VALUES (?1, ?2, ?3)",
        params![course.code, course.name, course.description],
    )?;
    log::info!("created course {}", course.code);
    Ok(())
}

/// Rewrites the course stored under `original_code`. A new code is carried over
/// to the course's templates by `ON UPDATE CASCADE`.
pub fn update(conn: &Connection, original_code: &str, course: &Course) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE courses SET code = ?1, name = ?2, description = ?3 WHERE code = ?4",
        params![course.code, course.name, course.description, original_code],
    )?;
    if changed == 0 {
        return Err(AppError::not_found("course", original_code));
    }
    log::info!("updated course {}", course.code);
    Ok(())
}

pub fn get(conn: &Connection, code: &str) -> AppResult<Course> {
    conn.query_row(
        "SELECT code, name, description FROM courses WHERE code = ?1",
        params![code],
        from_row,
    )
    .optional()?
    .ok_or_else(|| AppError::not_found("course", code))
}

/// Deletes the course together with its templates, sections, questions and applications.
pub fn delete(conn: &Connection, code: &str) -> AppResult<()> {
    let removed = conn.execute("DELETE FROM courses WHERE code = ?1", params![code])?;
    if removed == 0 {
        return Err(AppError::not_found("course", code));
    }
    log::info!("deleted course {}", code);
    Ok(())
}
