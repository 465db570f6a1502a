use crate::error::{AppError, AppResult};
use common::model::template::{ApplicationTemplate, NewTemplate};
use rusqlite::{params, Connection, OptionalExtension, Row};

const COLUMNS: &str = "id, course_code, name, description";

fn from_row(row: &Row) -> rusqlite::Result<ApplicationTemplate> {
    Ok(ApplicationTemplate {
        id: row.get(0)?,
        course_code: row.get(1)?,
        name: row.get(2)?,
        description: row.get(3)?,
    })
}

pub fn insert(conn: &Connection, template: NewTemplate) -> AppResult<ApplicationTemplate> {
    conn.execute(
        "INSERT INTO application_templates (course_code, name, description) VALUES (?1, ?2, ?3)",
        params![template.course_code, template.name, template.description],
    )?;
    let template = template.with_id(conn.last_insert_rowid());
    log::info!("created template {} for course {}", template.id, template.course_code);
    Ok(template)
}

pub fn update(conn: &Connection, id: i64, template: NewTemplate) -> AppResult<ApplicationTemplate> {
    let changed = conn.execute(
        "UPDATE application_templates SET course_code = ?1, name = ?2, description = ?3
         WHERE id = ?4",
        params![template.course_code, template.name, template.description, id],
    )?;
    if changed == 0 {
        return Err(AppError::not_found("application template", id));
    }
    log::info!("updated template {}", id);
    Ok(template.with_id(id))
}

pub fn get(conn: &Connection, id: i64) -> AppResult<ApplicationTemplate> {
    conn.query_row(
        &format!("SELECT {COLUMNS} FROM application_templates WHERE id = ?1"),
        params![id],
        from_row,
    )
    .optional()?
    .ok_or_else(|| AppError::not_found("application template", id))
}

/// Templates ordered by id, optionally restricted to one course.
pub fn list(conn: &Connection, course_code: Option<&str>) -> AppResult<Vec<ApplicationTemplate>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {COLUMNS} FROM application_templates
         WHERE ?1 IS NULL OR course_code = ?1
         ORDER BY id"
    ))?;
    let templates = stmt
        .query_map(params![course_code], from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(templates)
}

pub fn delete(conn: &Connection, id: i64) -> AppResult<()> {
    let removed = conn.execute("DELETE FROM application_templates WHERE id = ?1", params![id])?;
    if removed == 0 {
        return Err(AppError::not_found("application template", id));
    }
    log::info!("deleted template {}", id);
    Ok(())
}

/// Keeps the ids that name a stored template, in the order given.
pub fn existing_ids(conn: &Connection, ids: &[i64]) -> AppResult<Vec<i64>> {
    let mut stmt =
        conn.prepare("SELECT EXISTS (SELECT 1 FROM application_templates WHERE id = ?1)")?;
    let mut found = Vec::with_capacity(ids.len());
    for &id in ids {
        let exists: bool = stmt.query_row(params![id], |row| row.get(0))?;
        if exists {
            found.push(id);
        }
    }
    Ok(found)
}
