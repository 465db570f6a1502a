use crate::error::{AppError, AppResult};
use common::model::application::Application;
use common::views::ApplicationRow;
use rusqlite::{params, Connection, OptionalExtension};

pub fn insert(conn: &Connection, template_id: i64) -> AppResult<Application> {
    conn.execute("INSERT INTO applications (template_id) VALUES (?1)", params![template_id])?;
    Ok(Application {
        id: conn.last_insert_rowid(),
        template_id,
    })
}

pub fn update(conn: &Connection, id: i64, template_id: i64) -> AppResult<Application> {
    let changed = conn.execute(
        "UPDATE applications SET template_id = ?1 WHERE id = ?2",
        params![template_id, id],
    )?;
    if changed == 0 {
        return Err(AppError::not_found("application", id));
    }
    Ok(Application { id, template_id })
}

pub fn get(conn: &Connection, id: i64) -> AppResult<Application> {
    conn.query_row(
        "SELECT id, template_id FROM applications WHERE id = ?1",
        params![id],
        |row| {
            Ok(Application {
                id: row.get(0)?,
                template_id: row.get(1)?,
            })
        },
    )
    .optional()?
    .ok_or_else(|| AppError::not_found("application", id))
}

/// Applications with the course they were filed under.
///
/// Both filters are optional and combine. The course comes from a LEFT JOIN, so
/// an application whose template row is gone is still listed, with no course.
pub fn list(
    conn: &Connection,
    template_id: Option<i64>,
    course_code: Option<&str>,
) -> AppResult<Vec<ApplicationRow>> {
    let mut stmt = conn.prepare(
        "SELECT a.id, a.template_id, t.course_code
         FROM applications a
         LEFT JOIN application_templates t ON t.id = a.template_id
         WHERE (?1 IS NULL OR a.template_id = ?1)
           AND (?2 IS NULL OR t.course_code = ?2)
         ORDER BY a.id",
    )?;
    let rows = stmt
        .query_map(params![template_id, course_code], |row| {
            Ok(ApplicationRow {
                application: Application {
                    id: row.get(0)?,
                    template_id: row.get(1)?,
                },
                course_code: row.get(2)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

pub fn delete(conn: &Connection, id: i64) -> AppResult<()> {
    let removed = conn.execute("DELETE FROM applications WHERE id = ?1", params![id])?;
    if removed == 0 {
        return Err(AppError::not_found("application", id));
    }
    Ok(())
}
