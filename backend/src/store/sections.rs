use crate::error::{AppError, AppResult};
use common::model::section::{NewSection, TemplateSection};
use rusqlite::{params, Connection, OptionalExtension, Row};

fn from_row(row: &Row) -> rusqlite::Result<TemplateSection> {
    Ok(TemplateSection {
        id: row.get(0)?,
        template_id: row.get(1)?,
        code: row.get(2)?,
        name: row.get(3)?,
        help_html: row.get(4)?,
    })
}

pub fn insert(conn: &Connection, section: NewSection) -> AppResult<TemplateSection> {
    conn.execute(
        "INSERT INTO template_sections (template_id, code, name, help_html)
         VALUES (?1, ?2, ?3, ?4)",
        params![section.template_id, section.code, section.name, section.help_html],
    )?;
    Ok(section.with_id(conn.last_insert_rowid()))
}

pub fn update(conn: &Connection, id: i64, section: NewSection) -> AppResult<TemplateSection> {
    let changed = conn.execute(
        "UPDATE template_sections SET template_id = ?1, code = ?2, name = ?3, help_html = ?4
         WHERE id = ?5",
        params![section.template_id, section.code, section.name, section.help_html, id],
    )?;
    if changed == 0 {
        return Err(AppError::not_found("section", id));
    }
    Ok(section.with_id(id))
}

pub fn get(conn: &Connection, id: i64) -> AppResult<TemplateSection> {
    conn.query_row(
        "SELECT id, template_id, code, name, help_html FROM template_sections WHERE id = ?1",
        params![id],
        from_row,
    )
    .optional()?
    .ok_or_else(|| AppError::not_found("section", id))
}

/// Sections in creation order, optionally restricted to one template.
pub fn list(conn: &Connection, template_id: Option<i64>) -> AppResult<Vec<TemplateSection>> {
    let mut stmt = conn.prepare(
        "SELECT id, template_id, code, name, help_html FROM template_sections
         WHERE ?1 IS NULL OR template_id = ?1
         ORDER BY template_id, id",
    )?;
    let sections = stmt
        .query_map(params![template_id], from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(sections)
}

pub fn delete(conn: &Connection, id: i64) -> AppResult<()> {
    let removed = conn.execute("DELETE FROM template_sections WHERE id = ?1", params![id])?;
    if removed == 0 {
        return Err(AppError::not_found("section", id));
    }
    Ok(())
}
