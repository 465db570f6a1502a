use crate::error::{AppError, AppResult};
use common::model::question::{NewQuestion, Question, QuestionType};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};

const COLUMNS: &str = "id, section_id, label, question, position, question_type, required, \
                       min_words, vocabulary, filetypes_allowed";

/// List columns are stored as JSON arrays of strings.
fn list_column(row: &Row, idx: usize) -> rusqlite::Result<Vec<String>> {
    let raw: String = row.get(idx)?;
    serde_json::from_str(&raw)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn type_column(row: &Row, idx: usize) -> rusqlite::Result<QuestionType> {
    let raw: String = row.get(idx)?;
    raw.parse().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            Type::Text,
            format!("unknown question type '{}'", raw).into(),
        )
    })
}

fn from_row(row: &Row) -> rusqlite::Result<Question> {
    Ok(Question {
        id: row.get(0)?,
        section_id: row.get(1)?,
        label: row.get(2)?,
        question: row.get(3)?,
        position: row.get(4)?,
        question_type: type_column(row, 5)?,
        required: row.get(6)?,
        min_words: row.get(7)?,
        vocabulary: list_column(row, 8)?,
        filetypes_allowed: list_column(row, 9)?,
    })
}

pub fn insert(conn: &Connection, question: NewQuestion) -> AppResult<Question> {
    conn.execute(
        "INSERT INTO questions (section_id, label, question, position, question_type, required,
                                min_words, vocabulary, filetypes_allowed)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            question.section_id,
            question.label,
            question.question,
            question.position,
            question.question_type.as_str(),
            question.required,
            question.min_words,
            serde_json::to_string(&question.vocabulary)?,
            serde_json::to_string(&question.filetypes_allowed)?,
        ],
    )?;
    let question = question.with_id(conn.last_insert_rowid());
    log::info!(
        "created question {} ({}) in section {}",
        question.id,
        question.label,
        question.section_id
    );
    Ok(question)
}

pub fn update(conn: &Connection, id: i64, question: NewQuestion) -> AppResult<Question> {
    let changed = conn.execute(
        "UPDATE questions SET section_id = ?1, label = ?2, question = ?3, position = ?4,
                              question_type = ?5, required = ?6, min_words = ?7,
                              vocabulary = ?8, filetypes_allowed = ?9
         WHERE id = ?10",
        params![
            question.section_id,
            question.label,
            question.question,
            question.position,
            question.question_type.as_str(),
            question.required,
            question.min_words,
            serde_json::to_string(&question.vocabulary)?,
            serde_json::to_string(&question.filetypes_allowed)?,
            id,
        ],
    )?;
    if changed == 0 {
        return Err(AppError::not_found("question", id));
    }
    log::info!("updated question {}", id);
    Ok(question.with_id(id))
}

pub fn get(conn: &Connection, id: i64) -> AppResult<Question> {
    conn.query_row(
        &format!("SELECT {COLUMNS} FROM questions WHERE id = ?1"),
        params![id],
        from_row,
    )
    .optional()?
    .ok_or_else(|| AppError::not_found("question", id))
}

/// Questions in display order: by section, then position.
pub fn list(conn: &Connection, section_id: Option<i64>) -> AppResult<Vec<Question>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {COLUMNS} FROM questions
         WHERE ?1 IS NULL OR section_id = ?1
         ORDER BY section_id, position, id"
    ))?;
    let questions = stmt
        .query_map(params![section_id], from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(questions)
}

pub fn delete(conn: &Connection, id: i64) -> AppResult<()> {
    let removed = conn.execute("DELETE FROM questions WHERE id = ?1", params![id])?;
    if removed == 0 {
        return Err(AppError::not_found("question", id));
    }
    Ok(())
}
