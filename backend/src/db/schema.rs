use rusqlite::Connection;

/// Tables for the five entities. Every statement is idempotent, so the schema is
/// applied on each start.
pub const CURRENT_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS courses (
    code TEXT PRIMARY KEY NOT NULL,
    name TEXT NOT NULL UNIQUE,
    description TEXT NOT NULL DEFAULT ''
);

CREATE TABLE IF NOT EXISTS application_templates (
    id INTEGER PRIMARY KEY,
    course_code TEXT NOT NULL,
    name TEXT NOT NULL UNIQUE,
    description TEXT NOT NULL DEFAULT '',
    FOREIGN KEY (course_code) REFERENCES courses (code) ON DELETE CASCADE ON UPDATE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_application_templates_course
    ON application_templates (course_code);

CREATE TABLE IF NOT EXISTS template_sections (
    id INTEGER PRIMARY KEY,
    template_id INTEGER NOT NULL,
    code TEXT NOT NULL,
    name TEXT NOT NULL,
    help_html TEXT NOT NULL,
    FOREIGN KEY (template_id) REFERENCES application_templates (id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS questions (
    id INTEGER PRIMARY KEY,
    section_id INTEGER NOT NULL,
    label TEXT NOT NULL,
    question TEXT NOT NULL,
    position INTEGER NOT NULL,
    question_type TEXT NOT NULL
        CHECK (question_type IN ('boolean', 'text', 'select', 'multiselect', 'file')),
    required BOOLEAN NOT NULL DEFAULT TRUE,
    min_words INTEGER CHECK (min_words IS NULL OR min_words BETWEEN 0 AND 32767),
    vocabulary TEXT NOT NULL DEFAULT '[]',
    filetypes_allowed TEXT NOT NULL DEFAULT '["pdf","doc","docx","odt"]',
    UNIQUE (section_id, label),
    FOREIGN KEY (section_id) REFERENCES template_sections (id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS applications (
    id INTEGER PRIMARY KEY,
    template_id INTEGER NOT NULL,
    FOREIGN KEY (template_id) REFERENCES application_templates (id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_applications_template
    ON applications (template_id);
"#;

pub fn apply(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(CURRENT_SCHEMA)
}
