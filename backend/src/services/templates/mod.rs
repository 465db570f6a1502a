//! # Template Service Module
//!
//! Routes under `/api/templates`:
//!
//! *   **`GET /?course={code}`** (`list::process`): templates with their number of
//!     applications, optionally for one course.
//! *   **`GET /{id}`** (`get::process`): one template, its application count and its
//!     sections, which stay editable from the template's page.
//! *   **`POST /save`** (`save::process`): creates a template (no `id`) or updates one.
//! *   **`DELETE /{id}`** (`delete::process`): removes a template with its sections,
//!     questions and applications. Unlike the course page, the template list may
//!     delete templates.
//! *   **`POST /actions/copy`** (`copy::process`): the "copy templates to a different
//!     course" action. Answers `303 See Other` pointing at the copy workflow.

mod copy;
mod delete;
mod get;
mod list;
mod save;

use actix_web::web::{delete, get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/templates";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("/save", post().to(save::process))
        .route("/actions/copy", post().to(copy::process))
        .route("/{template_id}", get().to(get::process))
        .route("/{template_id}", delete().to(delete::process))
}
