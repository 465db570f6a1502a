//! # Course Service Module
//!
//! Routes under `/api/courses`:
//!
//! *   **`GET /`** (`list::process`): every course with its number of templates and
//!     applications, each count linking to the filtered list it was taken from.
//! *   **`GET /{code}`** (`get::process`): one course with its counts and the
//!     read-only list of its templates.
//! *   **`POST /save`** (`save::process`): creates the course, or edits the one named
//!     by `original_code`. Creating over an existing code is a `409`.
//! *   **`DELETE /{code}`** (`delete::process`): removes the course and everything under it.

mod delete;
mod get;
mod list;
mod save;

use actix_web::web::{delete, get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/courses";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("/save", post().to(save::process))
        .route("/{code}", get().to(get::process))
        .route("/{code}", delete().to(delete::process))
}
