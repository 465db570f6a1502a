//! # Question Service Module
//!
//! Routes under `/api/questions`:
//!
//! *   **`GET /?section={id}`**: questions in display order (section, then position).
//! *   **`GET /{id}`**: one question.
//! *   **`POST /save`**: creates or updates a question. The draft is cleaned first:
//!     the vocabulary is normalized (one option per line when sent as
//!     `vocabulary_text`) and checked against the question type. A rejected draft
//!     writes nothing.
//! *   **`DELETE /{id}`**.

mod delete;
mod get;
mod list;
mod save;

use actix_web::web::{delete, get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/questions";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("/save", post().to(save::process))
        .route("/{question_id}", get().to(get::process))
        .route("/{question_id}", delete().to(delete::process))
}
