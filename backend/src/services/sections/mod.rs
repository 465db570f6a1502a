//! # Section Service Module
//!
//! Routes under `/api/sections`: list (`?template={id}`), detail with the
//! section's questions in display order, save, delete.

mod delete;
mod get;
mod list;
mod save;

use actix_web::web::{delete, get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/sections";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("/save", post().to(save::process))
        .route("/{section_id}", get().to(get::process))
        .route("/{section_id}", delete().to(delete::process))
}
