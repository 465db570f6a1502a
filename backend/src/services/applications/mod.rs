//! # Application Service Module
//!
//! Routes under `/api/applications`. The list takes `?template={id}` and
//! `?course={code}`, which are the targets of the count links on the course and
//! template pages.

mod delete;
mod get;
mod list;
mod save;

use actix_web::web::{delete, get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/applications";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("/save", post().to(save::process))
        .route("/{application_id}", get().to(get::process))
        .route("/{application_id}", delete().to(delete::process))
}
