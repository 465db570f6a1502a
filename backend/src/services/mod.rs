//! HTTP surface of the admin service.
//!
//! Each sub-module owns one entity and exposes `configure_routes()`, returning the
//! actix `Scope` for its `/api/...` prefix. [`configure`] mounts all of them.

pub mod admin;
pub mod applications;
pub mod courses;
pub mod questions;
pub mod sections;
pub mod templates;

use crate::db::Database;
use crate::error::AppResult;
use actix_web::web;
use rusqlite::Connection;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(courses::configure_routes())
        .service(templates::configure_routes())
        .service(sections::configure_routes())
        .service(questions::configure_routes())
        .service(applications::configure_routes())
        .service(admin::configure_routes());
}

/// Runs `f` inside one transaction. Nothing is committed if `f` fails.
pub(crate) fn in_transaction<T>(
    db: &Database,
    f: impl FnOnce(&Connection) -> AppResult<T>,
) -> AppResult<T> {
    let mut conn = db.connect()?;
    let tx = conn.transaction()?;
    let value = f(&tx)?;
    tx.commit()?;
    Ok(value)
}
