use crate::admin::actions;
use crate::config::Config;
use crate::db::Database;
use crate::error::AppResult;
use actix_web::http::header::LOCATION;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::requests::CopyTemplatesRequest;

/// Sends the operator to the copy workflow with the selected template ids.
pub async fn process(
    db: web::Data<Database>,
    config: web::Data<Config>,
    payload: web::Json<CopyTemplatesRequest>,
) -> impl Responder {
    match copy_target(&db, &config.copy_url, &payload.ids) {
        Ok(target) => HttpResponse::SeeOther().insert_header((LOCATION, target)).finish(),
        Err(e) => e.error_response(),
    }
}

fn copy_target(db: &Database, copy_url: &str, ids: &[i64]) -> AppResult<String> {
    let conn = db.connect()?;
    actions::copy_templates(&conn, copy_url, ids)
}
