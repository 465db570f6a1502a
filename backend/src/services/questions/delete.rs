use crate::db::Database;
use crate::services::in_transaction;
use crate::store::questions;
use actix_web::{web, HttpResponse, Responder, ResponseError};

pub async fn process(db: web::Data<Database>, question_id: web::Path<i64>) -> impl Responder {
    match in_transaction(&db, |conn| questions::delete(conn, *question_id)) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => e.error_response(),
    }
}
