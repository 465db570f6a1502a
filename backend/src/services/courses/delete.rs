use crate::db::Database;
use crate::services::in_transaction;
use crate::store::courses;
use actix_web::{web, HttpResponse, Responder, ResponseError};

pub async fn process(db: web::Data<Database>, code: web::Path<String>) -> impl Responder {
    match in_transaction(&db, |conn| courses::delete(conn, &code)) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => e.error_response(),
    }
}
