use crate::db::Database;
use crate::services::in_transaction;
use crate::store::templates;
use actix_web::{web, HttpResponse, Responder, ResponseError};

pub async fn process(db: web::Data<Database>, template_id: web::Path<i64>) -> impl Responder {
    match in_transaction(&db, |conn| templates::delete(conn, *template_id)) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => e.error_response(),
    }
}
