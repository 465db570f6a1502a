use crate::db::Database;
use crate::error::AppResult;
use crate::store::questions;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::question::Question;

pub async fn process(db: web::Data<Database>, question_id: web::Path<i64>) -> impl Responder {
    match get_question(&db, *question_id) {
        Ok(question) => HttpResponse::Ok().json(question),
        Err(e) => e.error_response(),
    }
}

fn get_question(db: &Database, question_id: i64) -> AppResult<Question> {
    let conn = db.connect()?;
    questions::get(&conn, question_id)
}
