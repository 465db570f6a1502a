use crate::db::Database;
use crate::error::AppResult;
use crate::store::questions;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::question::Question;
use common::requests::QuestionFilter;

pub async fn process(
    db: web::Data<Database>,
    filter: web::Query<QuestionFilter>,
) -> impl Responder {
    match list_questions(&db, filter.section) {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(e) => e.error_response(),
    }
}

fn list_questions(db: &Database, section_id: Option<i64>) -> AppResult<Vec<Question>> {
    let conn = db.connect()?;
    questions::list(&conn, section_id)
}
