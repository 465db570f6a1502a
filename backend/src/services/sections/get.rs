use crate::db::Database;
use crate::error::AppResult;
use crate::store::{questions, sections};
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::views::SectionDetail;

pub async fn process(db: web::Data<Database>, section_id: web::Path<i64>) -> impl Responder {
    match get_section(&db, *section_id) {
        Ok(detail) => HttpResponse::Ok().json(detail),
        Err(e) => e.error_response(),
    }
}

pub fn get_section(db: &Database, section_id: i64) -> AppResult<SectionDetail> {
    let conn = db.connect()?;
    let section = sections::get(&conn, section_id)?;
    let questions = questions::list(&conn, Some(section_id))?;
    Ok(SectionDetail { section, questions })
}
