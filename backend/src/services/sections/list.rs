use crate::db::Database;
use crate::error::AppResult;
use crate::store::sections;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::section::TemplateSection;
use common::requests::SectionFilter;

pub async fn process(db: web::Data<Database>, filter: web::Query<SectionFilter>) -> impl Responder {
    match list_sections(&db, filter.template) {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(e) => e.error_response(),
    }
}

fn list_sections(db: &Database, template_id: Option<i64>) -> AppResult<Vec<TemplateSection>> {
    let conn = db.connect()?;
    sections::list(&conn, template_id)
}
