use crate::db::Database;
use crate::error::AppResult;
use crate::services::in_transaction;
use crate::store::sections;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::section::TemplateSection;
use common::requests::SectionDraft;

pub async fn process(db: web::Data<Database>, payload: web::Json<SectionDraft>) -> impl Responder {
    match save_section(&db, payload.into_inner()) {
        Ok(section) => HttpResponse::Ok().json(section),
        Err(e) => {
            log::warn!("section not saved: {}", e);
            e.error_response()
        }
    }
}

pub fn save_section(db: &Database, draft: SectionDraft) -> AppResult<TemplateSection> {
    let id = draft.id;
    let section = draft.clean()?;
    in_transaction(db, |conn| match id {
        Some(id) => sections::update(conn, id, section),
        None => sections::insert(conn, section),
    })
}
