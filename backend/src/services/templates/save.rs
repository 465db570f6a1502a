use crate::db::Database;
use crate::error::AppResult;
use crate::services::in_transaction;
use crate::store::templates;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::template::ApplicationTemplate;
use common::requests::TemplateDraft;

pub async fn process(db: web::Data<Database>, payload: web::Json<TemplateDraft>) -> impl Responder {
    match save_template(&db, payload.into_inner()) {
        Ok(template) => HttpResponse::Ok().json(template),
        Err(e) => {
            log::warn!("template not saved: {}", e);
            e.error_response()
        }
    }
}

pub fn save_template(db: &Database, draft: TemplateDraft) -> AppResult<ApplicationTemplate> {
    let id = draft.id;
    let template = draft.clean()?;
    in_transaction(db, |conn| match id {
        Some(id) => templates::update(conn, id, template),
        None => templates::insert(conn, template),
    })
}
