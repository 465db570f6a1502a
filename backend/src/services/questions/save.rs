use crate::db::Database;
use crate::error::{AppError, AppResult};
use crate::services::in_transaction;
use crate::store::questions;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::question::Question;
use common::requests::QuestionDraft;

pub async fn process(db: web::Data<Database>, payload: web::Json<QuestionDraft>) -> impl Responder {
    match save_question(&db, payload.into_inner()) {
        Ok(question) => HttpResponse::Ok().json(question),
        Err(e) => {
            if let AppError::Validation(reason) = &e {
                log::warn!("question rejected: {}", reason);
            }
            e.error_response()
        }
    }
}

/// Cleans the draft, then inserts or updates it in one transaction.
pub fn save_question(db: &Database, draft: QuestionDraft) -> AppResult<Question> {
    let id = draft.id;
    let question = draft.clean()?;
    in_transaction(db, |conn| match id {
        Some(id) => questions::update(conn, id, question),
        None => questions::insert(conn, question),
    })
}
