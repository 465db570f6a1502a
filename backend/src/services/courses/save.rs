use crate::db::Database;
use crate::error::AppResult;
use crate::services::in_transaction;
use crate::store::courses;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::course::Course;
use common::requests::CourseDraft;

pub async fn process(db: web::Data<Database>, payload: web::Json<CourseDraft>) -> impl Responder {
    match save_course(&db, payload.into_inner()) {
        Ok(course) => HttpResponse::Ok().json(course),
        Err(e) => {
            log::warn!("course not saved: {}", e);
            e.error_response()
        }
    }
}

pub fn save_course(db: &Database, draft: CourseDraft) -> AppResult<Course> {
    let original_code = draft.original_code.clone();
    let course = draft.clean()?;
    in_transaction(db, |conn| match &original_code {
        Some(code) => courses::update(conn, code, &course),
        None => courses::insert(conn, &course),
    })?;
    Ok(course)
}
