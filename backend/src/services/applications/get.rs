use crate::db::Database;
use crate::error::AppResult;
use crate::store::applications;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::application::Application;

pub async fn process(db: web::Data<Database>, application_id: web::Path<i64>) -> impl Responder {
    match get_application(&db, *application_id) {
        Ok(application) => HttpResponse::Ok().json(application),
        Err(e) => e.error_response(),
    }
}

fn get_application(db: &Database, application_id: i64) -> AppResult<Application> {
    let conn = db.connect()?;
    applications::get(&conn, application_id)
}
