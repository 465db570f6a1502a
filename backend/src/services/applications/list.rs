use crate::db::Database;
use crate::error::AppResult;
use crate::store::applications;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::requests::ApplicationFilter;
use common::views::ApplicationRow;

pub async fn process(
    db: web::Data<Database>,
    filter: web::Query<ApplicationFilter>,
) -> impl Responder {
    match list_applications(&db, &filter) {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(e) => e.error_response(),
    }
}

fn list_applications(db: &Database, filter: &ApplicationFilter) -> AppResult<Vec<ApplicationRow>> {
    let conn = db.connect()?;
    applications::list(&conn, filter.template, filter.course.as_deref())
}
