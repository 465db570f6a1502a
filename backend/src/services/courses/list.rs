use crate::admin::links;
use crate::db::Database;
use crate::error::AppResult;
use crate::store::counts;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::views::CourseRow;

pub async fn process(db: web::Data<Database>) -> impl Responder {
    match list_courses(&db) {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(e) => e.error_response(),
    }
}

pub fn list_courses(db: &Database) -> AppResult<Vec<CourseRow>> {
    let conn = db.connect()?;
    let rows = counts::list_courses_with_counts(&conn)?
        .into_iter()
        .map(|row| CourseRow {
            num_templates: links::templates_of_course(&row.course.code, row.num_templates),
            num_applications: links::applications_of_course(&row.course.code, row.num_applications),
            course: row.course,
        })
        .collect();
    Ok(rows)
}
