use crate::admin::links;
use crate::db::Database;
use crate::error::AppResult;
use crate::store::{counts, courses, templates};
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::views::{CourseDetail, TemplateLink};

/// `GET /api/courses/{code}`.
///
/// Templates are listed by name with a link to their own page; they cannot be
/// added or removed from here.
pub async fn process(db: web::Data<Database>, code: web::Path<String>) -> impl Responder {
    match get_course(&db, &code) {
        Ok(detail) => HttpResponse::Ok().json(detail),
        Err(e) => e.error_response(),
    }
}

pub fn get_course(db: &Database, code: &str) -> AppResult<CourseDetail> {
    let conn = db.connect()?;
    let course = courses::get(&conn, code)?;
    let num_templates = counts::num_templates(&conn, code)?;
    let num_applications = counts::num_applications_for_course(&conn, code)?;
    let templates = templates::list(&conn, Some(code))?
        .into_iter()
        .map(|t| TemplateLink {
            change_href: links::template_change(t.id),
            id: t.id,
            name: t.name,
        })
        .collect();

    Ok(CourseDetail {
        num_templates: links::templates_of_course(&course.code, num_templates),
        num_applications: links::applications_of_course(&course.code, num_applications),
        course,
        templates,
    })
}
