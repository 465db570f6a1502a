use crate::admin::links;
use crate::db::Database;
use crate::error::AppResult;
use crate::store::counts;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::requests::TemplateFilter;
use common::views::TemplateRow;

pub async fn process(
    db: web::Data<Database>,
    filter: web::Query<TemplateFilter>,
) -> impl Responder {
    match list_templates(&db, filter.course.as_deref()) {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(e) => e.error_response(),
    }
}

pub fn list_templates(db: &Database, course_code: Option<&str>) -> AppResult<Vec<TemplateRow>> {
    let conn = db.connect()?;
    let rows = counts::list_templates_with_counts(&conn, course_code)?
        .into_iter()
        .map(|row| TemplateRow {
            num_applications: links::applications_of_template(
                row.template.id,
                row.num_applications,
            ),
            template: row.template,
        })
        .collect();
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use crate::services::testing::{self, test_app};
    use crate::store::fixtures;
    use actix_web::test;
    use serde_json::Value;

    #[actix_web::test]
    async fn course_filter_lists_only_that_course_with_count_links() {
        let fixture = testing::database();
        let (spring, fall) = {
            let conn = fixture.db.connect().unwrap();
            fixtures::course(&conn, "fellowship");
            fixtures::course(&conn, "prep");
            let spring = fixtures::template(&conn, "fellowship", "Spring 2016");
            let fall = fixtures::template(&conn, "fellowship", "Fall 2016");
            let prep = fixtures::template(&conn, "prep", "Prep 2016");
            fixtures::application(&conn, fall);
            fixtures::application(&conn, fall);
            fixtures::application(&conn, prep);
            (spring, fall)
        };
        let app = test::init_service(test_app!(fixture)).await;

        let req = test::TestRequest::get().uri("/api/templates?course=fellowship").to_request();
        let rows: Vec<Value> = test::call_and_read_body_json(&app, req).await;

        let listed: Vec<_> = rows
            .iter()
            .map(|row| {
                (
                    row["id"].as_i64().unwrap(),
                    row["num_applications"]["count"].as_i64().unwrap(),
                    row["num_applications"]["href"].as_str().unwrap().to_string(),
                )
            })
            .collect();
        assert_eq!(listed.len(), 2);
        assert!(listed.contains(&(spring, 0, format!("/api/applications?template={}", spring))));
        assert!(listed.contains(&(fall, 2, format!("/api/applications?template={}", fall))));
    }

    #[actix_web::test]
    async fn without_filter_every_template_is_listed() {
        let fixture = testing::database();
        {
            let conn = fixture.db.connect().unwrap();
            fixtures::course(&conn, "fellowship");
            fixtures::course(&conn, "prep");
            fixtures::template(&conn, "fellowship", "Spring 2016");
            fixtures::template(&conn, "prep", "Prep 2016");
        }
        let app = test::init_service(test_app!(fixture)).await;

        let req = test::TestRequest::get().uri("/api/templates").to_request();
        let rows: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(rows.len(), 2);
    }
}
