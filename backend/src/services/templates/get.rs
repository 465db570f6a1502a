use crate::admin::links;
use crate::db::Database;
use crate::error::AppResult;
use crate::store::{counts, sections, templates};
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::views::TemplateDetail;

pub async fn process(db: web::Data<Database>, template_id: web::Path<i64>) -> impl Responder {
    match get_template(&db, *template_id) {
        Ok(detail) => HttpResponse::Ok().json(detail),
        Err(e) => e.error_response(),
    }
}

pub fn get_template(db: &Database, template_id: i64) -> AppResult<TemplateDetail> {
    let conn = db.connect()?;
    let template = templates::get(&conn, template_id)?;
    let num_applications = counts::num_applications_for_template(&conn, template_id)?;
    let sections = sections::list(&conn, Some(template_id))?;
    Ok(TemplateDetail {
        template,
        num_applications: links::applications_of_template(template_id, num_applications),
        sections,
    })
}

#[cfg(test)]
mod tests {
    use crate::services::testing::{self, test_app};
    use crate::store::fixtures;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::Value;

    #[actix_web::test]
    async fn template_page_lists_sections_and_links_its_applications() {
        let fixture = testing::database();
        let (spring, fall) = {
            let conn = fixture.db.connect().unwrap();
            fixtures::course(&conn, "fellowship");
            let spring = fixtures::template(&conn, "fellowship", "Spring 2016");
            let fall = fixtures::template(&conn, "fellowship", "Fall 2016");
            fixtures::section(&conn, spring, "about");
            fixtures::section(&conn, spring, "essays");
            fixtures::application(&conn, spring);
            fixtures::application(&conn, spring);
            fixtures::application(&conn, fall);
            (spring, fall)
        };
        let app = test::init_service(test_app!(fixture)).await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/templates/{}", spring))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["name"], "Spring 2016");
        let codes: Vec<_> = body["sections"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["code"].as_str().unwrap())
            .collect();
        assert_eq!(codes, vec!["about", "essays"]);
        assert_eq!(body["num_applications"]["count"], 2);
        let href = body["num_applications"]["href"].as_str().unwrap().to_string();
        assert_eq!(href, format!("/api/applications?template={}", spring));

        let req = test::TestRequest::get().uri(&href).to_request();
        let applications: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(applications.len(), 2);
        assert!(applications.iter().all(|a| a["template_id"] == spring));
        assert!(applications.iter().all(|a| a["template_id"] != fall));
        assert!(applications.iter().all(|a| a["course_code"] == "fellowship"));
    }

    #[actix_web::test]
    async fn missing_template_is_not_found() {
        let fixture = testing::database();
        let app = test::init_service(test_app!(fixture)).await;
        let req = test::TestRequest::get().uri("/api/templates/404").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }
}
