use crate::db::Database;
use crate::services::in_transaction;
use crate::store::applications;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::requests::ApplicationDraft;

pub async fn process(
    db: web::Data<Database>,
    payload: web::Json<ApplicationDraft>,
) -> impl Responder {
    let draft = payload.into_inner();
    let result = in_transaction(&db, |conn| match draft.id {
        Some(id) => applications::update(conn, id, draft.template_id),
        None => applications::insert(conn, draft.template_id),
    });
    match result {
        Ok(application) => HttpResponse::Ok().json(application),
        Err(e) => {
            log::warn!("application not saved: {}", e);
            e.error_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::services::testing::{self, test_app};
    use crate::store::fixtures;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn application_is_recorded_under_its_template() {
        let fixture = testing::database();
        let template = {
            let conn = fixture.db.connect().unwrap();
            fixtures::course(&conn, "fellowship");
            fixtures::template(&conn, "fellowship", "Spring 2016")
        };
        let app = test::init_service(test_app!(fixture)).await;

        let req = test::TestRequest::post()
            .uri("/api/applications/save")
            .set_json(json!({"template_id": template}))
            .to_request();
        let saved: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(saved["template_id"], template);

        let req = test::TestRequest::get()
            .uri(&format!("/api/templates/{}", template))
            .to_request();
        let detail: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(detail["num_applications"]["count"], 1);
    }

    #[actix_web::test]
    async fn unknown_template_is_a_conflict() {
        let fixture = testing::database();
        let app = test::init_service(test_app!(fixture)).await;

        let req = test::TestRequest::post()
            .uri("/api/applications/save")
            .set_json(json!({"template_id": 999}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CONFLICT);
    }
}
