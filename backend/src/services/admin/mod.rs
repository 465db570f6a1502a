//! # Admin Registry Routes
//!
//! *   **`GET /api/admin/registry`**: every registered model admin, in registration order.
//! *   **`GET /api/admin/registry/{model}`**: one of them, by snake_case entity name
//!     (e.g. `application_template`).

use crate::admin::registry::{AdminRegistry, EntityKind};
use crate::error::AppError;
use actix_web::web::{get, scope};
use actix_web::{web, HttpResponse, Responder, ResponseError, Scope};

const API_PATH: &str = "/api/admin";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/registry", get().to(list))
        .route("/registry/{model}", get().to(detail))
}

async fn list(registry: web::Data<AdminRegistry>) -> impl Responder {
    HttpResponse::Ok().json(registry.entries())
}

async fn detail(
    registry: web::Data<AdminRegistry>,
    model: web::Path<EntityKind>,
) -> impl Responder {
    match registry.get(*model) {
        Some(entry) => HttpResponse::Ok().json(entry),
        None => AppError::not_found("model admin", format!("{:?}", *model)).error_response(),
    }
}

#[cfg(test)]
mod tests {
    use crate::services::testing::{self, test_app};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::Value;

    #[actix_web::test]
    async fn course_admin_disables_template_inline_edits() {
        let fixture = testing::database();
        let app = test::init_service(test_app!(fixture)).await;

        let req = test::TestRequest::get().uri("/api/admin/registry/course").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let inline = &body["inlines"][0];
        assert_eq!(inline["model"], "application_template");
        assert_eq!(inline["can_add"], false);
        assert_eq!(inline["can_delete"], false);
    }

    #[actix_web::test]
    async fn template_admin_offers_copy_action() {
        let fixture = testing::database();
        let app = test::init_service(test_app!(fixture)).await;

        let req = test::TestRequest::get()
            .uri("/api/admin/registry/application_template")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["actions"][0]["name"], "copy_templates");
        assert_eq!(body["actions"][0]["endpoint"], "/api/templates/actions/copy");
    }

    #[actix_web::test]
    async fn question_admin_offers_type_labels() {
        let fixture = testing::database();
        let app = test::init_service(test_app!(fixture)).await;

        let req = test::TestRequest::get().uri("/api/admin/registry/question").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let choices = &body["choices"][0];
        assert_eq!(choices["field"], "question_type");
        assert_eq!(choices["options"][0]["value"], "boolean");
        assert_eq!(choices["options"][0]["label"], "Yes/No");
    }

    #[actix_web::test]
    async fn unknown_model_is_not_found() {
        let fixture = testing::database();
        let app = test::init_service(test_app!(fixture)).await;

        let req = test::TestRequest::get().uri("/api/admin/registry/phone").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }
}
