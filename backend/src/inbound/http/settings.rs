//! Settings endpoint, declared but unimplemented.
//!
//! The original application shipped this route with its body commented
//! out. It is kept as an explicit `501 Not Implemented` so clients get a
//! defined answer instead of silence; no behaviour is invented for it.

use actix_web::{post, web, HttpResponse};
use tracing::debug;

/// Placeholder for per-user setting updates.
#[utoipa::path(
    post,
    path = "/settings/{code}",
    params(("code" = String, Path, description = "Setting code")),
    responses((status = 501, description = "Setting updates are not implemented")),
    tags = ["settings"],
    operation_id = "updateSetting"
)]
#[post("/settings/{code}")]
pub async fn update_setting(path: web::Path<String>) -> HttpResponse {
    debug!(code = %path.into_inner(), "ignoring unimplemented setting update");
    HttpResponse::NotImplemented().finish()
}

#[cfg(test)]
mod tests {
    use crate::inbound::http::test_utils::{test_app, TestFixtures};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;

    #[actix_web::test]
    async fn setting_updates_answer_not_implemented() {
        let fixtures = TestFixtures::new();
        let app = actix_test::init_service(test_app(fixtures.state())).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/settings/magnitude-threshold")
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_IMPLEMENTED);
    }
}
