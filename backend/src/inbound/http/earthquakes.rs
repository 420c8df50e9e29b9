//! Earthquake API handlers. Strictly read-only.

use actix_web::{get, web};

use crate::domain::{DisasterId, Earthquake, Error};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// List every recorded earthquake.
#[utoipa::path(
    get,
    path = "/earthquakes",
    responses(
        (status = 200, description = "Earthquakes, newest first", body = [Earthquake]),
        (status = 500, description = "Internal server error")
    ),
    tags = ["earthquakes"],
    operation_id = "listEarthquakes",
    security([])
)]
#[get("/earthquakes")]
pub async fn list_earthquakes(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<Earthquake>>> {
    let earthquakes = state.earthquakes.list().await?;
    Ok(web::Json(earthquakes))
}

/// Fetch one earthquake record.
#[utoipa::path(
    get,
    path = "/earthquakes/{id}",
    params(("id" = i32, Path, description = "Disaster identifier")),
    responses(
        (status = 200, description = "Earthquake", body = Earthquake),
        (status = 404, description = "No such earthquake", body = Error),
        (status = 500, description = "Internal server error")
    ),
    tags = ["earthquakes"],
    operation_id = "getEarthquake",
    security([])
)]
#[get("/earthquakes/{id}")]
pub async fn get_earthquake(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<Earthquake>> {
    let id = DisasterId::new(path.into_inner());
    let earthquake = state
        .earthquakes
        .find_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("no such earthquake"))?;
    Ok(web::Json(earthquake))
}

#[cfg(test)]
mod tests {
    use crate::inbound::http::test_utils::{test_app, TestFixtures};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use serde_json::Value;

    #[actix_web::test]
    async fn listing_returns_seeded_earthquakes_newest_first() {
        let fixtures = TestFixtures::new();
        let app = actix_test::init_service(test_app(fixtures.state())).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/earthquakes")
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(res).await;
        let quakes = body.as_array().expect("array body");
        assert_eq!(quakes.len(), 2);
        assert_eq!(quakes[0]["location"], "Northridge, CA");
        assert_eq!(quakes[1]["location"], "Loma Prieta, CA");
    }

    #[actix_web::test]
    async fn detail_returns_one_earthquake() {
        let fixtures = TestFixtures::new();
        let app = actix_test::init_service(test_app(fixtures.state())).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/earthquakes/1")
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["natId"], 1);
        assert_eq!(body["magnitude"], 6.9);
    }

    #[actix_web::test]
    async fn unknown_earthquake_id_is_not_found() {
        let fixtures = TestFixtures::new();
        let app = actix_test::init_service(test_app(fixtures.state())).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/earthquakes/99")
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["code"], "not_found");
    }
}
