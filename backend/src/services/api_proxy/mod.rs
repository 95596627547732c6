//! # API Gateway
//!
//! Every request under `/api` is relayed to the REST backend configured with
//! `--api-upstream`: same method, path, query string, body, and the
//! `Content-Type`/`Accept` headers. The upstream status, content type and
//! body come back unchanged, so the browser client sees exactly what the
//! REST backend said.
//!
//! When the upstream cannot be reached the gateway answers `502` with a
//! `{"detail": ...}` body.

mod error;
mod forward;

use actix_web::web::{route, scope};
use actix_web::Scope;

pub use forward::Upstream;

const API_PATH: &str = "/api";

pub fn configure_routes() -> Scope {
    scope(API_PATH).default_service(route().to(forward::process))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use actix_web::http::header::CONTENT_TYPE;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App, HttpRequest, HttpResponse, HttpServer};
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    use super::*;
    use crate::services::spa::serve_embedded;

    async fn echo(req: HttpRequest, body: String) -> HttpResponse {
        let header = |name: &str| {
            req.headers()
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned)
        };
        HttpResponse::Created().json(json!({
            "method": req.method().as_str(),
            "path": req.path(),
            "query": req.query_string(),
            "content_type": header("content-type"),
            "accept": header("accept"),
            "body": body,
        }))
    }

    /// Throwaway REST backend on an ephemeral port.
    async fn spawn_upstream() -> String {
        let server = HttpServer::new(|| {
            App::new()
                .route(
                    "/api/forms/",
                    web::get().to(|| async { HttpResponse::Ok().json(json!([])) }),
                )
                .route(
                    "/api/forms/404/",
                    web::get().to(|| async {
                        HttpResponse::NotFound().json(json!({"detail": "Not found."}))
                    }),
                )
                .route(
                    "/api/forms/{id}/",
                    web::delete().to(|| async { HttpResponse::NoContent().finish() }),
                )
                .default_service(web::route().to(echo))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();
        let address = server.addrs()[0];
        actix_web::rt::spawn(server.run());
        format!("http://{}/", address)
    }

    fn gateway_app(
        upstream: Upstream,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(upstream))
            .service(configure_routes())
            .default_service(web::route().to(serve_embedded))
    }

    fn upstream(base_url: &str) -> Upstream {
        Upstream::new(base_url, Duration::from_secs(5)).unwrap()
    }

    #[actix_web::test]
    async fn trailing_slash_is_dropped_from_base_url() {
        assert_eq!(upstream("http://forms-api:8000/").base_url(), "http://forms-api:8000");
    }

    #[actix_web::test]
    async fn relays_json_with_upstream_status() {
        let base_url = spawn_upstream().await;
        let app = test::init_service(gateway_app(upstream(&base_url))).await;

        let response =
            test::call_service(&app, test::TestRequest::get().uri("/api/forms/").to_request()).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body, json!([]));

        let response =
            test::call_service(&app, test::TestRequest::get().uri("/api/forms/404/").to_request())
                .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body, json!({"detail": "Not found."}));
    }

    #[actix_web::test]
    async fn relays_empty_no_content() {
        let base_url = spawn_upstream().await;
        let app = test::init_service(gateway_app(upstream(&base_url))).await;

        let response =
            test::call_service(&app, test::TestRequest::delete().uri("/api/forms/3/").to_request())
                .await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(test::read_body(response).await.is_empty());
    }

    #[actix_web::test]
    async fn forwards_method_query_headers_and_body() {
        let base_url = spawn_upstream().await;
        let app = test::init_service(gateway_app(upstream(&base_url))).await;

        let request = test::TestRequest::post()
            .uri("/api/forms/1/submissions/?source=web")
            .insert_header((CONTENT_TYPE, "text/xml; charset=utf-8"))
            .insert_header(("accept", "application/json"))
            .set_payload("<data><field>value</field></data>")
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let echoed: Value = test::read_body_json(response).await;
        assert_eq!(
            echoed,
            json!({
                "method": "POST",
                "path": "/api/forms/1/submissions/",
                "query": "source=web",
                "content_type": "text/xml; charset=utf-8",
                "accept": "application/json",
                "body": "<data><field>value</field></data>",
            })
        );
    }

    #[actix_web::test]
    async fn unreachable_upstream_is_a_bad_gateway_with_detail() {
        let app = test::init_service(gateway_app(upstream("http://127.0.0.1:1"))).await;

        let response =
            test::call_service(&app, test::TestRequest::get().uri("/api/forms/").to_request()).await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body: Value = test::read_body_json(response).await;
        let detail = body["detail"].as_str().unwrap();
        assert!(detail.starts_with("Upstream API unavailable: "), "{}", detail);
    }

    #[actix_web::test]
    async fn non_api_paths_are_left_to_the_spa() {
        let app = test::init_service(gateway_app(upstream("http://127.0.0.1:1"))).await;

        let response =
            test::call_service(&app, test::TestRequest::get().uri("/forms/1/edit").to_request())
                .await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
