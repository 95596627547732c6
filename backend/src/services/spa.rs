//! Serves the compiled frontend from the binary. Unknown paths get
//! `index.html` so client-side routes survive a reload.

use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const INDEX: &str = "index.html";

pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { INDEX } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file(INDEX) {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header::CONTENT_TYPE;
    use actix_web::{test, web, App};

    #[actix_web::test]
    async fn client_routes_fall_back_to_index() {
        let app = test::init_service(App::new().default_service(web::route().to(serve_embedded))).await;

        for uri in ["/", "/forms", "/forms/12/edit", "/forms/12/submit", "/xlsplay"] {
            let response = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
            assert!(response.status().is_success(), "{} was not served", uri);
            let content_type = response.headers().get(CONTENT_TYPE).unwrap().to_str().unwrap();
            assert!(content_type.starts_with("text/html"), "{} served {}", uri, content_type);
        }
    }

    #[actix_web::test]
    async fn index_is_served_verbatim() {
        let app = test::init_service(App::new().default_service(web::route().to(serve_embedded))).await;
        let body = test::call_and_read_body(&app, test::TestRequest::get().uri("/forms/new").to_request()).await;
        let index = STATIC_DIR.get_file(INDEX).unwrap();
        assert_eq!(body.as_ref(), index.contents());
    }
}
