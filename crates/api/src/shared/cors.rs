use actix_cors::Cors;
use actix_web::{guard, http::header, web, HttpResponse};

const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";

/// Any origin may call the API.
///
/// Preflight requests are answered by `preflight` instead of the middleware,
/// which would reject an `OPTIONS` request that carries no `Origin`.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .disable_preflight()
}

async fn preflight() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .insert_header((header::ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS))
        .insert_header((header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"))
        .content_type("text/plain")
        .body("OK")
}

/// Answers `OPTIONS` on every path
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{tail:.*}")
            .guard(guard::Options())
            .to(preflight),
    );
}
