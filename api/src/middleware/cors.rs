//! CORS middleware configuration for the browser frontend.

use actix_cors::Cors;

use ag_shared::config::CorsConfig;

/// Creates a CORS middleware instance from the configured origins, methods
/// and headers.
pub fn create_cors(config: &CorsConfig) -> Cors {
    tracing::debug!(origins = ?config.allowed_origins, "Configuring CORS");

    let mut cors = Cors::default()
        .allowed_methods(config.allowed_methods.iter().map(String::as_str))
        .allowed_headers(config.allowed_headers.iter().map(String::as_str))
        .max_age(config.max_age);

    for origin in &config.allowed_origins {
        cors = cors.allowed_origin(origin);
    }

    if config.allow_credentials {
        cors = cors.supports_credentials();
    }

    cors
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::header, test, web, App, HttpResponse};

    #[actix_web::test]
    async fn test_configured_origin_is_allowed() {
        let config = CorsConfig::for_frontend("http://localhost:3000");
        let app = test::init_service(
            App::new()
                .wrap(create_cors(&config))
                .route("/", web::get().to(HttpResponse::Ok)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, "http://localhost:3000"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:3000"
        );
        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
            "true"
        );
    }

    #[actix_web::test]
    async fn test_unknown_origin_gets_no_allow_header() {
        let config = CorsConfig::for_frontend("http://localhost:3000");
        let app = test::init_service(
            App::new()
                .wrap(create_cors(&config))
                .route("/", web::get().to(HttpResponse::Ok)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, "http://evil.example"))
            .to_request();
        let resp = test::try_call_service(&app, req).await;

        if let Ok(resp) = resp {
            assert!(resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
        }
    }
}
