//! HTTP handlers and route configuration.

mod blogs;
mod health;
mod login;
mod stats;
mod users;

use actix_web::{HttpResponse, web};
use bloglist_shared::ErrorResponse;
use uuid::Uuid;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(
            web::scope("/api")
                // Public routes
                .route("/health", web::get().to(health::health_check))
                .route("/stats", web::get().to(stats::summary))
                .route("/login", web::post().to(login::login))
                .service(
                    web::scope("/blogs")
                        .route("", web::get().to(blogs::list))
                        .route("", web::post().to(blogs::create))
                        .route("/{id}", web::get().to(blogs::get))
                        .route("/{id}", web::put().to(blogs::update))
                        .route("/{id}", web::delete().to(blogs::delete)),
                )
                .service(
                    web::scope("/users")
                        .route("", web::get().to(users::list))
                        .route("", web::post().to(users::register)),
                ),
        )
        .default_service(web::to(unknown_endpoint));
}

/// Malformed JSON bodies get the same error shape as everything else.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

async fn unknown_endpoint() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::unknown_endpoint())
}

/// Parse a record id from the path.
pub(crate) fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::MalformattedId)
}

#[cfg(test)]
mod tests;
