//! HTTP handlers and route configuration.

mod categories;
mod health;
mod posts;

#[cfg(test)]
mod tests;

use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Malformed bodies, query strings and ids all surface as plain-text 400s
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .route("/health", web::get().to(health::health_check))
    .service(
        web::scope("/v1")
            .service(
                web::scope("/categories")
                    .service(
                        web::resource("")
                            .route(web::get().to(categories::list))
                            .route(web::post().to(categories::create)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(categories::get))
                            .route(web::put().to(categories::rename))
                            .route(web::delete().to(categories::delete)),
                    )
                    .service(web::resource("/{id}/posts").route(web::get().to(categories::posts))),
            )
            .service(
                web::scope("/posts")
                    .service(
                        web::resource("")
                            .route(web::get().to(posts::list))
                            .route(web::post().to(posts::create)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(posts::get))
                            .route(web::put().to(posts::replace))
                            .route(web::patch().to(posts::patch))
                            .route(web::delete().to(posts::delete)),
                    ),
            ),
    );
}
