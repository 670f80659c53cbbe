//! Liveness probe.

use actix_web::{HttpResponse, web};
use blog_core::domain::CategoryDeletePolicy;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// `postgres` or `memory`
    pub storage: &'static str,
    pub category_delete_policy: CategoryDeletePolicy,
}

/// GET /health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        storage: state.storage,
        category_delete_policy: state.categories.delete_policy(),
    })
}
