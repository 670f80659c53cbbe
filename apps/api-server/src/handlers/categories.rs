//! Category handlers.

use actix_web::{HttpResponse, http::header, web};
use uuid::Uuid;

use blog_core::domain::Category;
use blog_shared::dto::{CategoryDto, CategoryQuery, CategoryRequest, PostDto};

use super::posts::post_dto;
use crate::middleware::error::AppResult;
use crate::state::AppState;

pub(crate) fn category_dto(category: Category) -> CategoryDto {
    CategoryDto {
        id: category.id,
        name: category.name,
    }
}

/// GET /v1/categories?name=
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<CategoryQuery>,
) -> AppResult<HttpResponse> {
    let categories = state.categories.list_all(query.name.as_deref()).await?;

    let body: Vec<CategoryDto> = categories.into_iter().map(category_dto).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /v1/categories/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let category = state.categories.get_by_id(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(category_dto(category)))
}

/// POST /v1/categories
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CategoryRequest>,
) -> AppResult<HttpResponse> {
    let category = state.categories.create(&body.name).await?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/v1/categories/{}", category.id)))
        .json(category_dto(category)))
}

/// PUT /v1/categories/{id}
pub async fn rename(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<CategoryRequest>,
) -> AppResult<HttpResponse> {
    let category = state
        .categories
        .rename(path.into_inner(), &body.name)
        .await?;

    Ok(HttpResponse::Ok().json(category_dto(category)))
}

/// DELETE /v1/categories/{id}
pub async fn delete(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    state.categories.delete(path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// GET /v1/categories/{id}/posts
pub async fn posts(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_by_category(path.into_inner()).await?;

    let body: Vec<PostDto> = posts.into_iter().map(post_dto).collect();
    Ok(HttpResponse::Ok().json(body))
}
