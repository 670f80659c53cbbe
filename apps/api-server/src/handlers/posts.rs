//! Post handlers.

use actix_web::{HttpResponse, http::header, web};
use chrono::NaiveTime;
use uuid::Uuid;

use blog_core::domain::{NewPost, Post, PostChanges};
use blog_shared::dto::{
    CreatePostRequest, PatchPostRequest, PostDto, PostQuery, UpdatePostRequest,
};

use crate::middleware::error::AppResult;
use crate::state::AppState;

pub(crate) fn post_dto(post: Post) -> PostDto {
    PostDto {
        id: post.id,
        title: post.title,
        content: post.content,
        created_date: post.created_at.date_naive(),
        category_id: post.category_id,
    }
}

/// GET /v1/posts?date=&value=
///
/// `date` filters by creation day and wins over `value`, which searches
/// titles and contents. Without either, every post is returned.
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<PostQuery>,
) -> AppResult<HttpResponse> {
    let PostQuery { date, value } = query.into_inner();

    let posts = match (date, value.as_deref().map(str::trim)) {
        (Some(date), _) => state.posts.list_by_date(date).await?,
        (None, Some(value)) if !value.is_empty() => {
            state.posts.search_by_title_or_content(value).await?
        }
        _ => state.posts.list_all().await?,
    };

    let body: Vec<PostDto> = posts.into_iter().map(post_dto).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /v1/posts/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let post = state.posts.get_by_id(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(post_dto(post)))
}

/// POST /v1/posts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let post = state
        .posts
        .create(NewPost {
            title: req.title,
            content: req.content,
            category_id: req.category_id,
            created_at: req
                .created_date
                .map(|date| date.and_time(NaiveTime::MIN).and_utc()),
        })
        .await?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/v1/posts/{}", post.id)))
        .json(post_dto(post)))
}

/// PUT /v1/posts/{id}
pub async fn replace(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let changes = PostChanges {
        title: Some(req.title),
        content: Some(req.content),
        category_id: Some(req.category_id),
    };

    let post = state.posts.update(path.into_inner(), changes).await?;

    Ok(HttpResponse::Ok().json(post_dto(post)))
}

/// PATCH /v1/posts/{id}
pub async fn patch(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<PatchPostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let changes = PostChanges {
        title: req.title,
        content: req.content,
        category_id: req.category_id,
    };

    let post = state.posts.update(path.into_inner(), changes).await?;

    Ok(HttpResponse::Ok().json(post_dto(post)))
}

/// DELETE /v1/posts/{id}
pub async fn delete(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    state.posts.delete(path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}
