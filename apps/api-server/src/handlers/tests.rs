use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use blog_core::domain::CategoryDeletePolicy;
use blog_shared::dto::{CategoryDto, PostDto};
use serde_json::json;

use super::configure_routes;
use crate::middleware::error::UNEXPECTED_ERROR_MESSAGE;
use crate::observability::{REQUEST_ID_HEADER, RequestIdMiddleware};
use crate::state::AppState;

macro_rules! blog_app {
    ($policy:expr) => {
        test::init_service(
            App::new()
                .wrap(RequestIdMiddleware)
                .app_data(web::Data::new(AppState::in_memory($policy)))
                .configure(configure_routes),
        )
        .await
    };
}

macro_rules! create_category {
    ($app:expr, $name:expr) => {{
        let req = test::TestRequest::post()
            .uri("/v1/categories")
            .set_json(json!({ "name": $name }))
            .to_request();
        let created: CategoryDto = test::call_and_read_body_json($app, req).await;
        created
    }};
}

macro_rules! create_post {
    ($app:expr, $body:expr) => {{
        let req = test::TestRequest::post()
            .uri("/v1/posts")
            .set_json($body)
            .to_request();
        let created: PostDto = test::call_and_read_body_json($app, req).await;
        created
    }};
}

#[actix_web::test]
async fn test_blog_walkthrough() {
    let app = blog_app!(CategoryDeletePolicy::Detach);

    // Create a category
    let req = test::TestRequest::post()
        .uri("/v1/categories")
        .set_json(json!({ "name": "Tech" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let location = resp.headers().get(header::LOCATION).unwrap().clone();
    let tech: CategoryDto = test::read_body_json(resp).await;
    assert_eq!(tech.name, "Tech");
    assert_eq!(location, format!("/v1/categories/{}", tech.id).as_str());

    // Same name, different case
    let req = test::TestRequest::post()
        .uri("/v1/categories")
        .set_json(json!({ "name": "TECH" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body = test::read_body(resp).await;
    assert_eq!(body, "Category with name 'TECH' already exists");

    // Create a post in it
    let req = test::TestRequest::post()
        .uri("/v1/posts")
        .set_json(json!({ "title": "A", "content": "B", "categoryId": tech.id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let location = resp.headers().get(header::LOCATION).unwrap().clone();
    let post: PostDto = test::read_body_json(resp).await;
    assert_eq!(location, format!("/v1/posts/{}", post.id).as_str());

    let req = test::TestRequest::get()
        .uri(&format!("/v1/posts/{}", post.id))
        .to_request();
    let fetched: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        fetched,
        json!({
            "id": post.id,
            "title": "A",
            "content": "B",
            "createdDate": chrono::Utc::now().date_naive(),
            "categoryId": tech.id,
        })
    );

    // Deleting the category leaves the post in place
    let req = test::TestRequest::delete()
        .uri(&format!("/v1/categories/{}", tech.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri(&format!("/v1/categories/{}", tech.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri(&format!("/v1/posts/{}", post.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_missing_category_is_plain_text_404() {
    let app = blog_app!(CategoryDeletePolicy::Detach);
    let id = uuid::Uuid::new_v4();

    let req = test::TestRequest::get()
        .uri(&format!("/v1/categories/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/plain; charset=utf-8"
    );
    let body = test::read_body(resp).await;
    assert_eq!(body, format!("Category not found with id: {id}").as_bytes());
}

#[actix_web::test]
async fn test_post_with_unknown_category_is_rejected() {
    let app = blog_app!(CategoryDeletePolicy::Detach);

    let req = test::TestRequest::post()
        .uri("/v1/posts")
        .set_json(json!({ "title": "A", "content": "B", "categoryId": uuid::Uuid::new_v4() }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri("/v1/posts").to_request();
    let posts: Vec<PostDto> = test::call_and_read_body_json(&app, req).await;
    assert!(posts.is_empty());
}

#[actix_web::test]
async fn test_patch_and_put_posts() {
    let app = blog_app!(CategoryDeletePolicy::Detach);
    let tech = create_category!(&app, "Tech");
    let food = create_category!(&app, "Food");
    let post = create_post!(
        &app,
        json!({ "title": "A", "content": "B", "categoryId": tech.id })
    );

    // PATCH only the title
    let req = test::TestRequest::patch()
        .uri(&format!("/v1/posts/{}", post.id))
        .set_json(json!({ "title": "A2" }))
        .to_request();
    let patched: PostDto = test::call_and_read_body_json(&app, req).await;
    assert_eq!(patched.title, "A2");
    assert_eq!(patched.content, "B");
    assert_eq!(patched.category_id, tech.id);

    // PUT requires every field
    let req = test::TestRequest::put()
        .uri(&format!("/v1/posts/{}", post.id))
        .set_json(json!({ "title": "only title" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::put()
        .uri(&format!("/v1/posts/{}", post.id))
        .set_json(json!({ "title": "T", "content": "C", "categoryId": food.id }))
        .to_request();
    let replaced: PostDto = test::call_and_read_body_json(&app, req).await;
    assert_eq!(replaced.title, "T");
    assert_eq!(replaced.content, "C");
    assert_eq!(replaced.category_id, food.id);
    assert_eq!(replaced.created_date, post.created_date);

    // Unknown post
    let req = test::TestRequest::patch()
        .uri(&format!("/v1/posts/{}", uuid::Uuid::new_v4()))
        .set_json(json!({ "title": "x" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_post_filters() {
    let app = blog_app!(CategoryDeletePolicy::Detach);
    let tech = create_category!(&app, "Tech");

    create_post!(
        &app,
        json!({ "title": "Rust", "content": "ownership", "categoryId": tech.id, "createdDate": "2024-03-10" })
    );
    create_post!(
        &app,
        json!({ "title": "Paris", "content": "travel notes", "categoryId": tech.id, "createdDate": "2024-03-11" })
    );

    let req = test::TestRequest::get().uri("/v1/posts").to_request();
    let all: Vec<PostDto> = test::call_and_read_body_json(&app, req).await;
    let titles: Vec<&str> = all.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Paris", "Rust"]);

    let req = test::TestRequest::get()
        .uri("/v1/posts?date=2024-03-10")
        .to_request();
    let by_date: Vec<PostDto> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(by_date.len(), 1);
    assert_eq!(by_date[0].title, "Rust");

    let req = test::TestRequest::get()
        .uri("/v1/posts?value=TRAVEL")
        .to_request();
    let searched: Vec<PostDto> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(searched.len(), 1);
    assert_eq!(searched[0].title, "Paris");

    let req = test::TestRequest::get()
        .uri("/v1/posts?date=&value=")
        .to_request();
    let unfiltered: Vec<PostDto> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(unfiltered.len(), 2);

    let req = test::TestRequest::get()
        .uri("/v1/posts?date=10-03-2024")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Last day chrono can represent
    let req = test::TestRequest::get()
        .uri("/v1/posts?date=%2B262142-12-31")
        .to_request();
    let far_future: Vec<PostDto> = test::call_and_read_body_json(&app, req).await;
    assert!(far_future.is_empty());
}

#[actix_web::test]
async fn test_category_listing_and_posts() {
    let app = blog_app!(CategoryDeletePolicy::Detach);
    let tech = create_category!(&app, "Tech");
    create_category!(&app, "Travel");
    create_post!(&app, json!({ "title": "A", "content": "B", "categoryId": tech.id }));

    let req = test::TestRequest::get()
        .uri("/v1/categories?name=tec")
        .to_request();
    let filtered: Vec<CategoryDto> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(filtered, vec![tech.clone()]);

    let req = test::TestRequest::get().uri("/v1/categories").to_request();
    let all: Vec<CategoryDto> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(all.len(), 2);

    let req = test::TestRequest::get()
        .uri(&format!("/v1/categories/{}/posts", tech.id))
        .to_request();
    let posts: Vec<PostDto> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(posts.len(), 1);

    let req = test::TestRequest::get()
        .uri(&format!("/v1/categories/{}/posts", uuid::Uuid::new_v4()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::put()
        .uri(&format!("/v1/categories/{}", tech.id))
        .set_json(json!({ "name": "Technology" }))
        .to_request();
    let renamed: CategoryDto = test::call_and_read_body_json(&app, req).await;
    assert_eq!(renamed.name, "Technology");
    assert_eq!(renamed.id, tech.id);
}

#[actix_web::test]
async fn test_reject_policy_returns_conflict() {
    let app = blog_app!(CategoryDeletePolicy::Reject);
    let tech = create_category!(&app, "Tech");
    let post = create_post!(&app, json!({ "title": "A", "content": "B", "categoryId": tech.id }));

    let req = test::TestRequest::delete()
        .uri(&format!("/v1/categories/{}", tech.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let req = test::TestRequest::delete()
        .uri(&format!("/v1/posts/{}", post.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::delete()
        .uri(&format!("/v1/categories/{}", tech.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[actix_web::test]
async fn test_cascade_policy_removes_posts() {
    let app = blog_app!(CategoryDeletePolicy::Cascade);
    let tech = create_category!(&app, "Tech");
    let post = create_post!(&app, json!({ "title": "A", "content": "B", "categoryId": tech.id }));

    let req = test::TestRequest::delete()
        .uri(&format!("/v1/categories/{}", tech.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri(&format!("/v1/posts/{}", post.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_malformed_input_is_bad_request() {
    let app = blog_app!(CategoryDeletePolicy::Detach);

    let req = test::TestRequest::get()
        .uri("/v1/posts/not-a-uuid")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/v1/categories")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/v1/categories")
        .set_json(json!({ "name": "   " }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = test::read_body(resp).await;
    assert_ne!(body, UNEXPECTED_ERROR_MESSAGE);
}

#[actix_web::test]
async fn test_health_and_request_id() {
    let app = blog_app!(CategoryDeletePolicy::Detach);

    let req = test::TestRequest::get()
        .uri("/health")
        .insert_header((REQUEST_ID_HEADER, "trace-me"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get("x-request-id").unwrap(), "trace-me");

    let health: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(health["status"], "ok");
    assert_eq!(health["storage"], "memory");
    assert_eq!(health["categoryDeletePolicy"], "detach");

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.headers().contains_key("x-request-id"));
}
