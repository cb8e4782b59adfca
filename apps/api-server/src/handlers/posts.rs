//! Post handlers: the list page, the detail page and the create form.

use actix_web::{HttpResponse, http::header, web};
use serde::Serialize;

use blognest_core::domain::{Block, Post, render};
use blognest_core::forms::PostForm;
use blognest_shared::ApiResponse;
use blognest_shared::dto::CreatePostRequest;

use crate::middleware::error::AppResult;
use crate::observability::RequestId;
use crate::state::AppState;

/// A post with its body broken into display blocks.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetail {
    #[serde(flatten)]
    pub post: Post,
    pub display_date: String,
    pub blocks: Vec<Block>,
}

impl From<Post> for PostDetail {
    fn from(post: Post) -> Self {
        Self {
            display_date: post.display_date(),
            blocks: render(&post.content),
            post,
        }
    }
}

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.posts().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(&*posts)))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.posts.require_post(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(PostDetail::from(post))))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let session_author = state.session.current_user().await.map(|user| user.name);
    let draft = PostForm {
        title: req.title,
        content: req.content,
        featured_image: req.featured_image,
        tags: req.tags,
        author: req.author,
    }
    .into_new_post(session_author.as_deref())?;

    let post = state.posts.add_post(draft).await?;
    tracing::debug!(request_id = %request_id.as_str(), post_id = %post.id, "Published from form");

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/posts/{}", post.id)))
        .json(ApiResponse::ok(post)))
}
