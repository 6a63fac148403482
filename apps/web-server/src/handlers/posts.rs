//! Blog post API - the create action and the tenant listing as JSON.

use actix_web::{HttpResponse, web};

use tenantblog_core::domain::{BlogPost, PostDraft};
use tenantblog_shared::dto::{BlogPostListResponse, BlogPostResponse, CreateBlogPostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::middleware::session::Session;
use crate::state::AppState;

fn to_response(post: BlogPost) -> BlogPostResponse {
    BlogPostResponse {
        id: post.id.to_string(),
        title: post.title,
        content: post.content,
        org_id: post.org_id.into_inner(),
        created_at: post.created_at.format("%Y-%m-%d").to_string(),
    }
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    session: Session,
    body: web::Json<CreateBlogPostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let tenant = session.tenant();

    let post = state
        .blog
        .create_post(tenant.as_ref(), PostDraft::new(req.title, req.content))
        .await?;

    tracing::info!(post_id = %post.id, org_id = %post.org_id, "Blog post created");

    Ok(HttpResponse::Created().json(to_response(post)))
}

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>, session: Session) -> AppResult<HttpResponse> {
    let tenant = session
        .tenant()
        .ok_or_else(|| AppError::BadRequest("No organization selected".to_string()))?;

    let posts = state.blog.list_posts(&tenant).await?;

    Ok(HttpResponse::Ok().json(BlogPostListResponse {
        org_id: tenant.org_id.into_inner(),
        posts: posts.into_iter().map(to_response).collect(),
    }))
}
