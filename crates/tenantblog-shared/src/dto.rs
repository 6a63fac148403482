//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Request to create a blog post in the caller's active organization.
///
/// Also the shape of the landing page form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateBlogPostRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// A stored blog post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub org_id: String,
    /// ISO date (`YYYY-MM-DD`).
    pub created_at: String,
}

/// Posts of one organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPostListResponse {
    pub org_id: String,
    pub posts: Vec<BlogPostResponse>,
}
