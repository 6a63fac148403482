//! HTML views rendered with askama.

use actix_web::{HttpResponse, http::StatusCode};
use askama::Template;

use tenantblog_core::domain::{BlogPost, Organization, TenantContext};

use crate::middleware::error::AppResult;

/// Characters of content shown on a feed card.
pub const PREVIEW_CHARS: usize = 280;

/// Header bar: who is signed in and which organization is active.
pub struct NavView {
    pub user_id: Option<String>,
    pub org_label: Option<String>,
}

impl NavView {
    pub fn new(user_id: Option<&str>, tenant: Option<&TenantContext>) -> Self {
        Self {
            user_id: user_id.map(String::from),
            org_label: tenant.map(|t| {
                t.org_slug
                    .clone()
                    .unwrap_or_else(|| t.org_id.to_string())
            }),
        }
    }
}

pub struct OrganizationView {
    pub id: String,
    pub name: String,
    pub initial: String,
}

impl From<&Organization> for OrganizationView {
    fn from(org: &Organization) -> Self {
        Self {
            id: org.id.to_string(),
            name: org.name.clone(),
            initial: org.initial(),
        }
    }
}

pub struct PostCardView {
    pub id: String,
    pub title: String,
    pub preview: String,
}

impl From<&BlogPost> for PostCardView {
    fn from(post: &BlogPost) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title.clone(),
            preview: post.preview(PREVIEW_CHARS),
        }
    }
}

#[derive(Template)]
#[template(path = "feed.html")]
pub struct FeedTemplate {
    pub nav: NavView,
    /// `None` renders the "No organization selected" placeholder.
    pub organization: Option<OrganizationView>,
    pub posts: Vec<PostCardView>,
}

/// Landing form lifecycle. The submitting phase is the in-flight POST itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Success { post_id: String },
    Error { messages: Vec<String> },
}

impl FormState {
    pub fn is_success(&self) -> bool {
        matches!(self, FormState::Success { .. })
    }

    pub fn post_id(&self) -> &str {
        match self {
            FormState::Success { post_id } => post_id,
            _ => "",
        }
    }

    pub fn messages(&self) -> &[String] {
        match self {
            FormState::Error { messages } => messages,
            _ => &[],
        }
    }
}

#[derive(Template)]
#[template(path = "landing.html")]
pub struct LandingTemplate {
    pub nav: NavView,
    pub slug: String,
    pub has_organization: bool,
    pub title: String,
    pub content: String,
    pub state: FormState,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub nav: NavView,
    pub status: u16,
    pub reason: String,
    pub message: String,
}

/// Render a template as an HTML response.
pub fn render<T: Template>(status: StatusCode, template: &T) -> AppResult<HttpResponse> {
    let body = template.render()?;
    Ok(HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(body))
}
