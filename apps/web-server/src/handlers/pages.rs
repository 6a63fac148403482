//! Server-rendered pages: organization landing and tenant feed.

use actix_web::{HttpRequest, HttpResponse, http::StatusCode, web};

use tenantblog_core::DomainError;
use tenantblog_core::domain::{PostDraft, TenantContext, TenantFeed};
use tenantblog_shared::dto::CreateBlogPostRequest;

use crate::middleware::error::{AppError, AppResult, PageResult};
use crate::middleware::origin::require_same_origin;
use crate::middleware::session::OptionalSession;
use crate::state::AppState;
use crate::views::{
    FeedTemplate, FormState, LandingTemplate, NavView, OrganizationView, PostCardView, render,
};

/// Active tenant for a landing page, rejecting a session switched to another org.
fn landing_tenant(session: &OptionalSession, slug: &str) -> AppResult<Option<TenantContext>> {
    let tenant = session.tenant();
    if let Some(t) = &tenant
        && !t.matches_slug(slug)
    {
        tracing::warn!(
            org_id = %t.org_id,
            slug = %slug,
            "Landing slug does not match active organization"
        );
        return Err(AppError::Forbidden(
            "The active organization does not match this page".to_string(),
        ));
    }
    Ok(tenant)
}

fn nav(session: &OptionalSession, tenant: Option<&TenantContext>) -> NavView {
    let user_id = session.0.as_ref().map(|s| s.claims.user_id.as_str());
    NavView::new(user_id, tenant)
}

/// GET /org/{slug}
pub async fn org_landing(
    session: OptionalSession,
    path: web::Path<String>,
) -> PageResult<HttpResponse> {
    let slug = path.into_inner();
    let tenant = landing_tenant(&session, &slug)?;

    Ok(render(
        StatusCode::OK,
        &LandingTemplate {
            nav: nav(&session, tenant.as_ref()),
            has_organization: tenant.is_some(),
            slug,
            title: String::new(),
            content: String::new(),
            state: FormState::Idle,
        },
    )?)
}

/// POST /org/{slug}
pub async fn submit_post(
    req: HttpRequest,
    state: web::Data<AppState>,
    session: OptionalSession,
    path: web::Path<String>,
    form: web::Form<CreateBlogPostRequest>,
) -> PageResult<HttpResponse> {
    require_same_origin(&req)?;
    let slug = path.into_inner();
    let tenant = landing_tenant(&session, &slug)?;
    let form = form.into_inner();

    let draft = PostDraft::new(form.title.clone(), form.content.clone());
    let (status, title, content, form_state) =
        match state.blog.create_post(tenant.as_ref(), draft).await {
            Ok(post) => {
                tracing::info!(post_id = %post.id, org_id = %post.org_id, "Blog post created");
                (
                    StatusCode::OK,
                    String::new(),
                    String::new(),
                    FormState::Success {
                        post_id: post.id.to_string(),
                    },
                )
            }
            Err(DomainError::Validation(messages)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                form.title,
                form.content,
                FormState::Error { messages },
            ),
            Err(DomainError::MissingOrganization) => (
                StatusCode::BAD_REQUEST,
                form.title,
                form.content,
                FormState::Error {
                    messages: vec!["No organization selected".to_string()],
                },
            ),
            Err(e) => return Err(e.into()),
        };

    Ok(render(
        status,
        &LandingTemplate {
            nav: nav(&session, tenant.as_ref()),
            has_organization: tenant.is_some(),
            slug,
            title,
            content,
            state: form_state,
        },
    )?)
}

/// GET /s/{subdomain}
pub async fn tenant_feed(
    state: web::Data<AppState>,
    session: OptionalSession,
    path: web::Path<String>,
) -> PageResult<HttpResponse> {
    let subdomain = path.into_inner();
    let tenant = session.tenant();
    tracing::debug!(
        subdomain = %subdomain,
        org_id = tenant.as_ref().map(|t| t.org_id.as_str()),
        "Rendering tenant feed"
    );

    let (organization, posts) = match state.blog.tenant_feed(tenant.as_ref()).await? {
        TenantFeed::NoOrganization => (None, Vec::new()),
        TenantFeed::Organization {
            organization,
            posts,
        } => (
            Some(OrganizationView::from(&organization)),
            posts.iter().map(PostCardView::from).collect(),
        ),
    };

    Ok(render(
        StatusCode::OK,
        &FeedTemplate {
            nav: nav(&session, tenant.as_ref()),
            organization,
            posts,
        },
    )?)
}
