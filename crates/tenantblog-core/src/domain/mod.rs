//! Domain entities - the core business objects.

mod organization;
mod post;
mod tenant;

pub use organization::{OrgId, Organization};
pub use post::{BlogPost, NewBlogPost, PostDraft, TITLE_MAX_CHARS};
pub use tenant::{TenantContext, TenantFeed};
