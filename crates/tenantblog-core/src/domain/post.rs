use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::OrgId;
use crate::error::DomainError;

/// Maximum title length in characters; mirrors the `varchar(100)` column.
pub const TITLE_MAX_CHARS: usize = 100;

/// BlogPost entity - a persisted article owned by exactly one organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub org_id: OrgId,
    pub created_at: NaiveDate,
}

impl BlogPost {
    /// Content truncated to `max_chars` characters, with an ellipsis when cut.
    pub fn preview(&self, max_chars: usize) -> String {
        match self.content.char_indices().nth(max_chars) {
            Some((cut, _)) => format!("{}…", self.content[..cut].trim_end()),
            None => self.content.clone(),
        }
    }
}

/// Title and content as submitted, before an organization is attached.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
}

impl PostDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Check every field, collecting all failures.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut errors = Vec::new();

        let title = self.title.trim();
        if title.is_empty() {
            errors.push("title must not be empty".to_string());
        } else if title.chars().count() > TITLE_MAX_CHARS {
            errors.push(format!(
                "title must be at most {TITLE_MAX_CHARS} characters"
            ));
        }

        if self.content.trim().is_empty() {
            errors.push("content must not be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(errors))
        }
    }

    /// Validate and bind the draft to an organization.
    pub fn into_new_post(self, org_id: OrgId) -> Result<NewBlogPost, DomainError> {
        self.validate()?;
        Ok(NewBlogPost {
            title: self.title.trim().to_string(),
            content: self.content,
            org_id,
        })
    }
}

/// A row to insert. `id` and `created_at` are assigned by storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlogPost {
    pub title: String,
    pub content: String,
    pub org_id: OrgId,
}
