//! Post update requests: validation and application.
//!
//! An [`UpdateRequest`] arrives from a caller as plain text fields. [`UpdateRequest::validate`]
//! turns it into a [`ValidRequest`], the only form the post store accepts, and
//! [`ValidRequest::apply_to`] computes the edited post without touching the original.
//!
//! Nothing here logs, blocks or keeps state between calls.

use crate::model::post::Post;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const MUST_NOT_BE_EMPTY: &str = "must not be empty";

/// A rejected field and why.
///
/// Displays as `"<field> <reason>"`, e.g. `title must not be empty`. Field names use
/// the wire spelling (`updatedBy`, not `updated_by`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[error("{field} {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: &'static str,
}

impl ValidationError {
    pub fn empty(field: &'static str) -> Self {
        Self {
            field,
            reason: MUST_NOT_BE_EMPTY,
        }
    }
}

/// Returns `value` trimmed, or an error naming `field` if nothing is left.
pub(crate) fn require_non_blank<'a>(
    field: &'static str,
    value: &'a str,
) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty(field));
    }
    Ok(trimmed)
}

/// Proposed new title and content for a post, plus who is making the edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    pub title: String,
    pub content: String,
    pub updated_by: String,
}

impl UpdateRequest {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        updated_by: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            updated_by: updated_by.into(),
        }
    }

    /// Checks the request and normalizes it.
    ///
    /// Rules run in a fixed order and the first failure is returned:
    /// 1. `title` must not be empty once surrounding whitespace is trimmed;
    /// 2. `updatedBy` must not be empty. It is checked as given, without trimming.
    ///
    /// `content` may be anything, including empty. On success the title is stored
    /// trimmed; content and editor are kept exactly as given.
    pub fn validate(self) -> Result<ValidRequest, ValidationError> {
        let title = require_non_blank("title", &self.title)?.to_string();
        if self.updated_by.is_empty() {
            return Err(ValidationError::empty("updatedBy"));
        }

        Ok(ValidRequest {
            title,
            content: self.content,
            updated_by: self.updated_by,
        })
    }
}

/// An [`UpdateRequest`] that passed [`UpdateRequest::validate`].
///
/// Fields are private so a `ValidRequest` cannot be built around the checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRequest {
    title: String,
    content: String,
    updated_by: String,
}

impl ValidRequest {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn updated_by(&self) -> &str {
        &self.updated_by
    }

    /// Returns `post` with this edit applied, stamped with the current time.
    ///
    /// `post` itself is not modified; storing the result is up to the caller.
    pub fn apply_to(&self, post: &Post) -> Post {
        self.apply_at(post, Utc::now())
    }

    /// Same as [`apply_to`](Self::apply_to) with an explicit modification time.
    pub fn apply_at(&self, post: &Post, at: DateTime<Utc>) -> Post {
        Post {
            title: self.title.clone(),
            content: self.content.clone(),
            updated_by: self.updated_by.clone(),
            updated_at: at,
            ..post.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PostId;
    use chrono::TimeZone;

    fn old_post() -> Post {
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        Post::new(PostId(1), "Old", "x", "bob", created)
    }

    #[test]
    fn test_validate_trims_title_only() {
        let valid = UpdateRequest::new(" Hello ", " body ", "alice")
            .validate()
            .unwrap();
        assert_eq!(valid.title(), "Hello");
        assert_eq!(valid.content(), " body ");
        assert_eq!(valid.updated_by(), "alice");
    }

    #[test]
    fn test_empty_title_is_rejected() {
        for title in ["", "   ", "\t\n"] {
            let err = UpdateRequest::new(title, "body", "alice")
                .validate()
                .unwrap_err();
            assert_eq!(
                err,
                ValidationError {
                    field: "title",
                    reason: "must not be empty"
                }
            );
        }
    }

    #[test]
    fn test_title_is_checked_before_editor() {
        let err = UpdateRequest::new("", "body", "").validate().unwrap_err();
        assert_eq!(err.field, "title");
    }

    #[test]
    fn test_empty_editor_is_rejected() {
        let err = UpdateRequest::new("Hello", "body", "")
            .validate()
            .unwrap_err();
        assert_eq!(err.field, "updatedBy");
        assert_eq!(err.to_string(), "updatedBy must not be empty");
    }

    #[test]
    fn test_whitespace_editor_is_kept_as_given() {
        let valid = UpdateRequest::new("Hello", "body", " ").validate().unwrap();
        assert_eq!(valid.updated_by(), " ");
    }

    #[test]
    fn test_empty_content_is_accepted() {
        let valid = UpdateRequest::new("Hello", "", "alice").validate().unwrap();
        assert_eq!(valid.content(), "");
    }

    #[test]
    fn test_apply_replaces_fields_and_keeps_identity() {
        let post = old_post();
        let at = Utc.with_ymd_and_hms(2024, 3, 2, 10, 30, 0).unwrap();
        let valid = UpdateRequest::new(" Hello ", "body", "alice")
            .validate()
            .unwrap();

        let updated = valid.apply_at(&post, at);

        assert_eq!(updated.id, PostId(1));
        assert_eq!(updated.title, "Hello");
        assert_eq!(updated.content, "body");
        assert_eq!(updated.updated_by, "alice");
        assert_eq!(updated.updated_at, at);
        assert_eq!(updated.created_by, "bob");
        assert_eq!(updated.created_at, post.created_at);

        // The input value is untouched.
        assert_eq!(post, old_post());
    }

    #[test]
    fn test_apply_to_stamps_current_time() {
        let before = Utc::now();
        let updated = UpdateRequest::new("Hello", "body", "alice")
            .validate()
            .unwrap()
            .apply_to(&old_post());
        assert!(updated.updated_at >= before);
        assert!(updated.updated_at <= Utc::now());
    }

    #[test]
    fn test_apply_is_repeatable_and_idempotent() {
        let post = old_post();
        let valid = UpdateRequest::new("Hello", "body", "alice")
            .validate()
            .unwrap();

        let first = valid.apply_to(&post);
        let again = valid.apply_to(&post);
        let twice = valid.apply_to(&first);

        for other in [&again, &twice] {
            assert_eq!(other.title, first.title);
            assert_eq!(other.content, first.content);
            assert_eq!(other.updated_by, first.updated_by);
        }
    }

    #[test]
    fn test_request_reads_camel_case_wire_names() {
        let request: UpdateRequest =
            serde_json::from_str(r#"{"title":"T","content":"","updatedBy":"alice"}"#).unwrap();
        assert_eq!(request, UpdateRequest::new("T", "", "alice"));

        let missing = serde_json::from_str::<UpdateRequest>(r#"{"title":"T","content":""}"#);
        assert!(missing.is_err());
    }

    #[test]
    fn test_validation_error_serializes_field_and_reason() {
        let json = serde_json::to_value(ValidationError::empty("title")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"field": "title", "reason": "must not be empty"})
        );
    }
}
