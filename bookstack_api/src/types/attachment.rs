use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UserRef;

/// A file or link attached to a page.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Attachment {
    pub id: i64,
    pub name: String,
    pub extension: String,
    /// Id of the page the attachment belongs to.
    pub uploaded_to: i64,
    /// True for link attachments, false for uploaded files.
    pub external: bool,
    pub order: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub created_by: Option<UserRef>,
    pub updated_by: Option<UserRef>,
    /// Link target, or base64 file content. Only sent by the single-item endpoint.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub content: String,
}

/// Creates a link attachment.
#[derive(Serialize, Debug, Clone, Default)]
pub struct AttachmentCreateRequest {
    pub name: String,
    pub uploaded_to: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub link: String,
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct AttachmentUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Moves the attachment to another page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploaded_to: Option<i64>,
}
