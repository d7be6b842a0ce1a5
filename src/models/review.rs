// src/models/review.rs
use super::EntityId;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub id: EntityId,
    pub tool_id: EntityId,   // Tool the review is attached to
    pub user_id: EntityId,   // Author
    pub user_rating: u8,     // 1-5 stars
    #[serde(default)]
    pub comment: Option<String>,
    pub approval_status: ApprovalStatus,
}

impl Review {
    pub fn comment_or(&self, fallback: &'static str) -> String {
        self.comment
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(fallback)
            .to_string()
    }
}

/// Moderation state of a review.
///
/// Every state can be left again: an admin may approve a rejected review or
/// reject an approved one. The server decides; the client only asks.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }

    /// CSS modifier used by the status badge.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// States an admin can move a review in this state to.
    pub fn transitions(self) -> &'static [ApprovalStatus] {
        match self {
            Self::Pending => &[Self::Approved, Self::Rejected],
            Self::Approved => &[Self::Rejected],
            Self::Rejected => &[Self::Approved],
        }
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /admin/user_add_review`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NewReview {
    pub tool_id: EntityId,
    pub user_rating: u8,
    pub comment: String,
}
