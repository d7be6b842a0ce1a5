pub mod review;
pub mod tool;
pub mod user;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use review::{ApprovalStatus, NewReview, Review};
pub use tool::{NewTool, PricingType, Tool, ToolFilter, ToolPatch};
pub use user::{AccessToken, NewUser, PasswordChange, RegisterAck, Role, UserProfile};

/// Identifier of a backend record.
///
/// The backend is free to send ids as strings or integers; both are kept in
/// their textual form so an id read from the URL compares equal to one read
/// from a JSON body.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(from = "RawId", into = "String")]
pub struct EntityId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

impl From<RawId> for EntityId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(text) => Self(text),
            RawId::Signed(n) => Self(n.to_string()),
            RawId::Unsigned(n) => Self(n.to_string()),
        }
    }
}

impl EntityId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Percent-encoded form for use as a URL path segment.
    pub fn path_segment(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }
}

impl From<EntityId> for String {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

impl From<&str> for EntityId {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl From<String> for EntityId {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<i64> for EntityId {
    fn from(n: i64) -> Self {
        Self(n.to_string())
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `★ 4.5/5` style rating label shared by cards, detail and admin lists.
pub fn rating_label(rating: f64) -> String {
    format!("★ {rating:.1}/5")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_decode_from_strings_and_numbers() {
        let ids: Vec<EntityId> = serde_json::from_str(r#"["a1b2", 7, 18446744073709551615]"#).unwrap();
        assert_eq!(ids[0].as_str(), "a1b2");
        assert_eq!(ids[1], EntityId::from(7));
        assert_eq!(ids[2].as_str(), "18446744073709551615");
    }

    #[test]
    fn ids_serialize_as_strings() {
        let json = serde_json::to_string(&EntityId::from(12)).unwrap();
        assert_eq!(json, r#""12""#);
    }

    #[test]
    fn path_segment_is_encoded() {
        assert_eq!(EntityId::from("a b/c").path_segment(), "a%20b%2Fc");
    }

    #[test]
    fn rating_label_has_one_decimal() {
        assert_eq!(rating_label(4.26), "★ 4.3/5");
        assert_eq!(rating_label(0.0), "★ 0.0/5");
    }
}
