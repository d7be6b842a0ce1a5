use serde::{Deserialize, Serialize};
use std::fmt;

/// `GET /user/` response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub role: Role,
}

impl UserProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "admin",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for Role {
    fn from(label: String) -> Self {
        if label == "admin" {
            Self::Admin
        } else {
            Self::Other(label)
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /auth/`.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub role: String,
}

/// Successful registration acknowledgement.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RegisterAck {
    pub msg: String,
}

/// `POST /auth/token` response.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Body of `PUT /user/password`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PasswordChange {
    pub password: String,
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_is_admin_only_for_exact_label() {
        assert_eq!(Role::from("admin".to_string()), Role::Admin);
        assert_eq!(Role::from("user".to_string()), Role::Other("user".into()));
    }

    #[test]
    fn profile_helpers() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"username":"ada","email":"ada@example.com","first_name":"Ada","last_name":"Lovelace","role":"admin"}"#,
        )
        .unwrap();
        assert!(profile.is_admin());
        assert_eq!(profile.full_name(), "Ada Lovelace");
        assert_eq!(profile.role.as_str().to_uppercase(), "ADMIN");
    }
}
