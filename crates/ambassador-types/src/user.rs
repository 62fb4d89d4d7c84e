//! User types

use serde::{Deserialize, Serialize};

use crate::role::{Role, RoleId};

/// Unique user identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl UserId {
    /// Parse a user ID from its string form (the token subject)
    pub fn parse(s: &str) -> Result<Self, std::num::ParseIntError> {
        Ok(Self(s.parse()?))
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Public view of a user.
///
/// Carries no credential material; this is the only user shape that is ever
/// serialized into a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role_id: RoleId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl User {
    /// Attach the resolved role
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_parse() {
        assert_eq!(UserId::parse("42").unwrap(), UserId(42));
        assert!(UserId::parse("not-a-number").is_err());
        assert!(UserId::parse("").is_err());
    }

    #[test]
    fn test_user_id_display_roundtrip() {
        let id = UserId(1234);
        assert_eq!(UserId::parse(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn test_user_serializes_without_role_when_absent() {
        let user = User {
            id: UserId(1),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            role_id: RoleId(3),
            role: None,
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["role_id"], 3);
        assert!(json.get("role").is_none());
        assert!(json.get("password").is_none());
    }
}
