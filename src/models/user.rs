use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The User struct represents the logged-in user as the server reports it.
///
/// The server owns the exact shape of this record, so everything we do not
/// model explicitly lands in `extra` and survives a persistence round trip
/// unchanged. A fully empty record means "nobody is logged in".
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Any additional attributes the server included (name, email, roles...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    /// Construct a User with the two fields every server record carries.
    pub fn new(id: i64, username: impl Into<String>) -> Self {
        User {
            id: Some(id),
            username: Some(username.into()),
            extra: Map::new(),
        }
    }

    /// True if this is the empty record, i.e. no session.
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.username.is_none() && self.extra.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test that the default User is the empty record.
    #[test]
    fn test_default_user_is_empty() {
        let user = User::default();
        assert!(user.is_empty());
        assert_eq!(user, User::default());
    }

    /// Test that unknown fields survive a serialize/deserialize round trip.
    #[test]
    fn test_unknown_fields_round_trip() {
        let raw = r#"{"id":1,"name":"A","roles":["user"]}"#;
        let user: User = serde_json::from_str(raw).expect("user should parse");

        assert_eq!(user.id, Some(1));
        assert!(user.username.is_none());
        assert_eq!(user.extra["name"], "A");

        let serialized = serde_json::to_string(&user).expect("user should serialize");
        let reparsed: User = serde_json::from_str(&serialized).expect("user should reparse");
        assert_eq!(user, reparsed);
    }

    /// Test that a populated user is not considered empty.
    #[test]
    fn test_populated_user_not_empty() {
        let user = User::new(2, "adam");
        assert!(!user.is_empty());
        assert_eq!(user.username.as_deref(), Some("adam"));
    }
}
