//! UserInfo domain entity.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::DomainResult;

/// User record keyed by a primary `id` and looked up by `user_id`.
///
/// `id` may be left empty on a new record; the store assigns one on save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UserInfo {
    /// Primary key, immutable once stored
    pub id: String,
    /// Secondary lookup key, unique across records
    #[validate(length(min = 1, message = "User id is required"))]
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_pic: Option<String>,
}

impl UserInfo {
    /// Create a record with no optional contact details
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone_number: None,
            email: None,
            profile_pic: None,
        }
    }

    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_profile_pic(mut self, profile_pic: impl Into<String>) -> Self {
        self.profile_pic = Some(profile_pic.into());
        self
    }

    /// Whether the record still needs a store-assigned primary key
    pub fn needs_id(&self) -> bool {
        self.id.is_empty()
    }

    /// Check field rules before the record is persisted
    pub fn ensure_valid(&self) -> DomainResult<()> {
        self.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DomainError;

    #[test]
    fn test_valid_record() {
        let record = UserInfo::new("1", "alice", "Alice", "Liddell").with_email("alice@example.com");
        assert!(record.ensure_valid().is_ok());
    }

    #[test]
    fn test_empty_id_is_allowed() {
        let record = UserInfo::new("", "alice", "Alice", "Liddell");
        assert!(record.needs_id());
        assert!(record.ensure_valid().is_ok());
    }

    #[test]
    fn test_empty_user_id_rejected() {
        let record = UserInfo::new("1", "", "Alice", "Liddell");
        let err = record.ensure_valid().unwrap_err();
        assert!(matches!(err, DomainError::Validation(ref msg) if msg == "User id is required"));
    }

    #[test]
    fn test_contact_fields_are_stored_as_given() {
        let record = UserInfo::new("1", "alice", "Alice", "Liddell")
            .with_email("alice_at_home")
            .with_phone_number("ext. 42");
        assert!(record.ensure_valid().is_ok());
    }

    #[test]
    fn test_long_identifiers_are_allowed() {
        let record = UserInfo::new("i".repeat(65), "u".repeat(65), "Alice", "Liddell");
        assert!(record.ensure_valid().is_ok());
    }

    #[test]
    fn test_optional_fields_skipped_in_json() {
        let json = serde_json::to_value(UserInfo::new("1", "alice", "Alice", "Liddell")).unwrap();
        assert_eq!(json["user_id"], "alice");
        assert!(json.get("email").is_none());

        let back: UserInfo = serde_json::from_value(json).unwrap();
        assert_eq!(back.email, None);
    }
}
