use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;

use crate::listing::Listable;

/// User record as read back from the database. The password hash is write-only
/// and never selected.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub username: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub modified_at: Option<OffsetDateTime>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_deleted: bool,
}

impl Listable for User {
    const TABLE: &'static str = "users";
    const COLUMNS: &'static str =
        "id, email, username, created_at, modified_at, is_deleted";

    fn sort_column(name: &str) -> Option<&'static str> {
        match name {
            "id" => Some("id"),
            "email" => Some("email"),
            "username" => Some("username"),
            "createdAt" => Some("created_at"),
            "modifiedAt" => Some("modified_at"),
            _ => None,
        }
    }
}

/// Validated input for a new user row.
#[derive(Debug)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub password_hash: String,
}

/// Columns to overwrite; `None` keeps the stored value.
#[derive(Debug, Default)]
pub struct UserPatch {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password_hash: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn user() -> User {
        User {
            id: 7,
            email: "cook@example.com".into(),
            username: "cook".into(),
            created_at: datetime!(2024-03-01 12:00 UTC),
            modified_at: None,
            is_deleted: false,
        }
    }

    #[test]
    fn serializes_camel_case_without_defaults() {
        let json = serde_json::to_value(user()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "email": "cook@example.com",
                "username": "cook",
                "createdAt": "2024-03-01T12:00:00Z",
            })
        );
    }

    #[test]
    fn serializes_modified_and_deleted_when_set() {
        let mut u = user();
        u.username.clear();
        u.modified_at = Some(datetime!(2024-03-02 08:30 UTC));
        u.is_deleted = true;

        let json = serde_json::to_value(u).unwrap();
        assert_eq!(json["modifiedAt"], "2024-03-02T08:30:00Z");
        assert_eq!(json["isDeleted"], true);
        assert!(json.get("username").is_none());
    }

    #[test]
    fn password_hash_is_never_selected() {
        assert!(!User::COLUMNS.contains("password"));
        let sql = crate::listing::list_sql::<User>("id", "ASC").unwrap();
        assert!(!sql.contains("password"));
    }

    #[test]
    fn password_is_not_sortable() {
        assert_eq!(User::sort_column("createdAt"), Some("created_at"));
        assert_eq!(User::sort_column("password"), None);
        assert_eq!(User::sort_column("isDeleted"), None);
    }
}
