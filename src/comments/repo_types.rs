use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;

use crate::listing::Listable;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub user_id: i64,
    pub recipe_id: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub content: String,
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

impl Listable for Comment {
    const TABLE: &'static str = "comments";
    const COLUMNS: &'static str =
        "id, user_id, recipe_id, content, created_at, modified_at, is_deleted";

    fn sort_column(name: &str) -> Option<&'static str> {
        match name {
            "id" => Some("id"),
            "userId" => Some("user_id"),
            "recipeId" => Some("recipe_id"),
            "createdAt" => Some("created_at"),
            "modifiedAt" => Some("modified_at"),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct NewComment {
    pub user_id: i64,
    pub recipe_id: i64,
    pub content: String,
}
