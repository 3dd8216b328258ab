use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;

use crate::listing::Listable;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: i64,
    pub user_id: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ingredients: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub preparation: String,
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

impl Listable for Recipe {
    const TABLE: &'static str = "recipes";
    const COLUMNS: &'static str =
        "id, user_id, name, ingredients, preparation, created_at, modified_at, is_deleted";

    fn sort_column(name: &str) -> Option<&'static str> {
        match name {
            "id" => Some("id"),
            "userId" => Some("user_id"),
            "name" => Some("name"),
            "createdAt" => Some("created_at"),
            "modifiedAt" => Some("modified_at"),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct NewRecipe {
    pub user_id: i64,
    pub name: String,
    pub ingredients: String,
    pub preparation: String,
}

#[derive(Debug, Default)]
pub struct RecipePatch {
    pub name: Option<String>,
    pub ingredients: Option<String>,
    pub preparation: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn empty_texts_are_omitted() {
        let recipe = Recipe {
            id: 3,
            user_id: 1,
            name: "Shakshuka".into(),
            ingredients: String::new(),
            preparation: String::new(),
            created_at: datetime!(2024-05-10 18:00 UTC),
            modified_at: None,
            is_deleted: false,
        };
        let json = serde_json::to_value(recipe).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 3,
                "userId": 1,
                "name": "Shakshuka",
                "createdAt": "2024-05-10T18:00:00Z",
            })
        );
    }

    #[test]
    fn sortable_by_owner() {
        assert_eq!(Recipe::sort_column("userId"), Some("user_id"));
        assert_eq!(Recipe::sort_column("user_id"), None);
        assert_eq!(Recipe::sort_column("ingredients"), None);
    }
}
