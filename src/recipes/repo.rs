use crate::db::{fetch_page, Database, StoreError};
use crate::listing::ListParams;
use crate::recipes::repo_types::{NewRecipe, Recipe, RecipePatch};

impl Recipe {
    pub async fn list(db: &Database, params: &ListParams) -> Result<Vec<Recipe>, StoreError> {
        fetch_page::<Recipe>(db, params).await
    }

    pub async fn find(db: &Database, id: i64) -> Result<Recipe, StoreError> {
        let recipe = db
            .bounded(async {
                let recipe = sqlx::query_as::<_, Recipe>(
                    r#"
                    SELECT id, user_id, name, ingredients, preparation,
                           created_at, modified_at, is_deleted
                    FROM recipes
                    WHERE id = $1 AND is_deleted = false
                    "#,
                )
                .bind(id)
                .fetch_optional(db.pool())
                .await?;
                Ok::<_, StoreError>(recipe)
            })
            .await?;
        recipe.ok_or_else(|| StoreError::NotFound(format!("recipe {id} not found")))
    }

    /// Insert a recipe owned by a live user.
    pub async fn create(db: &Database, new: &NewRecipe) -> Result<Recipe, StoreError> {
        let recipe = db
            .bounded(async {
                let recipe = sqlx::query_as::<_, Recipe>(
                    r#"
                    INSERT INTO recipes (user_id, name, ingredients, preparation)
                    SELECT $1, $2, $3, $4
                    WHERE EXISTS (SELECT 1 FROM users WHERE id = $1 AND is_deleted = false)
                    RETURNING id, user_id, name, ingredients, preparation,
                              created_at, modified_at, is_deleted
                    "#,
                )
                .bind(new.user_id)
                .bind(&new.name)
                .bind(&new.ingredients)
                .bind(&new.preparation)
                .fetch_optional(db.pool())
                .await?;
                Ok::<_, StoreError>(recipe)
            })
            .await?;
        recipe.ok_or_else(|| StoreError::InvalidInput(format!("user {} does not exist", new.user_id)))
    }

    pub async fn update(db: &Database, id: i64, patch: &RecipePatch) -> Result<Recipe, StoreError> {
        let recipe = db
            .bounded(async {
                let recipe = sqlx::query_as::<_, Recipe>(
                    r#"
                    UPDATE recipes
                    SET name = COALESCE($2, name),
                        ingredients = COALESCE($3, ingredients),
                        preparation = COALESCE($4, preparation),
                        modified_at = now()
                    WHERE id = $1 AND is_deleted = false
                    RETURNING id, user_id, name, ingredients, preparation,
                              created_at, modified_at, is_deleted
                    "#,
                )
                .bind(id)
                .bind(patch.name.as_deref())
                .bind(patch.ingredients.as_deref())
                .bind(patch.preparation.as_deref())
                .fetch_optional(db.pool())
                .await?;
                Ok::<_, StoreError>(recipe)
            })
            .await?;
        recipe.ok_or_else(|| StoreError::NotFound(format!("recipe {id} not found")))
    }

    pub async fn soft_delete(db: &Database, id: i64) -> Result<(), StoreError> {
        let affected = db
            .bounded(async {
                let done = sqlx::query(
                    r#"
                    UPDATE recipes
                    SET is_deleted = true, modified_at = now()
                    WHERE id = $1 AND is_deleted = false
                    "#,
                )
                .bind(id)
                .execute(db.pool())
                .await?;
                Ok::<_, StoreError>(done.rows_affected())
            })
            .await?;
        if affected == 0 {
            return Err(StoreError::NotFound(format!("recipe {id} not found")));
        }
        Ok(())
    }
}
