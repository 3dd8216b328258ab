use crate::comments::repo_types::{Comment, NewComment};
use crate::db::{fetch_page, Database, StoreError};
use crate::listing::ListParams;

impl Comment {
    pub async fn list(db: &Database, params: &ListParams) -> Result<Vec<Comment>, StoreError> {
        fetch_page::<Comment>(db, params).await
    }

    pub async fn find(db: &Database, id: i64) -> Result<Comment, StoreError> {
        let comment = db
            .bounded(async {
                let comment = sqlx::query_as::<_, Comment>(
                    r#"
                    SELECT id, user_id, recipe_id, content, created_at, modified_at, is_deleted
                    FROM comments
                    WHERE id = $1 AND is_deleted = false
                    "#,
                )
                .bind(id)
                .fetch_optional(db.pool())
                .await?;
                Ok::<_, StoreError>(comment)
            })
            .await?;
        comment.ok_or_else(|| StoreError::NotFound(format!("comment {id} not found")))
    }

    /// Insert a comment by a live user on a live recipe.
    pub async fn create(db: &Database, new: &NewComment) -> Result<Comment, StoreError> {
        let comment = db
            .bounded(async {
                let comment = sqlx::query_as::<_, Comment>(
                    r#"
                    INSERT INTO comments (user_id, recipe_id, content)
                    SELECT $1, $2, $3
                    WHERE EXISTS (SELECT 1 FROM users WHERE id = $1 AND is_deleted = false)
                      AND EXISTS (SELECT 1 FROM recipes WHERE id = $2 AND is_deleted = false)
                    RETURNING id, user_id, recipe_id, content, created_at, modified_at, is_deleted
                    "#,
                )
                .bind(new.user_id)
                .bind(new.recipe_id)
                .bind(&new.content)
                .fetch_optional(db.pool())
                .await?;
                Ok::<_, StoreError>(comment)
            })
            .await?;
        comment.ok_or_else(|| {
            StoreError::InvalidInput(format!(
                "user {} or recipe {} does not exist",
                new.user_id, new.recipe_id
            ))
        })
    }

    pub async fn update(db: &Database, id: i64, content: &str) -> Result<Comment, StoreError> {
        let comment = db
            .bounded(async {
                let comment = sqlx::query_as::<_, Comment>(
                    r#"
                    UPDATE comments
                    SET content = $2, modified_at = now()
                    WHERE id = $1 AND is_deleted = false
                    RETURNING id, user_id, recipe_id, content, created_at, modified_at, is_deleted
                    "#,
                )
                .bind(id)
                .bind(content)
                .fetch_optional(db.pool())
                .await?;
                Ok::<_, StoreError>(comment)
            })
            .await?;
        comment.ok_or_else(|| StoreError::NotFound(format!("comment {id} not found")))
    }

    pub async fn soft_delete(db: &Database, id: i64) -> Result<(), StoreError> {
        let affected = db
            .bounded(async {
                let done = sqlx::query(
                    r#"
                    UPDATE comments
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
            return Err(StoreError::NotFound(format!("comment {id} not found")));
        }
        Ok(())
    }
}
