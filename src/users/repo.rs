use crate::db::{fetch_page, Database, StoreError};
use crate::listing::ListParams;
use crate::users::repo_types::{NewUser, User, UserPatch};

impl User {
    /// One page of live users.
    pub async fn list(db: &Database, params: &ListParams) -> Result<Vec<User>, StoreError> {
        fetch_page::<User>(db, params).await
    }

    /// Find a live user by id.
    pub async fn find(db: &Database, id: i64) -> Result<User, StoreError> {
        let user = db
            .bounded(async {
                let user = sqlx::query_as::<_, User>(
                    r#"
                    SELECT id, email, username, created_at, modified_at, is_deleted
                    FROM users
                    WHERE id = $1 AND is_deleted = false
                    "#,
                )
                .bind(id)
                .fetch_optional(db.pool())
                .await?;
                Ok::<_, StoreError>(user)
            })
            .await?;
        user.ok_or_else(|| StoreError::NotFound(format!("user {id} not found")))
    }

    /// Insert a new user.
    pub async fn create(db: &Database, new: &NewUser) -> Result<User, StoreError> {
        db.bounded(async {
            let user = sqlx::query_as::<_, User>(
                r#"
                INSERT INTO users (email, username, password)
                VALUES ($1, $2, $3)
                RETURNING id, email, username, created_at, modified_at, is_deleted
                "#,
            )
            .bind(&new.email)
            .bind(&new.username)
            .bind(&new.password_hash)
            .fetch_one(db.pool())
            .await?;
            Ok::<_, StoreError>(user)
        })
        .await
    }

    /// Overwrite the given columns of a live user.
    pub async fn update(db: &Database, id: i64, patch: &UserPatch) -> Result<User, StoreError> {
        let user = db
            .bounded(async {
                let user = sqlx::query_as::<_, User>(
                    r#"
                    UPDATE users
                    SET email = COALESCE($2, email),
                        username = COALESCE($3, username),
                        password = COALESCE($4, password),
                        modified_at = now()
                    WHERE id = $1 AND is_deleted = false
                    RETURNING id, email, username, created_at, modified_at, is_deleted
                    "#,
                )
                .bind(id)
                .bind(patch.email.as_deref())
                .bind(patch.username.as_deref())
                .bind(patch.password_hash.as_deref())
                .fetch_optional(db.pool())
                .await?;
                Ok::<_, StoreError>(user)
            })
            .await?;
        user.ok_or_else(|| StoreError::NotFound(format!("user {id} not found")))
    }

    /// Mark a live user as deleted.
    pub async fn soft_delete(db: &Database, id: i64) -> Result<(), StoreError> {
        let affected = db
            .bounded(async {
                let done = sqlx::query(
                    r#"
                    UPDATE users
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
            return Err(StoreError::NotFound(format!("user {id} not found")));
        }
        Ok(())
    }
}
