use lazy_static::lazy_static;
use regex::Regex;

use crate::db::{Database, StoreError};
use crate::users::dto::{CreateUserRequest, UpdateUserRequest};
use crate::users::password::hash_password;
use crate::users::repo_types::{NewUser, User, UserPatch};

pub const MIN_PASSWORD_LEN: usize = 8;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

fn normalize_email(raw: &str) -> Result<String, StoreError> {
    let email = raw.trim().to_lowercase();
    if !is_valid_email(&email) {
        return Err(StoreError::InvalidInput("invalid email".into()));
    }
    Ok(email)
}

fn normalize_username(raw: &str) -> Result<String, StoreError> {
    let username = raw.trim();
    if username.is_empty() {
        return Err(StoreError::InvalidInput("username must not be empty".into()));
    }
    Ok(username.to_string())
}

fn hash_checked(password: &str) -> Result<String, StoreError> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(StoreError::InvalidInput(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    // a hashing failure is a server error
    hash_password(password).map_err(|e| StoreError::Query(e.to_string()))
}

pub fn new_user(req: &CreateUserRequest) -> Result<NewUser, StoreError> {
    Ok(NewUser {
        email: normalize_email(&req.email)?,
        username: normalize_username(&req.username)?,
        password_hash: hash_checked(&req.password)?,
    })
}

pub fn user_patch(req: &UpdateUserRequest) -> Result<UserPatch, StoreError> {
    Ok(UserPatch {
        email: req.email.as_deref().map(normalize_email).transpose()?,
        username: req.username.as_deref().map(normalize_username).transpose()?,
        password_hash: req.password.as_deref().map(hash_checked).transpose()?,
    })
}

pub async fn create_user(db: &Database, req: &CreateUserRequest) -> Result<User, StoreError> {
    let new = new_user(req)?;
    User::create(db, &new).await.map_err(|e| match e {
        StoreError::Conflict(_) => {
            StoreError::Conflict(format!("email {} already registered", new.email))
        }
        other => other,
    })
}

pub async fn update_user(
    db: &Database,
    id: i64,
    req: &UpdateUserRequest,
) -> Result<User, StoreError> {
    let patch = user_patch(req)?;
    User::update(db, id, &patch).await.map_err(|e| match e {
        StoreError::Conflict(_) => StoreError::Conflict("email already registered".into()),
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_req(email: &str, username: &str, password: &str) -> CreateUserRequest {
        CreateUserRequest {
            email: email.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    #[test]
    fn email_check() {
        assert!(is_valid_email("cook@example.com"));
        assert!(!is_valid_email("cook@example"));
        assert!(!is_valid_email("cook example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn new_user_normalizes_and_hashes() {
        let new = new_user(&create_req("  Cook@Example.COM ", " cook ", "long-enough")).unwrap();
        assert_eq!(new.email, "cook@example.com");
        assert_eq!(new.username, "cook");
        assert_ne!(new.password_hash, "long-enough");
    }

    #[test]
    fn new_user_rejects_bad_input() {
        for req in [
            create_req("nope", "cook", "long-enough"),
            create_req("cook@example.com", "   ", "long-enough"),
            create_req("cook@example.com", "cook", "short"),
        ] {
            assert!(matches!(new_user(&req), Err(StoreError::InvalidInput(_))));
        }
    }

    #[test]
    fn patch_only_touches_given_fields() {
        let patch = user_patch(&UpdateUserRequest {
            username: Some("chef".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(patch.username.as_deref(), Some("chef"));
        assert!(patch.email.is_none());
        assert!(patch.password_hash.is_none());

        let bad = user_patch(&UpdateUserRequest {
            password: Some("123".into()),
            ..Default::default()
        });
        assert!(matches!(bad, Err(StoreError::InvalidInput(_))));
    }
}
