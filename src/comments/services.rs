use crate::comments::dto::CreateCommentRequest;
use crate::comments::repo_types::NewComment;
use crate::db::StoreError;

pub fn checked_content(raw: &str) -> Result<String, StoreError> {
    let content = raw.trim();
    if content.is_empty() {
        return Err(StoreError::InvalidInput("comment must not be empty".into()));
    }
    Ok(content.to_string())
}

pub fn new_comment(req: CreateCommentRequest) -> Result<NewComment, StoreError> {
    Ok(NewComment {
        user_id: req.user_id,
        recipe_id: req.recipe_id,
        content: checked_content(&req.content)?,
    })
}
