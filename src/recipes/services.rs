use crate::db::StoreError;
use crate::recipes::dto::{CreateRecipeRequest, UpdateRecipeRequest};
use crate::recipes::repo_types::{NewRecipe, RecipePatch};

fn normalize_name(raw: &str) -> Result<String, StoreError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(StoreError::InvalidInput("recipe name must not be empty".into()));
    }
    Ok(name.to_string())
}

pub fn new_recipe(req: CreateRecipeRequest) -> Result<NewRecipe, StoreError> {
    if req.user_id <= 0 {
        return Err(StoreError::InvalidInput(format!("user {} does not exist", req.user_id)));
    }
    Ok(NewRecipe {
        user_id: req.user_id,
        name: normalize_name(&req.name)?,
        ingredients: req.ingredients,
        preparation: req.preparation,
    })
}

pub fn recipe_patch(req: UpdateRecipeRequest) -> Result<RecipePatch, StoreError> {
    Ok(RecipePatch {
        name: req.name.as_deref().map(normalize_name).transpose()?,
        ingredients: req.ingredients,
        preparation: req.preparation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_recipe_trims_name() {
        let new = new_recipe(CreateRecipeRequest {
            user_id: 4,
            name: "  Ramen ".into(),
            ingredients: "noodles".into(),
            preparation: String::new(),
        })
        .unwrap();
        assert_eq!(new.name, "Ramen");
        assert_eq!(new.user_id, 4);
    }

    #[test]
    fn new_recipe_rejects_blank_name_and_bad_owner() {
        let blank = new_recipe(CreateRecipeRequest {
            user_id: 4,
            name: " ".into(),
            ingredients: String::new(),
            preparation: String::new(),
        });
        assert!(matches!(blank, Err(StoreError::InvalidInput(_))));

        let owner = new_recipe(CreateRecipeRequest {
            user_id: 0,
            name: "Ramen".into(),
            ingredients: String::new(),
            preparation: String::new(),
        });
        assert!(matches!(owner, Err(StoreError::InvalidInput(_))));
    }

    #[test]
    fn patch_keeps_empty_texts() {
        let patch = recipe_patch(UpdateRecipeRequest {
            ingredients: Some(String::new()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(patch.ingredients.as_deref(), Some(""));
        assert!(patch.name.is_none());
    }
}
