use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipeRequest {
    pub user_id: i64,
    pub name: String,
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub preparation: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateRecipeRequest {
    pub name: Option<String>,
    pub ingredients: Option<String>,
    pub preparation: Option<String>,
}
