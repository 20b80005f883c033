use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::utils::AppError;

/// Recipe stored inside the user document (`recipes.<id>`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub shopping: Vec<String>,
    /// Image URL
    pub image: String,
}

/// Body of `POST /recipes/{user_id}`.
///
/// Every field is optional at the decoding stage so that a missing field is
/// reported as a 400 with the usual error body rather than a decoder message.
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct CreateRecipeRequest {
    pub name: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub instructions: Option<String>,
    pub shopping: Option<Vec<String>>,
    pub image: Option<String>,
}

impl CreateRecipeRequest {
    /// Decodes a request body. Anything but a JSON object (null, arrays,
    /// scalars) carries none of the fields and is reported as such; an
    /// object with a mistyped field is rejected with the decoder message.
    pub fn from_json(body: serde_json::Value) -> Result<Self, AppError> {
        if !body.is_object() {
            return Err(AppError::Validation("Missing required fields".to_string()));
        }
        serde_json::from_value(body)
            .map_err(|e| AppError::Validation(format!("Invalid request body: {}", e)))
    }

    /// Empty strings count as missing; empty lists are accepted.
    pub fn into_recipe(self) -> Result<Recipe, AppError> {
        let missing = || AppError::Validation("Missing required fields".to_string());

        Ok(Recipe {
            name: non_empty(self.name).ok_or_else(missing)?,
            ingredients: self.ingredients.ok_or_else(missing)?,
            instructions: non_empty(self.instructions).ok_or_else(missing)?,
            shopping: self.shopping.ok_or_else(missing)?,
            image: non_empty(self.image).ok_or_else(missing)?,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct RecipeResponse {
    pub recipe: Recipe,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct RecipesResponse {
    pub recipes: BTreeMap<String, Recipe>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCreatedResponse {
    pub message: String,
    pub recipe_id: String,
}
