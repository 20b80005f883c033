use async_trait::async_trait;
use serde_json::Value;

use crate::{
    models::RecipeSuggestion,
    utils::{http::fetch_json, AppError},
};

pub const SPOONACULAR_API_BASE: &str = "https://api.spoonacular.com";

/// Ingredient-based recipe lookup
#[async_trait]
pub trait RecipeSearchProvider: Send + Sync {
    /// Recipes using the given comma-separated ingredients, best match first
    async fn find_by_ingredients(&self, ingredients: &str) -> Result<Vec<Value>, AppError>;

    /// Full information record for one recipe
    async fn recipe_information(&self, recipe_id: i64) -> Result<Value, AppError>;
}

pub struct SpoonacularClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl SpoonacularClient {
    pub fn new(http: reqwest::Client, base_url: &str, api_key: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }
}

#[async_trait]
impl RecipeSearchProvider for SpoonacularClient {
    async fn find_by_ingredients(&self, ingredients: &str) -> Result<Vec<Value>, AppError> {
        log::info!("🥕 Spoonacular findByIngredients: {}", ingredients);

        let request = self
            .http
            .get(format!("{}/recipes/findByIngredients", self.base_url))
            .query(&[("ingredients", ingredients), ("apiKey", self.api_key.as_str())]);

        fetch_json(request, "Spoonacular").await
    }

    async fn recipe_information(&self, recipe_id: i64) -> Result<Value, AppError> {
        log::info!("📘 Spoonacular information for recipe {}", recipe_id);

        let request = self
            .http
            .get(format!("{}/recipes/{}/information", self.base_url, recipe_id))
            .query(&[("apiKey", self.api_key.as_str())]);

        fetch_json(request, "Spoonacular").await
    }
}

/// GET /search - First ingredient match plus its full information
pub async fn suggest_recipe(
    provider: &dyn RecipeSearchProvider,
    ingredients: Option<&str>,
) -> Result<RecipeSuggestion, AppError> {
    let ingredients = ingredients
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::Validation("Ingredients not provided".to_string()))?;

    let recipe = provider
        .find_by_ingredients(ingredients)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| {
            AppError::NotFound("No recipes found for the given ingredients".to_string())
        })?;

    let recipe_id = recipe
        .get("id")
        .and_then(Value::as_i64)
        .ok_or_else(|| AppError::Upstream("Spoonacular result has no recipe id".to_string()))?;

    let info = provider.recipe_information(recipe_id).await?;

    log::info!("✅ Suggested recipe {} for '{}'", recipe_id, ingredients);

    Ok(RecipeSuggestion { recipe, info })
}
