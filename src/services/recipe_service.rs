// ==================== RECIPES ====================
// CRUD over the recipes embedded in the user document (`recipes` field)

use std::collections::BTreeMap;

use crate::{
    database::{InsertOutcome, RecipeStore, RemoveOutcome},
    models::{CreateRecipeRequest, Recipe},
    utils::{generate_recipe_id, is_valid_recipe_id, AppError},
};

/// How many fresh ids are tried before giving up on a create
pub const MAX_ID_ATTEMPTS: usize = 5;

fn user_not_found() -> AppError {
    AppError::NotFound("User not found".to_string())
}

fn recipe_not_found() -> AppError {
    AppError::NotFound("Recipe not found".to_string())
}

fn require_ids(user_id: &str, recipe_id: &str) -> Result<(), AppError> {
    if user_id.is_empty() || recipe_id.is_empty() {
        return Err(AppError::Validation(
            "User ID or Recipe ID not provided".to_string(),
        ));
    }
    Ok(())
}

/// GET /recipes/{user_id}/{recipe_id}
pub async fn get_recipe(
    store: &dyn RecipeStore,
    user_id: &str,
    recipe_id: &str,
) -> Result<Recipe, AppError> {
    require_ids(user_id, recipe_id)?;

    let mut user = store.find_user(user_id).await?.ok_or_else(user_not_found)?;
    user.recipes.remove(recipe_id).ok_or_else(recipe_not_found)
}

/// GET /recipes/{user_id}
pub async fn list_recipes(
    store: &dyn RecipeStore,
    user_id: &str,
) -> Result<BTreeMap<String, Recipe>, AppError> {
    if user_id.is_empty() {
        return Err(AppError::Validation("User ID not provided".to_string()));
    }

    let user = store.find_user(user_id).await?.ok_or_else(user_not_found)?;
    Ok(user.recipes)
}

/// POST /recipes/{user_id} - Returns the generated id
pub async fn add_recipe(
    store: &dyn RecipeStore,
    user_id: &str,
    request: CreateRecipeRequest,
) -> Result<String, AppError> {
    add_recipe_with_ids(store, user_id, request, generate_recipe_id).await
}

/// Same as [`add_recipe`] with a caller-supplied id source.
///
/// The write only lands if the id is still free in the user's mapping;
/// a taken id is replaced by the next one from `next_id`.
pub async fn add_recipe_with_ids<F>(
    store: &dyn RecipeStore,
    user_id: &str,
    request: CreateRecipeRequest,
    mut next_id: F,
) -> Result<String, AppError>
where
    F: FnMut() -> String + Send,
{
    if user_id.is_empty() {
        return Err(AppError::Validation("Missing required fields".to_string()));
    }
    let recipe = request.into_recipe()?;

    for attempt in 1..=MAX_ID_ATTEMPTS {
        let recipe_id = next_id();

        match store.insert_recipe(user_id, &recipe_id, &recipe).await? {
            InsertOutcome::Inserted => {
                log::info!("✅ Recipe {} added for user {}", recipe_id, user_id);
                return Ok(recipe_id);
            }
            InsertOutcome::UserMissing => return Err(user_not_found()),
            InsertOutcome::IdTaken => {
                log::warn!(
                    "⚠️  Recipe id {} already taken for user {} (attempt {}/{})",
                    recipe_id, user_id, attempt, MAX_ID_ATTEMPTS
                );
            }
        }
    }

    Err(AppError::Database(format!(
        "Could not allocate a unique recipe id after {} attempts",
        MAX_ID_ATTEMPTS
    )))
}

/// DELETE /recipes/{user_id}/{recipe_id}
pub async fn delete_recipe(
    store: &dyn RecipeStore,
    user_id: &str,
    recipe_id: &str,
) -> Result<(), AppError> {
    require_ids(user_id, recipe_id)?;

    if !is_valid_recipe_id(recipe_id) {
        // Never issued by this service, and unsafe as a field path
        return match store.find_user(user_id).await? {
            Some(_) => Err(recipe_not_found()),
            None => Err(user_not_found()),
        };
    }

    match store.remove_recipe(user_id, recipe_id).await? {
        RemoveOutcome::Removed => {
            log::info!("🗑️  Recipe {} removed for user {}", recipe_id, user_id);
            Ok(())
        }
        RemoveOutcome::UserMissing => Err(user_not_found()),
        RemoveOutcome::RecipeMissing => Err(recipe_not_found()),
    }
}
