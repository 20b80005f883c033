use actix_web::{web, HttpResponse};

use crate::{
    models::{
        CreateRecipeRequest, ErrorResponse, MessageResponse, RecipeCreatedResponse,
        RecipeResponse, RecipesResponse,
    },
    services::recipe_service,
    state::AppState,
    utils::AppError,
};

/// GET /recipes/{user_id}/{recipe_id} - Fetches one recipe
#[utoipa::path(
    get,
    path = "/recipes/{user_id}/{recipe_id}",
    tag = "Recipes",
    params(
        ("user_id" = String, Path, description = "Owner of the recipe"),
        ("recipe_id" = String, Path, description = "Recipe id")
    ),
    responses(
        (status = 200, description = "The stored recipe", body = RecipeResponse),
        (status = 404, description = "User or recipe not found", body = ErrorResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn get_recipe(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (user_id, recipe_id) = path.into_inner();
    log::info!("📖 GET /recipes/{}/{}", user_id, recipe_id);

    let recipe = recipe_service::get_recipe(state.store.as_ref(), &user_id, &recipe_id)
        .await
        .map_err(|e| e.logged("Error fetching recipe"))?;

    Ok(HttpResponse::Ok().json(RecipeResponse { recipe }))
}

/// GET /recipes/{user_id} - Lists every recipe of the user
#[utoipa::path(
    get,
    path = "/recipes/{user_id}",
    tag = "Recipes",
    params(("user_id" = String, Path, description = "Owner of the recipes")),
    responses(
        (status = 200, description = "Recipe id to recipe, possibly empty", body = RecipesResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn list_recipes(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    log::info!("📋 GET /recipes/{}", user_id);

    let recipes = recipe_service::list_recipes(state.store.as_ref(), &user_id)
        .await
        .map_err(|e| e.logged("Error fetching recipes"))?;

    log::info!("✅ Listed {} recipes", recipes.len());
    Ok(HttpResponse::Ok().json(RecipesResponse { recipes }))
}

/// POST /recipes/{user_id} - Adds a recipe
#[utoipa::path(
    post,
    path = "/recipes/{user_id}",
    tag = "Recipes",
    params(("user_id" = String, Path, description = "Owner of the new recipe")),
    request_body = CreateRecipeRequest,
    responses(
        (status = 200, description = "Recipe stored", body = RecipeCreatedResponse),
        (status = 400, description = "Missing required fields", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn add_recipe(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
    body: web::Json<serde_json::Value>,
) -> Result<HttpResponse, AppError> {
    log::info!("📝 POST /recipes/{}", user_id);

    let request = CreateRecipeRequest::from_json(body.into_inner())
        .map_err(|e| e.logged("Error adding recipe"))?;

    let recipe_id = recipe_service::add_recipe(state.store.as_ref(), &user_id, request)
        .await
        .map_err(|e| e.logged("Error adding recipe"))?;

    Ok(HttpResponse::Ok().json(RecipeCreatedResponse {
        message: "Recipe added successfully".to_string(),
        recipe_id,
    }))
}

/// DELETE /recipes/{user_id}/{recipe_id} - Removes a recipe
#[utoipa::path(
    delete,
    path = "/recipes/{user_id}/{recipe_id}",
    tag = "Recipes",
    params(
        ("user_id" = String, Path, description = "Owner of the recipe"),
        ("recipe_id" = String, Path, description = "Recipe id")
    ),
    responses(
        (status = 200, description = "Recipe removed", body = MessageResponse),
        (status = 404, description = "User or recipe not found", body = ErrorResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn delete_recipe(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (user_id, recipe_id) = path.into_inner();
    log::info!("🗑️  DELETE /recipes/{}/{}", user_id, recipe_id);

    recipe_service::delete_recipe(state.store.as_ref(), &user_id, &recipe_id)
        .await
        .map_err(|e| e.logged("Error deleting recipe"))?;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Recipe deleted successfully".to_string(),
    }))
}
