use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Recipe Service API",
        version = "1.0.0",
        description = "Per-user recipe storage plus recipe and grocery search.\n\n**Features:**\n- User initialization after identity-provider sign-in\n- Recipe CRUD stored in MongoDB\n- Ingredient-based recipe suggestions (Spoonacular)\n- Grocery product search (Sam's Club via Unwrangle)"
    ),
    paths(
        // Health
        crate::api::health::health_check,

        // Users
        crate::api::users::initialize_user,

        // Recipes
        crate::api::recipes::get_recipe,
        crate::api::recipes::list_recipes,
        crate::api::recipes::add_recipe,
        crate::api::recipes::delete_recipe,

        // External APIs
        crate::api::external::search_recipes,
        crate::api::external::search_sam,
    ),
    components(
        schemas(
            crate::api::health::HealthResponse,
            crate::models::Recipe,
            crate::models::CreateRecipeRequest,
            crate::models::RecipeResponse,
            crate::models::RecipesResponse,
            crate::models::RecipeCreatedResponse,
            crate::models::MessageResponse,
            crate::models::ErrorResponse,
            crate::models::RecipeSuggestion,
            crate::models::RecipeSuggestionResponse,
            crate::models::ProductSearchResponse,
        )
    ),
    tags(
        (name = "Health", description = "Liveness and store reachability."),
        (name = "Users", description = "User document creation after sign-in."),
        (name = "Recipes", description = "Recipes saved by a user."),
        (name = "External", description = "Spoonacular recipe search and Sam's Club product search."),
    )
)]
pub struct ApiDoc;
