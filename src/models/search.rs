use serde::{Deserialize, Serialize};

/// Query string of `GET /search`
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecipeSearchQuery {
    /// Comma-separated ingredient list, e.g. `tomato,basil`
    pub ingredients: Option<String>,
}

/// Query string of `GET /sam`
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductSearchQuery {
    pub ingredient: Option<String>,
}

/// First ingredient match merged with its full information record.
/// Both halves are relayed as Spoonacular returns them.
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct RecipeSuggestion {
    pub recipe: serde_json::Value,
    pub info: serde_json::Value,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct RecipeSuggestionResponse {
    pub recipe: RecipeSuggestion,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ProductSearchResponse {
    /// Raw Unwrangle payload
    pub response: serde_json::Value,
}
