use std::sync::Arc;

use crate::database::RecipeStore;
use crate::services::{ProductSearchProvider, RecipeSearchProvider};

/// Clients injected into every handler through `web::Data<AppState>`
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecipeStore>,
    pub recipe_search: Arc<dyn RecipeSearchProvider>,
    pub product_search: Arc<dyn ProductSearchProvider>,
}
