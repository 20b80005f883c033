//! Stub providers and app wiring shared by the test modules.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, Mutex};

use crate::database::MemoryStore;
use crate::services::{ProductSearchProvider, RecipeSearchProvider};
use crate::state::AppState;
use crate::utils::AppError;

pub struct StubRecipeSearch {
    matches: Result<Vec<Value>, AppError>,
    information: Result<Value, AppError>,
    requested_ids: Mutex<Vec<i64>>,
}

impl StubRecipeSearch {
    pub fn new(matches: Result<Vec<Value>, AppError>, information: Result<Value, AppError>) -> Self {
        Self {
            matches,
            information,
            requested_ids: Mutex::new(Vec::new()),
        }
    }

    pub fn requested_ids(&self) -> Vec<i64> {
        self.requested_ids.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecipeSearchProvider for StubRecipeSearch {
    async fn find_by_ingredients(&self, _ingredients: &str) -> Result<Vec<Value>, AppError> {
        self.matches.clone()
    }

    async fn recipe_information(&self, recipe_id: i64) -> Result<Value, AppError> {
        self.requested_ids.lock().unwrap().push(recipe_id);
        self.information.clone()
    }
}

pub struct StubProductSearch {
    response: Result<Value, AppError>,
    queries: Mutex<Vec<String>>,
}

impl StubProductSearch {
    pub fn new(response: Result<Value, AppError>) -> Self {
        Self {
            response,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProductSearchProvider for StubProductSearch {
    async fn search_products(&self, ingredient: &str) -> Result<Value, AppError> {
        self.queries.lock().unwrap().push(ingredient.to_string());
        self.response.clone()
    }
}

/// State over the given store with providers that return empty results
pub fn state_with_store(store: MemoryStore) -> AppState {
    AppState {
        store: Arc::new(store),
        recipe_search: Arc::new(StubRecipeSearch::new(Ok(vec![]), Ok(Value::Null))),
        product_search: Arc::new(StubProductSearch::new(Ok(Value::Null))),
    }
}
