use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use super::{InsertOutcome, RecipeStore, RemoveOutcome};
use crate::models::{NewUser, Recipe, UserRecord};
use crate::utils::AppError;

/// In-process `RecipeStore` for handler and service tests
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<String, UserRecord>>,
    offline: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a user document directly, bypassing initialization
    pub fn with_user(self, record: UserRecord) -> Self {
        if let Ok(mut users) = self.users.write() {
            users.insert(record.id.clone(), record);
        }
        self
    }

    /// A store whose health ping fails
    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    pub fn user_count(&self) -> usize {
        self.users.read().map(|users| users.len()).unwrap_or(0)
    }
}

fn poisoned() -> AppError {
    AppError::Database("memory store lock poisoned".to_string())
}

#[async_trait]
impl RecipeStore for MemoryStore {
    async fn create_user_if_absent(&self, user_id: &str, user: &NewUser) -> Result<bool, AppError> {
        let mut users = self.users.write().map_err(|_| poisoned())?;
        if users.contains_key(user_id) {
            return Ok(false);
        }
        users.insert(user_id.to_string(), UserRecord::new(user_id, user));
        Ok(true)
    }

    async fn find_user(&self, user_id: &str) -> Result<Option<UserRecord>, AppError> {
        let users = self.users.read().map_err(|_| poisoned())?;
        Ok(users.get(user_id).cloned())
    }

    async fn insert_recipe(
        &self,
        user_id: &str,
        recipe_id: &str,
        recipe: &Recipe,
    ) -> Result<InsertOutcome, AppError> {
        let mut users = self.users.write().map_err(|_| poisoned())?;
        let Some(user) = users.get_mut(user_id) else {
            return Ok(InsertOutcome::UserMissing);
        };
        if user.recipes.contains_key(recipe_id) {
            return Ok(InsertOutcome::IdTaken);
        }
        user.recipes.insert(recipe_id.to_string(), recipe.clone());
        Ok(InsertOutcome::Inserted)
    }

    async fn remove_recipe(&self, user_id: &str, recipe_id: &str) -> Result<RemoveOutcome, AppError> {
        let mut users = self.users.write().map_err(|_| poisoned())?;
        let Some(user) = users.get_mut(user_id) else {
            return Ok(RemoveOutcome::UserMissing);
        };
        match user.recipes.remove(recipe_id) {
            Some(_) => Ok(RemoveOutcome::Removed),
            None => Ok(RemoveOutcome::RecipeMissing),
        }
    }

    async fn ping(&self) -> Result<(), AppError> {
        if self.offline {
            return Err(AppError::Database("memory store is offline".to_string()));
        }
        Ok(())
    }
}
