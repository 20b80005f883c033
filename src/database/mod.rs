use async_trait::async_trait;
use mongodb::bson::{doc, Document};
use mongodb::{Client, Collection, Database};
use std::error::Error;

use crate::models::{NewUser, Recipe, UserRecord};
use crate::utils::AppError;

#[cfg(test)]
pub mod memory;

#[cfg(test)]
pub use memory::MemoryStore;

const USERS_COLLECTION: &str = "users";
const DEFAULT_DB_NAME: &str = "recipes";

/// Result of writing a new recipe under a freshly generated id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    UserMissing,
    /// The generated id is already present in the user's mapping
    IdTaken,
}

/// Result of removing one recipe from a user's mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    UserMissing,
    RecipeMissing,
}

/// Per-user recipe storage. Every mutation is a single atomic operation on
/// the user document.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Creates the user document if absent. Returns `true` when it was created.
    async fn create_user_if_absent(&self, user_id: &str, user: &NewUser) -> Result<bool, AppError>;

    async fn find_user(&self, user_id: &str) -> Result<Option<UserRecord>, AppError>;

    /// Stores `recipe` under `recipe_id` only if that key is free
    async fn insert_recipe(
        &self,
        user_id: &str,
        recipe_id: &str,
        recipe: &Recipe,
    ) -> Result<InsertOutcome, AppError>;

    async fn remove_recipe(&self, user_id: &str, recipe_id: &str) -> Result<RemoveOutcome, AppError>;

    /// Round-trip to the backing store, used by the health check
    async fn ping(&self) -> Result<(), AppError>;
}

#[derive(Clone)]
pub struct MongoDB {
    db: Database,
}

impl MongoDB {
    pub async fn new(uri: &str) -> Result<Self, Box<dyn Error>> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri).await?;

        // Connection pool
        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(2);
        client_options.max_idle_time = Some(std::time::Duration::from_secs(300));

        client_options.connect_timeout = Some(std::time::Duration::from_secs(5));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));

        let client = Client::with_options(client_options)?;
        let db = client.database(&database_name(uri));

        let mongodb = Self { db };

        // Test connection
        mongodb.ping().await?;

        Ok(mongodb)
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    fn users(&self) -> Collection<UserRecord> {
        self.collection(USERS_COLLECTION)
    }

    async fn user_exists(&self, user_id: &str) -> Result<bool, AppError> {
        let count = self
            .users()
            .count_documents(doc! { "_id": user_id })
            .limit(1)
            .await?;
        Ok(count > 0)
    }
}

/// Database name from the URI path (`mongodb://host/<name>?opts`), falling
/// back to `recipes` when the URI has none.
pub fn database_name(uri: &str) -> String {
    let without_scheme = uri.split_once("://").map(|(_, rest)| rest).unwrap_or(uri);

    without_scheme
        .split_once('/')
        .map(|(_, path)| path.split('?').next().unwrap_or_default())
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_DB_NAME)
        .to_string()
}

fn recipe_path(recipe_id: &str) -> String {
    format!("recipes.{}", recipe_id)
}

#[async_trait]
impl RecipeStore for MongoDB {
    async fn create_user_if_absent(&self, user_id: &str, user: &NewUser) -> Result<bool, AppError> {
        // Upsert with insert-only fields: an existing document is never touched
        let result = self
            .users()
            .update_one(
                doc! { "_id": user_id },
                doc! { "$setOnInsert": {
                    "name": user.name.as_str(),
                    "uid": user.uid.as_str(),
                    "email": user.email.as_str(),
                    "recipes": {},
                } },
            )
            .upsert(true)
            .await?;

        Ok(result.upserted_id.is_some())
    }

    async fn find_user(&self, user_id: &str) -> Result<Option<UserRecord>, AppError> {
        Ok(self.users().find_one(doc! { "_id": user_id }).await?)
    }

    async fn insert_recipe(
        &self,
        user_id: &str,
        recipe_id: &str,
        recipe: &Recipe,
    ) -> Result<InsertOutcome, AppError> {
        let path = recipe_path(recipe_id);

        let mut filter = doc! { "_id": user_id };
        filter.insert(path.clone(), doc! { "$exists": false });

        let mut fields = Document::new();
        fields.insert(path, mongodb::bson::to_bson(recipe)?);

        let result = self
            .users()
            .update_one(filter, doc! { "$set": fields })
            .await?;

        if result.matched_count > 0 {
            return Ok(InsertOutcome::Inserted);
        }

        if self.user_exists(user_id).await? {
            Ok(InsertOutcome::IdTaken)
        } else {
            Ok(InsertOutcome::UserMissing)
        }
    }

    async fn remove_recipe(&self, user_id: &str, recipe_id: &str) -> Result<RemoveOutcome, AppError> {
        let path = recipe_path(recipe_id);

        let mut filter = doc! { "_id": user_id };
        filter.insert(path.clone(), doc! { "$exists": true });

        let mut fields = Document::new();
        fields.insert(path, "");

        let result = self
            .users()
            .update_one(filter, doc! { "$unset": fields })
            .await?;

        if result.matched_count > 0 {
            return Ok(RemoveOutcome::Removed);
        }

        if self.user_exists(user_id).await? {
            Ok(RemoveOutcome::RecipeMissing)
        } else {
            Ok(RemoveOutcome::UserMissing)
        }
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
