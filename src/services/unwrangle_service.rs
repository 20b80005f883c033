use async_trait::async_trait;
use serde_json::Value;

use crate::utils::{http::fetch_json, AppError};

pub const UNWRANGLE_API_BASE: &str = "https://data.unwrangle.com/api";

/// Retail product search (Sam's Club through Unwrangle)
#[async_trait]
pub trait ProductSearchProvider: Send + Sync {
    async fn search_products(&self, ingredient: &str) -> Result<Value, AppError>;
}

pub struct UnwrangleClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl UnwrangleClient {
    pub fn new(http: reqwest::Client, base_url: &str, api_key: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }
}

#[async_trait]
impl ProductSearchProvider for UnwrangleClient {
    async fn search_products(&self, ingredient: &str) -> Result<Value, AppError> {
        log::info!("🛒 Sam's Club search: {}", ingredient);

        let request = self.http.get(format!("{}/getter", self.base_url)).query(&[
            ("platform", "samsclub_search"),
            ("search", ingredient),
            ("page", "1"),
            ("api_key", self.api_key.as_str()),
        ]);

        fetch_json(request, "Sam's Club").await
    }
}

/// GET /sam - Relays the raw product search payload
pub async fn search_products(
    provider: &dyn ProductSearchProvider,
    ingredient: Option<&str>,
) -> Result<Value, AppError> {
    let ingredient = ingredient
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::Validation("Ingredient not provided".to_string()))?;

    provider.search_products(ingredient).await
}
