use actix_web::{web, HttpResponse};

use crate::{
    models::{
        ErrorResponse, ProductSearchQuery, ProductSearchResponse, RecipeSearchQuery,
        RecipeSuggestionResponse,
    },
    services::{spoonacular_service, unwrangle_service},
    state::AppState,
    utils::AppError,
};

/// GET /search?ingredients=tomato,basil
/// First Spoonacular match together with its full information
#[utoipa::path(
    get,
    path = "/search",
    tag = "External",
    params(RecipeSearchQuery),
    responses(
        (status = 200, description = "Best match with its information", body = RecipeSuggestionResponse),
        (status = 400, description = "No ingredients given", body = ErrorResponse),
        (status = 404, description = "No recipe uses these ingredients", body = ErrorResponse),
        (status = 500, description = "Spoonacular failure", body = ErrorResponse)
    )
)]
pub async fn search_recipes(
    state: web::Data<AppState>,
    query: web::Query<RecipeSearchQuery>,
) -> Result<HttpResponse, AppError> {
    log::info!("🔍 GET /search?ingredients={}", query.ingredients.as_deref().unwrap_or(""));

    let suggestion =
        spoonacular_service::suggest_recipe(state.recipe_search.as_ref(), query.ingredients.as_deref())
            .await
            .map_err(|e| e.logged("Error fetching data from Spoonacular"))?;

    Ok(HttpResponse::Ok().json(RecipeSuggestionResponse { recipe: suggestion }))
}

/// GET /sam?ingredient=tomato
/// Sam's Club product search (payload relayed unchanged)
#[utoipa::path(
    get,
    path = "/sam",
    tag = "External",
    params(ProductSearchQuery),
    responses(
        (status = 200, description = "Raw product search payload", body = ProductSearchResponse),
        (status = 400, description = "No ingredient given", body = ErrorResponse),
        (status = 500, description = "Sam's Club search failure", body = ErrorResponse)
    )
)]
pub async fn search_sam(
    state: web::Data<AppState>,
    query: web::Query<ProductSearchQuery>,
) -> Result<HttpResponse, AppError> {
    log::info!("🛒 GET /sam?ingredient={}", query.ingredient.as_deref().unwrap_or(""));

    let response =
        unwrangle_service::search_products(state.product_search.as_ref(), query.ingredient.as_deref())
            .await
            .map_err(|e| e.logged("Error fetching data from Sam's Club"))?;

    Ok(HttpResponse::Ok().json(ProductSearchResponse { response }))
}

#[cfg(test)]
mod tests {
    use crate::database::MemoryStore;
    use crate::state::AppState;
    use crate::test_support::{StubProductSearch, StubRecipeSearch};
    use crate::utils::AppError;
    use actix_web::{test, web, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn state(recipe_search: StubRecipeSearch, product_search: StubProductSearch) -> AppState {
        AppState {
            store: Arc::new(MemoryStore::new()),
            recipe_search: Arc::new(recipe_search),
            product_search: Arc::new(product_search),
        }
    }

    #[actix_web::test]
    async fn test_search_merges_first_result_with_information() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(
                    StubRecipeSearch::new(
                        Ok(vec![json!({ "id": 42, "title": "Tomato Soup" })]),
                        Ok(json!({ "id": 42, "readyInMinutes": 30 })),
                    ),
                    StubProductSearch::new(Ok(Value::Null)),
                )))
                .configure(crate::api::configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/search?ingredients=tomato").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["recipe"]["recipe"]["title"], "Tomato Soup");
        assert_eq!(body["recipe"]["info"]["readyInMinutes"], 30);
    }

    #[actix_web::test]
    async fn test_search_with_no_matches_is_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(
                    StubRecipeSearch::new(Ok(vec![]), Ok(Value::Null)),
                    StubProductSearch::new(Ok(Value::Null)),
                )))
                .configure(crate::api::configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/search?ingredients=tomato").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "No recipes found for the given ingredients");
    }

    #[actix_web::test]
    async fn test_sam_relays_payload_and_surfaces_failures() {
        let payload = json!({ "results": [{ "name": "Tomatoes" }], "page": 1 });
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(
                    StubRecipeSearch::new(Ok(vec![]), Ok(Value::Null)),
                    StubProductSearch::new(Ok(payload.clone())),
                )))
                .configure(crate::api::configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/sam?ingredient=tomato").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({ "response": payload }));

        let failing = test::init_service(
            App::new()
                .app_data(web::Data::new(state(
                    StubRecipeSearch::new(Ok(vec![]), Ok(Value::Null)),
                    StubProductSearch::new(Err(AppError::Upstream(
                        "Sam's Club API error: 401 Unauthorized".to_string(),
                    ))),
                )))
                .configure(crate::api::configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/sam?ingredient=tomato").to_request();
        let resp = test::call_service(&failing, req).await;
        assert_eq!(resp.status(), 500);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Sam's Club API error: 401 Unauthorized");
    }

    #[actix_web::test]
    async fn test_sam_without_ingredient_is_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(
                    StubRecipeSearch::new(Ok(vec![]), Ok(Value::Null)),
                    StubProductSearch::new(Ok(Value::Null)),
                )))
                .configure(crate::api::configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/sam").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }
}
