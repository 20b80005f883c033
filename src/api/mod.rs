pub mod external;
pub mod health;
pub mod recipes;
pub mod static_site;
pub mod swagger;
pub mod users;

use actix_web::{web, HttpRequest, HttpResponse};

use crate::utils::AppError;

/// Registers every route of the service. Shared by `main` and the handler tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        // Health check
        .route("/health", web::get().to(health::health_check))
        // Users
        .route("/initialize/{user_id}", web::get().to(users::initialize_user))
        // Recipes
        .service(
            web::scope("/recipes")
                .route("/{user_id}", web::get().to(recipes::list_recipes))
                .route("/{user_id}", web::post().to(recipes::add_recipe))
                .route("/{user_id}/{recipe_id}", web::get().to(recipes::get_recipe))
                .route("/{user_id}/{recipe_id}", web::delete().to(recipes::delete_recipe)),
        )
        // External APIs
        .route("/search", web::get().to(external::search_recipes))
        .route("/sam", web::get().to(external::search_sam));
}

/// Undecodable JSON bodies get the same `{ "error": ... }` shape as handler errors
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        AppError::Validation(format!("Invalid request body: {}", err))
            .logged("Rejected request body")
            .into()
    })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        AppError::Validation(format!("Invalid query string: {}", err))
            .logged("Rejected query string")
            .into()
    })
}

/// Fallback for unknown routes, and for API-prefixed misses when the frontend is served
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    log::debug!("🔎 No route for {} {}", req.method(), req.path());
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "Not found"
    }))
}
