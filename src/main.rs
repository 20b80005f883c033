mod api;
mod config;
mod database;
mod middleware;
mod models;
mod services;
mod state;
mod utils;

#[cfg(test)]
mod test_support;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::AppConfig;
use crate::services::{SpoonacularClient, UnwrangleClient};
use crate::state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("❌ Invalid configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
        }
    };

    log::info!("🚀 Starting Recipe Service...");

    // Initialize MongoDB connection
    let db = match database::MongoDB::new(&config.database_url).await {
        Ok(db) => db,
        Err(e) => {
            log::error!("❌ Failed to connect to MongoDB: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()));
        }
    };
    log::info!("✅ MongoDB connected: {}", database::database_name(&config.database_url));

    let http = match utils::http::build_client(config.upstream_timeout) {
        Ok(http) => http,
        Err(e) => return Err(std::io::Error::new(std::io::ErrorKind::Other, e.to_string())),
    };

    let state = web::Data::new(AppState {
        store: Arc::new(db),
        recipe_search: Arc::new(SpoonacularClient::new(
            http.clone(),
            &config.spoonacular_base_url,
            &config.spoonacular_api_key,
        )),
        product_search: Arc::new(UnwrangleClient::new(
            http,
            &config.unwrangle_base_url,
            &config.unwrangle_api_key,
        )),
    });

    let static_site = match config.static_dir.as_deref() {
        Some(dir) => match api::static_site::StaticSite::new(dir) {
            Ok(site) => {
                log::info!("🗂️  Serving frontend from {}", site.root().display());
                Some(site)
            }
            Err(e) => {
                log::warn!("⚠️  STATIC_DIR ignored: {}", e);
                None
            }
        },
        None => None,
    };

    let (host, port) = (config.host.clone(), config.port);
    log::info!("🌐 Server starting on {}:{}", host, port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", host, port);

    // Start HTTP server
    HttpServer::new(move || {
        // Any origin: the browser client may be served from a different host
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::AUTHORIZATION,
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        App::new()
            .app_data(state.clone())
            .wrap(cors)
            .wrap(middleware::SecurityHeaders)
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::swagger::ApiDoc::openapi()),
            )
            .configure(api::configure)
            .configure(|cfg| {
                if let Some(site) = &static_site {
                    site.configure(cfg);
                }
            })
            .default_service(web::to(api::not_found))
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
