use actix_web::{web, HttpResponse};

use crate::{
    models::{ErrorResponse, InitializeQuery, MessageResponse},
    services::user_service,
    state::AppState,
    utils::AppError,
};

/// GET /initialize/{user_id}?displayName=&uid=&email=
/// Called by the frontend right after identity-provider sign-in
#[utoipa::path(
    get,
    path = "/initialize/{user_id}",
    tag = "Users",
    params(
        ("user_id" = String, Path, description = "User id issued by the identity provider"),
        InitializeQuery
    ),
    responses(
        (status = 200, description = "User initialized, or already existed", body = MessageResponse),
        (status = 400, description = "Missing profile parameters", body = ErrorResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn initialize_user(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
    query: web::Query<InitializeQuery>,
) -> Result<HttpResponse, AppError> {
    log::info!("👤 GET /initialize/{}", user_id);

    let outcome = user_service::initialize_user(state.store.as_ref(), &user_id, query.into_inner())
        .await
        .map_err(|e| e.logged("Error initializing user"))?;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: outcome.message().to_string(),
    }))
}
