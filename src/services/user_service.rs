// ==================== USER INITIALIZATION ====================
// Creates the user document on first sign-in; later calls change nothing

use crate::{
    database::RecipeStore,
    models::InitializeQuery,
    utils::AppError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Created,
    AlreadyExists,
}

impl InitOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            InitOutcome::Created => "User initialized",
            InitOutcome::AlreadyExists => "User already exists",
        }
    }
}

/// GET /initialize/{user_id} - Creates the user if it does not exist yet
pub async fn initialize_user(
    store: &dyn RecipeStore,
    user_id: &str,
    query: InitializeQuery,
) -> Result<InitOutcome, AppError> {
    if user_id.is_empty() {
        return Err(AppError::Validation("User ID not provided".to_string()));
    }
    let new_user = query.into_new_user()?;

    log::info!("👤 Initializing user {}", user_id);

    if store.create_user_if_absent(user_id, &new_user).await? {
        log::info!("✅ User {} created", user_id);
        Ok(InitOutcome::Created)
    } else {
        log::info!("ℹ️  User {} already exists", user_id);
        Ok(InitOutcome::AlreadyExists)
    }
}
