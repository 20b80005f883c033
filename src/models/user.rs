use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Recipe;
use crate::utils::AppError;

/// Document of the "users" collection, one per user
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct UserRecord {
    #[serde(rename = "_id")]
    pub id: String, // user id issued by the identity provider
    pub name: String,
    pub uid: String,
    pub email: String,
    #[serde(default)]
    pub recipes: BTreeMap<String, Recipe>,
}

/// Profile fields written once, when the user document is first created
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub uid: String,
    pub email: String,
}

/// Query string of `GET /initialize/{user_id}`
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct InitializeQuery {
    pub display_name: Option<String>,
    pub uid: Option<String>,
    pub email: Option<String>,
}

impl InitializeQuery {
    pub fn into_new_user(self) -> Result<NewUser, AppError> {
        match (self.display_name, self.uid, self.email) {
            (Some(name), Some(uid), Some(email))
                if !name.is_empty() && !uid.is_empty() && !email.is_empty() =>
            {
                Ok(NewUser { name, uid, email })
            }
            _ => Err(AppError::Validation(
                "Required parameters are missing or undefined.".to_string(),
            )),
        }
    }
}

impl UserRecord {
    pub fn new(id: &str, user: &NewUser) -> Self {
        UserRecord {
            id: id.to_string(),
            name: user.name.clone(),
            uid: user.uid.clone(),
            email: user.email.clone(),
            recipes: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
