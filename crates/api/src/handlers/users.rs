//! The caller's profile

use crate::auth::Identity;
use crate::error::ApiResult;
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::{Extension, Json};
use listo_core::{Error, User};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct UpsertUserRequest {
    pub email: String,
    #[serde(default)]
    pub picture: String,
}

#[derive(Debug, Serialize)]
pub struct UserSaved {
    pub message: &'static str,
    pub user: User,
}

/// Store the caller's email and picture
///
/// A first-time caller also gets the introductory checklist. It is written
/// before the profile, so a failed first visit is completed on retry.
pub async fn upsert(
    State(state): State<AppState>,
    Extension(Identity(user)): Extension<Identity>,
    payload: Result<Json<UpsertUserRequest>, JsonRejection>,
) -> ApiResult<Json<UserSaved>> {
    let Json(body) = payload?;
    let email = body.email.trim();
    if email.is_empty() {
        return Err(Error::validation("email", "is required").into());
    }

    let profile = User {
        id: user,
        email: email.to_string(),
        picture: body.picture,
    };
    if state.users.get(&profile.id).await?.is_none() {
        state.checklists.create_introductory(&profile.id).await?;
    }
    let created = state.users.upsert(&profile).await?;
    if created {
        info!(user_id = %profile.id, "Welcomed new user");
    }

    Ok(Json(UserSaved {
        message: if created { "User created" } else { "User updated" },
        user: profile,
    }))
}
