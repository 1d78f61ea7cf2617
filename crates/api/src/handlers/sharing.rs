//! Issuing and redeeming share codes

use crate::auth::Identity;
use crate::error::ApiResult;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::{Extension, Json};
use listo_core::ChecklistId;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ShareCodeIssued {
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct Joined {
    pub message: &'static str,
    pub checklist_id: ChecklistId,
}

/// Issue a share code for one of the caller's own checklists
pub async fn issue(
    State(state): State<AppState>,
    Extension(Identity(user)): Extension<Identity>,
    Path(id): Path<String>,
) -> ApiResult<Json<ShareCodeIssued>> {
    let id = ChecklistId::new(id)?;
    state.checklists.get(&user, &id).await?;

    let code = state.sharing.issue(&id, &user).await?;
    Ok(Json(ShareCodeIssued {
        code: code.to_string(),
    }))
}

/// Join the checklist a share code points at
pub async fn redeem(
    State(state): State<AppState>,
    Extension(Identity(user)): Extension<Identity>,
    Path(code): Path<String>,
) -> ApiResult<Json<Joined>> {
    let redemption = state.sharing.redeem(&code, &user).await?;
    state.access.join(&redemption, &user).await?;

    Ok(Json(Joined {
        message: "Added to checklist",
        checklist_id: redemption.checklist_id,
    }))
}
