//! Owner-scoped checklist routes

use super::{message, Message};
use crate::auth::Identity;
use crate::error::ApiResult;
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::{Extension, Json};
use listo_core::{Checklist, ChecklistId, ChecklistItem, UserId};
use listo_store::{ChecklistUpdate, NewChecklist};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateChecklistRequest {
    pub title: String,
    #[serde(default)]
    pub locked: bool,
}

#[derive(Debug, Deserialize)]
pub struct UpdateChecklistRequest {
    pub title: String,
    pub locked: bool,
}

#[derive(Debug, Serialize)]
pub struct ChecklistList {
    pub checklists: Vec<Checklist>,
}

#[derive(Debug, Serialize)]
pub struct ChecklistWithItems {
    pub checklist: Checklist,
    pub items: Vec<ChecklistItem>,
}

#[derive(Debug, Serialize)]
pub struct ChecklistSaved {
    pub message: &'static str,
    pub checklist: Checklist,
}

pub async fn list(
    State(state): State<AppState>,
    Extension(Identity(user)): Extension<Identity>,
) -> ApiResult<Json<ChecklistList>> {
    let checklists = state.checklists.list(&user).await?;
    Ok(Json(ChecklistList { checklists }))
}

pub async fn get(
    State(state): State<AppState>,
    Extension(Identity(user)): Extension<Identity>,
    Path(id): Path<String>,
) -> ApiResult<Json<ChecklistWithItems>> {
    read(&state, &user, &ChecklistId::new(id)?).await
}

pub async fn create(
    State(state): State<AppState>,
    Extension(Identity(user)): Extension<Identity>,
    payload: Result<Json<CreateChecklistRequest>, JsonRejection>,
) -> ApiResult<Json<ChecklistSaved>> {
    let Json(body) = payload?;
    let checklist = state
        .checklists
        .create(
            &user,
            NewChecklist {
                title: body.title,
                locked: body.locked,
            },
        )
        .await?;
    Ok(Json(ChecklistSaved {
        message: "Checklist created",
        checklist,
    }))
}

pub async fn update(
    State(state): State<AppState>,
    Extension(Identity(user)): Extension<Identity>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateChecklistRequest>, JsonRejection>,
) -> ApiResult<Json<ChecklistSaved>> {
    let Json(body) = payload?;
    write(&state, &user, &ChecklistId::new(id)?, body).await
}

pub async fn delete(
    State(state): State<AppState>,
    Extension(Identity(user)): Extension<Identity>,
    Path(id): Path<String>,
) -> ApiResult<Json<Message>> {
    state.checklists.delete(&user, &ChecklistId::new(id)?).await?;
    Ok(message("Checklist deleted"))
}

pub(crate) async fn read(
    state: &AppState,
    owner: &UserId,
    id: &ChecklistId,
) -> ApiResult<Json<ChecklistWithItems>> {
    let checklist = state.checklists.get(owner, id).await?;
    let items = state.checklists.items(owner, id).await?;
    Ok(Json(ChecklistWithItems { checklist, items }))
}

pub(crate) async fn write(
    state: &AppState,
    owner: &UserId,
    id: &ChecklistId,
    body: UpdateChecklistRequest,
) -> ApiResult<Json<ChecklistSaved>> {
    let checklist = state
        .checklists
        .update(
            owner,
            id,
            ChecklistUpdate {
                title: body.title,
                locked: body.locked,
            },
        )
        .await?;
    Ok(Json(ChecklistSaved {
        message: "Checklist updated",
        checklist,
    }))
}
