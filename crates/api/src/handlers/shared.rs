//! Routes on checklists shared with the caller
//!
//! Each handler resolves the owner first and then runs the owner-scoped
//! logic in the owner's partition.

use super::checklists::{
    self, ChecklistList, ChecklistSaved, ChecklistWithItems, UpdateChecklistRequest,
};
use super::items::{
    self, CreateItemRequest, ItemSaved, ItemsUpdated, SetAllCheckedRequest, UpdateItemRequest,
};
use super::{message, Message};
use crate::auth::Identity;
use crate::error::ApiResult;
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::{Extension, Json};
use listo_core::{ChecklistId, ItemId, UserId};

async fn owner_of(state: &AppState, user: &UserId, checklist: &ChecklistId) -> ApiResult<UserId> {
    Ok(state.access.resolve_owner(user, checklist).await?)
}

pub async fn list(
    State(state): State<AppState>,
    Extension(Identity(user)): Extension<Identity>,
) -> ApiResult<Json<ChecklistList>> {
    let checklists = state.access.shared_checklists(&user).await?;
    Ok(Json(ChecklistList { checklists }))
}

pub async fn get(
    State(state): State<AppState>,
    Extension(Identity(user)): Extension<Identity>,
    Path(id): Path<String>,
) -> ApiResult<Json<ChecklistWithItems>> {
    let id = ChecklistId::new(id)?;
    let owner = owner_of(&state, &user, &id).await?;
    checklists::read(&state, &owner, &id).await
}

pub async fn update(
    State(state): State<AppState>,
    Extension(Identity(user)): Extension<Identity>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateChecklistRequest>, JsonRejection>,
) -> ApiResult<Json<ChecklistSaved>> {
    let id = ChecklistId::new(id)?;
    let owner = owner_of(&state, &user, &id).await?;
    let Json(body) = payload?;
    checklists::write(&state, &owner, &id, body).await
}

pub async fn leave(
    State(state): State<AppState>,
    Extension(Identity(user)): Extension<Identity>,
    Path(id): Path<String>,
) -> ApiResult<Json<Message>> {
    state
        .access
        .remove_collaborator(&user, &ChecklistId::new(id)?)
        .await?;
    Ok(message("Left checklist"))
}

pub async fn create_item(
    State(state): State<AppState>,
    Extension(Identity(user)): Extension<Identity>,
    Path(id): Path<String>,
    payload: Result<Json<CreateItemRequest>, JsonRejection>,
) -> ApiResult<Json<ItemSaved>> {
    let id = ChecklistId::new(id)?;
    let owner = owner_of(&state, &user, &id).await?;
    let Json(body) = payload?;
    items::add(&state, &owner, &id, body).await
}

pub async fn set_all_checked(
    State(state): State<AppState>,
    Extension(Identity(user)): Extension<Identity>,
    Path(id): Path<String>,
    payload: Result<Json<SetAllCheckedRequest>, JsonRejection>,
) -> ApiResult<Json<ItemsUpdated>> {
    let id = ChecklistId::new(id)?;
    let owner = owner_of(&state, &user, &id).await?;
    let Json(body) = payload?;
    items::toggle_all(&state, &owner, &id, body).await
}

pub async fn update_item(
    State(state): State<AppState>,
    Extension(Identity(user)): Extension<Identity>,
    Path((id, item)): Path<(String, String)>,
    payload: Result<Json<UpdateItemRequest>, JsonRejection>,
) -> ApiResult<Json<ItemSaved>> {
    let (id, item) = (ChecklistId::new(id)?, ItemId::new(item)?);
    let owner = owner_of(&state, &user, &id).await?;
    let Json(body) = payload?;
    items::edit(&state, &owner, &id, &item, body).await
}

pub async fn delete_item(
    State(state): State<AppState>,
    Extension(Identity(user)): Extension<Identity>,
    Path((id, item)): Path<(String, String)>,
) -> ApiResult<Json<Message>> {
    let (id, item) = (ChecklistId::new(id)?, ItemId::new(item)?);
    let owner = owner_of(&state, &user, &id).await?;
    items::remove(&state, &owner, &id, &item).await
}
