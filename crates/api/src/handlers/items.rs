//! Owner-scoped item routes

use super::{message, Message};
use crate::auth::Identity;
use crate::error::ApiResult;
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::{Extension, Json};
use listo_core::{ChecklistId, ChecklistItem, ItemId, UserId};
use listo_store::{ItemUpdate, NewItem};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub content: String,
    #[serde(default)]
    pub ordering: i64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateItemRequest {
    pub content: String,
    pub checked: bool,
    pub ordering: i64,
}

#[derive(Debug, Deserialize)]
pub struct SetAllCheckedRequest {
    pub checked: bool,
}

#[derive(Debug, Serialize)]
pub struct ItemSaved {
    pub message: &'static str,
    pub item: ChecklistItem,
}

#[derive(Debug, Serialize)]
pub struct ItemsUpdated {
    pub message: &'static str,
    pub updated: usize,
}

pub async fn create(
    State(state): State<AppState>,
    Extension(Identity(user)): Extension<Identity>,
    Path(checklist): Path<String>,
    payload: Result<Json<CreateItemRequest>, JsonRejection>,
) -> ApiResult<Json<ItemSaved>> {
    let Json(body) = payload?;
    add(&state, &user, &ChecklistId::new(checklist)?, body).await
}

pub async fn update(
    State(state): State<AppState>,
    Extension(Identity(user)): Extension<Identity>,
    Path((checklist, item)): Path<(String, String)>,
    payload: Result<Json<UpdateItemRequest>, JsonRejection>,
) -> ApiResult<Json<ItemSaved>> {
    let Json(body) = payload?;
    edit(
        &state,
        &user,
        &ChecklistId::new(checklist)?,
        &ItemId::new(item)?,
        body,
    )
    .await
}

pub async fn set_all_checked(
    State(state): State<AppState>,
    Extension(Identity(user)): Extension<Identity>,
    Path(checklist): Path<String>,
    payload: Result<Json<SetAllCheckedRequest>, JsonRejection>,
) -> ApiResult<Json<ItemsUpdated>> {
    let Json(body) = payload?;
    toggle_all(&state, &user, &ChecklistId::new(checklist)?, body).await
}

pub async fn delete(
    State(state): State<AppState>,
    Extension(Identity(user)): Extension<Identity>,
    Path((checklist, item)): Path<(String, String)>,
) -> ApiResult<Json<Message>> {
    remove(&state, &user, &ChecklistId::new(checklist)?, &ItemId::new(item)?).await
}

pub(crate) async fn add(
    state: &AppState,
    owner: &UserId,
    checklist: &ChecklistId,
    body: CreateItemRequest,
) -> ApiResult<Json<ItemSaved>> {
    let item = state
        .checklists
        .create_item(
            owner,
            checklist,
            NewItem {
                content: body.content,
                ordering: body.ordering,
            },
        )
        .await?;
    Ok(Json(ItemSaved {
        message: "Item created",
        item,
    }))
}

pub(crate) async fn edit(
    state: &AppState,
    owner: &UserId,
    checklist: &ChecklistId,
    item: &ItemId,
    body: UpdateItemRequest,
) -> ApiResult<Json<ItemSaved>> {
    let item = state
        .checklists
        .update_item(
            owner,
            checklist,
            item,
            ItemUpdate {
                content: body.content,
                checked: body.checked,
                ordering: body.ordering,
            },
        )
        .await?;
    Ok(Json(ItemSaved {
        message: "Item updated",
        item,
    }))
}

pub(crate) async fn toggle_all(
    state: &AppState,
    owner: &UserId,
    checklist: &ChecklistId,
    body: SetAllCheckedRequest,
) -> ApiResult<Json<ItemsUpdated>> {
    let updated = state
        .checklists
        .set_all_checked(owner, checklist, body.checked)
        .await?;
    Ok(Json(ItemsUpdated {
        message: "Items updated",
        updated,
    }))
}

pub(crate) async fn remove(
    state: &AppState,
    owner: &UserId,
    checklist: &ChecklistId,
    item: &ItemId,
) -> ApiResult<Json<Message>> {
    state.checklists.delete_item(owner, checklist, item).await?;
    Ok(message("Item deleted"))
}
