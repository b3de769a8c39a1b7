//! Product CRUD handlers: list, get, create, update, delete.

use crate::error::AppError;
use crate::model::Product;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let products = state.service.list().await?;
    Ok((StatusCode::OK, Json(products)))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let product = state.service.get(id).await?.ok_or(AppError::NotFound)?;
    Ok((StatusCode::OK, Json(product)))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Product>,
) -> Result<impl IntoResponse, AppError> {
    let id = state.service.insert(&body).await?;
    let created = Product { id, ..body };
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/product/{}", id))],
        Json(created),
    ))
}

/// The path id must equal the body id; mismatch is the one business-rule
/// rejection on this surface.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<Product>,
) -> Result<impl IntoResponse, AppError> {
    if id != body.id {
        return Err(AppError::IdMismatch);
    }
    if !state.service.update(&body).await? {
        return Err(AppError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    if !state.service.delete(id).await? {
        return Err(AppError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}
