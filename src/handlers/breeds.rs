//! Breed handlers: list, get, search, create, update, delete.

use crate::error::AppError;
use crate::model::{Breed, BreedFilter};
use crate::service::{validate_breed, BreedService};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid breed id".into()))
}

fn decode_body(payload: Result<Json<Breed>, JsonRejection>) -> Result<Breed, AppError> {
    let Json(breed) = payload.map_err(|_| AppError::BadRequest("Invalid request body".into()))?;
    Ok(breed)
}

pub async fn list_breeds(State(state): State<AppState>) -> Result<Json<Vec<Breed>>, AppError> {
    let breeds = BreedService::list(&state.pool).await?;
    Ok(Json(breeds))
}

pub async fn get_breed(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<Breed>, AppError> {
    let id = parse_id(&id_str)?;
    let breed = BreedService::get(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(breed))
}

#[derive(Deserialize)]
pub struct SearchParams {
    species: Option<String>,
    weight: Option<String>,
}

pub async fn search_breeds(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Breed>>, AppError> {
    // An empty query value means the dimension is unconstrained.
    let mut filter = BreedFilter::default();
    if let Some(species) = params.species.filter(|s| !s.is_empty()) {
        filter.species = Some(species);
    }
    if let Some(weight) = params.weight.filter(|w| !w.is_empty()) {
        let weight: i64 = weight
            .parse()
            .map_err(|_| AppError::BadRequest("Invalid weight parameter".into()))?;
        filter.weight = Some(weight);
    }
    let breeds = BreedService::search(&state.pool, &filter).await?;
    Ok(Json(breeds))
}

pub async fn create_breed(
    State(state): State<AppState>,
    payload: Result<Json<Breed>, JsonRejection>,
) -> Result<(StatusCode, Json<Breed>), AppError> {
    let breed = decode_body(payload)?;
    validate_breed(&breed)?;
    let created = BreedService::create(&state.pool, &breed).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_breed(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    payload: Result<Json<Breed>, JsonRejection>,
) -> Result<Json<Breed>, AppError> {
    let id = parse_id(&id_str)?;
    let breed = decode_body(payload)?;
    validate_breed(&breed)?;
    let updated = BreedService::update(&state.pool, id, &breed)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(updated))
}

pub async fn delete_breed(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<String>, AppError> {
    let id = parse_id(&id_str)?;
    if !BreedService::delete(&state.pool, id).await? {
        return Err(AppError::NotFound);
    }
    Ok(Json(format!("Breed with id: {} deleted successfully", id)))
}
