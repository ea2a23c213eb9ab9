//! One axum handler per endpoint.
//!
//! Each handler validates its input, runs a single [`Greenhouse`] operation
//! (which opens, commits or rolls back, and closes its own session) and maps
//! the outcome onto the endpoint's response shape or status code.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use greenhouse_core::{
    CreatePlant, Greenhouse, GreenhouseError, PageRequest, Plant, UpdatePlantRequest,
};
use serde::Serialize;

use crate::error::ApiError;

pub type AppState = Arc<Greenhouse>;

// ==================
// Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct PlantListResponse {
    pub success: bool,
    pub plants: Vec<Plant>,
    pub current_page: u32,
    pub number_of_plants: usize,
}

#[derive(Debug, Serialize)]
pub struct PlantResponse {
    pub success: bool,
    pub plant: Plant,
}

#[derive(Debug, Serialize)]
pub struct CreatePlantResponse {
    pub success: bool,
    pub new_plant_id: u64,
    pub plants: Vec<Plant>,
    pub current_page_number: u32,
    pub number_of_plants: usize,
}

#[derive(Debug, Serialize)]
pub struct UpdatePlantResponse {
    pub success: bool,
    pub id: u64,
}

#[derive(Debug, Serialize)]
pub struct DeletePlantResponse {
    pub success: bool,
    pub deleted_plant_id: u64,
    pub plants: Vec<Plant>,
    pub current_page: u32,
    pub number_of_plants: usize,
}

#[derive(Debug, Serialize)]
pub struct SearchPlantsResponse {
    pub success: bool,
    pub plants: Vec<Plant>,
    pub no_plants: usize,
    pub current_page: u32,
}

// ==================
// Helper Functions
// ==================

/// Path IDs that are not positive integers name no plant at all.
fn parse_plant_id(raw: &str) -> Result<u64, ApiError> {
    raw.parse::<u64>().map_err(|_| ApiError::not_found())
}

// ==================
// Handlers
// ==================

pub async fn home() -> Json<HomeResponse> {
    Json(HomeResponse { success: true })
}

pub async fn list_plants(
    State(greenhouse): State<AppState>,
    Query(page): Query<PageRequest>,
) -> Result<Json<PlantListResponse>, ApiError> {
    let page = greenhouse.list_plants(page).await.map_err(|e| {
        ApiError::classify("list plants", &e, StatusCode::INTERNAL_SERVER_ERROR)
    })?;

    if page.is_empty() {
        return Err(ApiError::not_found());
    }

    Ok(Json(PlantListResponse {
        success: true,
        plants: page.plants,
        current_page: page.current_page,
        number_of_plants: page.total,
    }))
}

pub async fn get_plant(
    State(greenhouse): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PlantResponse>, ApiError> {
    let id = parse_plant_id(&id)?;
    let plant = greenhouse.get_plant(id).await.map_err(|e| {
        ApiError::classify("get plant", &e, StatusCode::INTERNAL_SERVER_ERROR)
    })?;

    Ok(Json(PlantResponse {
        success: true,
        plant,
    }))
}

pub async fn create_plant(
    State(greenhouse): State<AppState>,
    Query(page): Query<PageRequest>,
    body: Bytes,
) -> Result<Json<CreatePlantResponse>, ApiError> {
    let unprocessable = |e: GreenhouseError| {
        ApiError::with_cause(StatusCode::UNPROCESSABLE_ENTITY, "create plant", &e)
    };

    let draft = CreatePlant::from_json(&body).map_err(unprocessable)?;
    let created = greenhouse
        .create_plant(draft, page)
        .await
        .map_err(unprocessable)?;

    Ok(Json(CreatePlantResponse {
        success: true,
        new_plant_id: created.id,
        plants: created.page.plants,
        current_page_number: created.page.current_page,
        number_of_plants: created.page.total,
    }))
}

pub async fn update_plant(
    State(greenhouse): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<UpdatePlantResponse>, ApiError> {
    let id = parse_plant_id(&id)?;

    // The plant must exist before the body is even looked at.
    greenhouse.get_plant(id).await.map_err(|e| {
        ApiError::classify("update plant", &e, StatusCode::INTERNAL_SERVER_ERROR)
    })?;

    let changes = UpdatePlantRequest::from_json(&body).map_err(|e| {
        ApiError::with_cause(StatusCode::INTERNAL_SERVER_ERROR, "update plant", &e)
    })?;

    let id = greenhouse.update_plant(id, changes).await.map_err(|e| {
        ApiError::classify("update plant", &e, StatusCode::INTERNAL_SERVER_ERROR)
    })?;

    Ok(Json(UpdatePlantResponse { success: true, id }))
}

pub async fn delete_plant(
    State(greenhouse): State<AppState>,
    Path(id): Path<String>,
    Query(page): Query<PageRequest>,
) -> Result<Json<DeletePlantResponse>, ApiError> {
    let id = parse_plant_id(&id)?;
    let deleted = greenhouse.delete_plant(id, page).await.map_err(|e| {
        ApiError::classify("delete plant", &e, StatusCode::INTERNAL_SERVER_ERROR)
    })?;

    Ok(Json(DeletePlantResponse {
        success: true,
        deleted_plant_id: deleted.id,
        plants: deleted.page.plants,
        current_page: deleted.page.current_page,
        number_of_plants: deleted.page.total,
    }))
}

pub async fn search_plants(
    State(greenhouse): State<AppState>,
    Path(name): Path<String>,
    Query(page): Query<PageRequest>,
) -> Result<Json<SearchPlantsResponse>, ApiError> {
    let page = greenhouse.search_plants(&name, page).await.map_err(|e| {
        ApiError::with_cause(StatusCode::INTERNAL_SERVER_ERROR, "search plants", &e)
    })?;

    Ok(Json(SearchPlantsResponse {
        success: true,
        plants: page.plants,
        no_plants: page.total,
        current_page: page.current_page,
    }))
}

pub async fn not_found() -> ApiError {
    ApiError::not_found()
}
