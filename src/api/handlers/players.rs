use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;

use super::{AppState, PlayerParams};
use crate::domain::{Player, PlayerPatch};
use crate::errors::{ServiceError, ServiceResult};
use crate::services::players::check_and_parse_id;

fn query_params(params: Result<Query<PlayerParams>, QueryRejection>) -> ServiceResult<PlayerParams> {
    params
        .map(|Query(params)| params)
        .map_err(|rejection| ServiceError::bad_request(rejection.body_text()))
}

fn json_body(body: Result<Json<PlayerPatch>, JsonRejection>) -> ServiceResult<PlayerPatch> {
    body.map(|Json(patch)| patch)
        .map_err(|rejection| ServiceError::bad_request(rejection.body_text()))
}

pub async fn list_players(
    State(state): State<Arc<AppState>>,
    params: Result<Query<PlayerParams>, QueryRejection>,
) -> ServiceResult<Json<Vec<Player>>> {
    let params = query_params(params)?;
    let page = params.page(&state.config);

    let players = state.service.list(&params.filter().predicate(), Some(&page))?;
    Ok(Json(players))
}

pub async fn count_players(
    State(state): State<Arc<AppState>>,
    params: Result<Query<PlayerParams>, QueryRejection>,
) -> ServiceResult<Json<u64>> {
    let params = query_params(params)?;
    let count = state.service.count(&params.filter().predicate())?;
    Ok(Json(count))
}

pub async fn create_player(
    State(state): State<Arc<AppState>>,
    body: Result<Json<PlayerPatch>, JsonRejection>,
) -> ServiceResult<Json<Player>> {
    let request = json_body(body)?;
    Ok(Json(state.service.create(request)?))
}

pub async fn get_player(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ServiceResult<Json<Player>> {
    let id = check_and_parse_id(Some(id.as_str()))?;
    Ok(Json(state.service.get(id)?))
}

pub async fn update_player(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<PlayerPatch>, JsonRejection>,
) -> ServiceResult<Json<Player>> {
    let id = check_and_parse_id(Some(id.as_str()))?;
    let patch = json_body(body)?;
    Ok(Json(state.service.update(id, patch)?))
}

pub async fn delete_player(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ServiceResult<StatusCode> {
    let id = check_and_parse_id(Some(id.as_str()))?;
    state.service.delete(id)?;
    Ok(StatusCode::OK)
}
