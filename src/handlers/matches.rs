use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use axum_extra::extract::WithRejection;
use serde_json::{json, Value};

use crate::errors::{AppError, Result};
use crate::models::matches::{CardKind, ExtraTimeUpdate, GoalsUpdate, Match, MatchPayload};
use crate::service::MatchService;

pub async fn list_matches(State(service): State<MatchService>) -> Result<Json<Vec<Match>>> {
    Ok(Json(service.list().await?))
}

pub async fn get_match(
    State(service): State<MatchService>,
    Path(id): Path<String>,
) -> Result<Json<Match>> {
    Ok(Json(service.get(&id).await?))
}

pub async fn create_match(
    State(service): State<MatchService>,
    WithRejection(Json(payload), _): WithRejection<Json<MatchPayload>, AppError>,
) -> Result<(StatusCode, Json<Match>)> {
    let created = service.create(payload).await?;
    tracing::info!("created match {} ({} vs {})", created.id, created.team1, created.team2);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_match(
    State(service): State<MatchService>,
    Path(id): Path<String>,
    WithRejection(Json(payload), _): WithRejection<Json<MatchPayload>, AppError>,
) -> Result<Json<Match>> {
    Ok(Json(service.replace(&id, payload).await?))
}

pub async fn delete_match(
    State(service): State<MatchService>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    service.delete(&id).await?;
    Ok(Json(json!({ "message": "Match deleted successfully" })))
}

pub async fn update_goals(
    State(service): State<MatchService>,
    Path(id): Path<String>,
    WithRejection(Json(update), _): WithRejection<Json<GoalsUpdate>, AppError>,
) -> Result<Json<Match>> {
    Ok(Json(service.apply_goals(&id, update).await?))
}

pub async fn register_yellow_card(
    State(service): State<MatchService>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    service.apply_card(&id, CardKind::Yellow).await?;
    Ok(Json(json!({ "message": "Yellow card registered" })))
}

pub async fn register_red_card(
    State(service): State<MatchService>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    service.apply_card(&id, CardKind::Red).await?;
    Ok(Json(json!({ "message": "Red card registered" })))
}

pub async fn update_extra_time(
    State(service): State<MatchService>,
    Path(id): Path<String>,
    WithRejection(Json(update), _): WithRejection<Json<ExtraTimeUpdate>, AppError>,
) -> Result<Json<Value>> {
    service.apply_extra_time(&id, update.minutes).await?;
    Ok(Json(json!({ "message": "Extra time updated" })))
}
