// src/web/bioimpedancia_handlers.rs
use crate::{
    error::AppResult,
    models::bioimpedancia::{Bioimpedancia, BioimpedanciaUpdate},
    services::bioimpedancia_service,
    state::AppState,
    web::Paginacao,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

pub async fn handle_criar_bioimpedancia(
    State(state): State<AppState>,
    Json(payload): Json<Bioimpedancia>,
) -> AppResult<impl IntoResponse> {
    let medicao = bioimpedancia_service::criar_bioimpedancia(&state.db_pool, &payload).await?;
    Ok((StatusCode::CREATED, Json(medicao)))
}

pub async fn handle_listar_bioimpedancias(
    State(state): State<AppState>,
    Query(paginacao): Query<Paginacao>,
) -> AppResult<impl IntoResponse> {
    let medicoes = bioimpedancia_service::listar_bioimpedancias(&state.db_pool).await?;
    Ok(Json(paginacao.aplicar(medicoes)))
}

pub async fn handle_buscar_bioimpedancia(
    State(state): State<AppState>,
    Path(matricula): Path<i64>,
) -> AppResult<impl IntoResponse> {
    let medicao = bioimpedancia_service::buscar_bioimpedancia(&state.db_pool, matricula).await?;
    Ok(Json(medicao))
}

pub async fn handle_atualizar_bioimpedancia(
    State(state): State<AppState>,
    Path(matricula): Path<i64>,
    Json(payload): Json<BioimpedanciaUpdate>,
) -> AppResult<impl IntoResponse> {
    let medicao =
        bioimpedancia_service::atualizar_bioimpedancia(&state.db_pool, matricula, &payload).await?;
    Ok(Json(medicao))
}

pub async fn handle_apagar_bioimpedancia(
    State(state): State<AppState>,
    Path(matricula): Path<i64>,
) -> AppResult<impl IntoResponse> {
    bioimpedancia_service::apagar_bioimpedancia(&state.db_pool, matricula).await?;
    Ok(StatusCode::NO_CONTENT)
}
