// src/web/plano_handlers.rs
use crate::{
    error::AppResult,
    models::plano::{PlanoCreate, PlanoUpdate},
    services::plano_service,
    state::AppState,
    web::Paginacao,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

pub async fn handle_criar_plano(
    State(state): State<AppState>,
    Json(payload): Json<PlanoCreate>,
) -> AppResult<impl IntoResponse> {
    let plano = plano_service::criar_plano(&state.db_pool, &payload).await?;
    Ok((StatusCode::CREATED, Json(plano)))
}

pub async fn handle_listar_planos(
    State(state): State<AppState>,
    Query(paginacao): Query<Paginacao>,
) -> AppResult<impl IntoResponse> {
    let planos = plano_service::listar_planos(&state.db_pool).await?;
    Ok(Json(paginacao.aplicar(planos)))
}

pub async fn handle_buscar_plano(
    State(state): State<AppState>,
    Path(codigo_plano): Path<i64>,
) -> AppResult<impl IntoResponse> {
    let plano = plano_service::buscar_plano(&state.db_pool, codigo_plano).await?;
    Ok(Json(plano))
}

pub async fn handle_atualizar_plano(
    State(state): State<AppState>,
    Path(codigo_plano): Path<i64>,
    Json(payload): Json<PlanoUpdate>,
) -> AppResult<impl IntoResponse> {
    let plano = plano_service::atualizar_plano(&state.db_pool, codigo_plano, &payload).await?;
    Ok(Json(plano))
}

pub async fn handle_apagar_plano(
    State(state): State<AppState>,
    Path(codigo_plano): Path<i64>,
) -> AppResult<impl IntoResponse> {
    plano_service::apagar_plano(&state.db_pool, codigo_plano).await?;
    Ok(StatusCode::NO_CONTENT)
}
