// src/web/instrutor_handlers.rs
use crate::{
    error::AppResult,
    models::instrutor::{InstrutorCreate, InstrutorUpdate},
    services::instrutor_service,
    state::AppState,
    web::Paginacao,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

pub async fn handle_criar_instrutor(
    State(state): State<AppState>,
    Json(payload): Json<InstrutorCreate>,
) -> AppResult<impl IntoResponse> {
    let instrutor = instrutor_service::criar_instrutor(&state.db_pool, &payload).await?;
    Ok((StatusCode::CREATED, Json(instrutor)))
}

pub async fn handle_listar_instrutores(
    State(state): State<AppState>,
    Query(paginacao): Query<Paginacao>,
) -> AppResult<impl IntoResponse> {
    let instrutores = instrutor_service::listar_instrutores(&state.db_pool).await?;
    Ok(Json(paginacao.aplicar(instrutores)))
}

pub async fn handle_buscar_instrutor(
    State(state): State<AppState>,
    Path(cref): Path<i64>,
) -> AppResult<impl IntoResponse> {
    let instrutor = instrutor_service::buscar_instrutor(&state.db_pool, cref).await?;
    Ok(Json(instrutor))
}

pub async fn handle_atualizar_instrutor(
    State(state): State<AppState>,
    Path(cref): Path<i64>,
    Json(payload): Json<InstrutorUpdate>,
) -> AppResult<impl IntoResponse> {
    let instrutor = instrutor_service::atualizar_instrutor(&state.db_pool, cref, &payload).await?;
    Ok(Json(instrutor))
}

pub async fn handle_apagar_instrutor(
    State(state): State<AppState>,
    Path(cref): Path<i64>,
) -> AppResult<impl IntoResponse> {
    instrutor_service::apagar_instrutor(&state.db_pool, cref).await?;
    Ok(StatusCode::NO_CONTENT)
}
