// src/web/turma_handlers.rs
use crate::{
    error::AppResult,
    models::turma::{TurmaCreate, TurmaUpdate},
    services::turma_service,
    state::AppState,
    web::Paginacao,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

pub async fn handle_criar_turma(
    State(state): State<AppState>,
    Json(payload): Json<TurmaCreate>,
) -> AppResult<impl IntoResponse> {
    let turma = turma_service::criar_turma(&state.db_pool, &payload).await?;
    Ok((StatusCode::CREATED, Json(turma)))
}

pub async fn handle_listar_turmas(
    State(state): State<AppState>,
    Query(paginacao): Query<Paginacao>,
) -> AppResult<impl IntoResponse> {
    let turmas = turma_service::listar_turmas(&state.db_pool).await?;
    Ok(Json(paginacao.aplicar(turmas)))
}

pub async fn handle_buscar_turma(
    State(state): State<AppState>,
    Path(id_turma): Path<i64>,
) -> AppResult<impl IntoResponse> {
    let turma = turma_service::buscar_turma(&state.db_pool, id_turma).await?;
    Ok(Json(turma))
}

pub async fn handle_atualizar_turma(
    State(state): State<AppState>,
    Path(id_turma): Path<i64>,
    Json(payload): Json<TurmaUpdate>,
) -> AppResult<impl IntoResponse> {
    let turma = turma_service::atualizar_turma(&state.db_pool, id_turma, &payload).await?;
    Ok(Json(turma))
}

pub async fn handle_apagar_turma(
    State(state): State<AppState>,
    Path(id_turma): Path<i64>,
) -> AppResult<impl IntoResponse> {
    turma_service::apagar_turma(&state.db_pool, id_turma).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /turmas/{id_turma}/alunos/{matricula} — matrícula com controle de vagas.
pub async fn handle_matricular(
    State(state): State<AppState>,
    Path((id_turma, matricula)): Path<(i64, i64)>,
) -> AppResult<impl IntoResponse> {
    turma_service::matricular(&state.db_pool, id_turma, matricula).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Aluno matriculado com sucesso" })),
    ))
}

/// DELETE /turmas/{id_turma}/alunos/{matricula}
pub async fn handle_desmatricular(
    State(state): State<AppState>,
    Path((id_turma, matricula)): Path<(i64, i64)>,
) -> AppResult<impl IntoResponse> {
    turma_service::desmatricular(&state.db_pool, id_turma, matricula).await?;
    Ok(StatusCode::NO_CONTENT)
}
