// src/web/aluno_handlers.rs
use crate::{
    error::AppResult,
    models::aluno::{AlunoCreate, AlunoUpdate},
    services::aluno_service,
    state::AppState,
    web::Paginacao,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

pub async fn handle_criar_aluno(
    State(state): State<AppState>,
    Json(payload): Json<AlunoCreate>,
) -> AppResult<impl IntoResponse> {
    let aluno = aluno_service::criar_aluno(&state.db_pool, &payload).await?;
    Ok((StatusCode::CREATED, Json(aluno)))
}

pub async fn handle_listar_alunos(
    State(state): State<AppState>,
    Query(paginacao): Query<Paginacao>,
) -> AppResult<impl IntoResponse> {
    let alunos = aluno_service::listar_alunos(&state.db_pool).await?;
    Ok(Json(paginacao.aplicar(alunos)))
}

pub async fn handle_buscar_aluno(
    State(state): State<AppState>,
    Path(matricula): Path<i64>,
) -> AppResult<impl IntoResponse> {
    let aluno = aluno_service::buscar_aluno(&state.db_pool, matricula).await?;
    Ok(Json(aluno))
}

pub async fn handle_atualizar_aluno(
    State(state): State<AppState>,
    Path(matricula): Path<i64>,
    Json(payload): Json<AlunoUpdate>,
) -> AppResult<impl IntoResponse> {
    let aluno = aluno_service::atualizar_aluno(&state.db_pool, matricula, &payload).await?;
    Ok(Json(aluno))
}

pub async fn handle_apagar_aluno(
    State(state): State<AppState>,
    Path(matricula): Path<i64>,
) -> AppResult<impl IntoResponse> {
    aluno_service::apagar_aluno(&state.db_pool, matricula).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /alunos/{matricula}/plano/{codigo_plano} — upgrade de plano.
pub async fn handle_trocar_plano(
    State(state): State<AppState>,
    Path((matricula, codigo_plano)): Path<(i64, i64)>,
) -> AppResult<impl IntoResponse> {
    let aluno = aluno_service::trocar_plano(&state.db_pool, matricula, codigo_plano).await?;
    Ok(Json(aluno))
}
