// src/web/relatorio_handlers.rs
use crate::{error::AppResult, services::relatorio_service, state::AppState, web::Paginacao};
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};

/// GET /relatorios/alunos — projeção aluno x plano com idade derivada.
pub async fn handle_relatorio_alunos(
    State(state): State<AppState>,
    Query(paginacao): Query<Paginacao>,
) -> AppResult<impl IntoResponse> {
    let relatorio = relatorio_service::relatorio_alunos(&state.db_pool).await?;
    Ok(Json(paginacao.aplicar(relatorio)))
}
