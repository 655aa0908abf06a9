// src/web/routes.rs
use crate::{
    state::AppState,
    web::{
        aluno_handlers, bioimpedancia_handlers, instrutor_handlers, plano_handlers,
        relatorio_handlers, turma_handlers,
    },
};
use axum::{
    routing::{get, post, put},
    Router,
};

pub fn create_router(app_state: AppState) -> Router {
    // --- Rotas de Planos ---
    let plano_routes = Router::new()
        .route(
            "/",
            post(plano_handlers::handle_criar_plano).get(plano_handlers::handle_listar_planos),
        )
        .route(
            "/{codigo_plano}",
            get(plano_handlers::handle_buscar_plano)
                .put(plano_handlers::handle_atualizar_plano)
                .delete(plano_handlers::handle_apagar_plano),
        );

    // --- Rotas de Alunos (inclui a troca de plano) ---
    let aluno_routes = Router::new()
        .route(
            "/",
            post(aluno_handlers::handle_criar_aluno).get(aluno_handlers::handle_listar_alunos),
        )
        .route(
            "/{matricula}",
            get(aluno_handlers::handle_buscar_aluno)
                .put(aluno_handlers::handle_atualizar_aluno)
                .delete(aluno_handlers::handle_apagar_aluno),
        )
        .route(
            "/{matricula}/plano/{codigo_plano}",
            put(aluno_handlers::handle_trocar_plano),
        );

    // --- Rotas de Bioimpedância ---
    let bioimpedancia_routes = Router::new()
        .route(
            "/",
            post(bioimpedancia_handlers::handle_criar_bioimpedancia)
                .get(bioimpedancia_handlers::handle_listar_bioimpedancias),
        )
        .route(
            "/{matricula}",
            get(bioimpedancia_handlers::handle_buscar_bioimpedancia)
                .put(bioimpedancia_handlers::handle_atualizar_bioimpedancia)
                .delete(bioimpedancia_handlers::handle_apagar_bioimpedancia),
        );

    // --- Rotas de Instrutores ---
    let instrutor_routes = Router::new()
        .route(
            "/",
            post(instrutor_handlers::handle_criar_instrutor)
                .get(instrutor_handlers::handle_listar_instrutores),
        )
        .route(
            "/{cref}",
            get(instrutor_handlers::handle_buscar_instrutor)
                .put(instrutor_handlers::handle_atualizar_instrutor)
                .delete(instrutor_handlers::handle_apagar_instrutor),
        );

    // --- Rotas de Turmas (inclui matrícula/desmatrícula de alunos) ---
    let turma_routes = Router::new()
        .route(
            "/",
            post(turma_handlers::handle_criar_turma).get(turma_handlers::handle_listar_turmas),
        )
        .route(
            "/{id_turma}",
            get(turma_handlers::handle_buscar_turma)
                .put(turma_handlers::handle_atualizar_turma)
                .delete(turma_handlers::handle_apagar_turma),
        )
        .route(
            "/{id_turma}/alunos/{matricula}",
            post(turma_handlers::handle_matricular).delete(turma_handlers::handle_desmatricular),
        );

    // --- Router Final (tudo sob /api/v1) ---
    let api = Router::new()
        .nest("/planos", plano_routes)
        .nest("/alunos", aluno_routes)
        .nest("/bioimpedancia", bioimpedancia_routes)
        .nest("/instrutores", instrutor_routes)
        .nest("/turmas", turma_routes)
        .route(
            "/relatorios/alunos",
            get(relatorio_handlers::handle_relatorio_alunos),
        );

    Router::new().nest("/api/v1", api).with_state(app_state)
}
