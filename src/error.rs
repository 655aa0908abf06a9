// src/error.rs
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Erro na base de dados: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Erro de migração da base de dados: {0}")]
    SqlxMigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Erro de variável de ambiente: {0}")]
    EnvVarError(#[from] std::env::VarError),

    // Entidade (plano, aluno, instrutor, turma, contato, medição) não existe
    #[error("{0} não encontrado")]
    NaoEncontrado(&'static str),

    // Turma cheia: a matrícula é rejeitada sem alterar nada
    #[error("Não há mais vagas disponíveis para esta turma")]
    SemVagas,

    // Violação de UNIQUE (cpf, telefone), FK ou CHECK vinda da base de dados
    #[error("Restrição violada: {0}")]
    Restricao(String),

    // Troca de plano para um plano igual ou mais barato
    #[error("{0}")]
    PoliticaPlano(String),

    // Instrutor com menos de 18 anos na data do cadastro
    #[error("O instrutor deve ter pelo menos 18 anos")]
    MenorDeIdade,
}

impl AppError {
    /// Reclassifica erros do SQLx: violações de restrição viram erro de
    /// cliente (409) em vez de erro interno.
    pub fn de_sqlx(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_err) = err {
            if db_err.is_unique_violation()
                || db_err.is_foreign_key_violation()
                || db_err.is_check_violation()
            {
                return AppError::Restricao(db_err.message().to_string());
            }
        }
        AppError::SqlxError(err)
    }
}

// Como converter AppError numa resposta HTTP (JSON, como o resto da API)
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // Loga o erro detalhado no servidor
        tracing::error!("Erro processado: {:?}", self);

        let status = match self {
            AppError::NaoEncontrado(_) => StatusCode::NOT_FOUND,
            AppError::SemVagas | AppError::Restricao(_) => StatusCode::CONFLICT,
            AppError::PoliticaPlano(_) | AppError::MenorDeIdade => StatusCode::BAD_REQUEST,
            AppError::SqlxError(_)
            | AppError::SqlxMigrateError(_)
            | AppError::EnvVarError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let detail = if status == StatusCode::INTERNAL_SERVER_ERROR {
            // Não expor detalhes internos ao cliente
            "Erro interno ao processar a requisição".to_string()
        } else {
            self.to_string()
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

// Tipo Result padrão para a aplicação
pub type AppResult<T = ()> = Result<T, AppError>;
