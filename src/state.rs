// src/state.rs
use sqlx::SqlitePool;

// Estado partilhado da aplicação: por agora apenas o pool da base de dados.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
}

// Permite extrair o pool da DB diretamente nos handlers
impl axum::extract::FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> SqlitePool {
        state.db_pool.clone()
    }
}
