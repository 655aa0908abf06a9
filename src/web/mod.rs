// src/web/mod.rs
pub mod aluno_handlers;
pub mod bioimpedancia_handlers;
pub mod instrutor_handlers;
pub mod plano_handlers;
pub mod relatorio_handlers;
pub mod routes;
pub mod turma_handlers;

use serde::Deserialize;

/// Paginação trivial por fatiamento (skip/limit), como no resto da API.
#[derive(Debug, Deserialize)]
pub struct Paginacao {
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "limite_padrao")]
    pub limit: usize,
}

fn limite_padrao() -> usize {
    100
}

impl Paginacao {
    pub fn aplicar<T>(&self, itens: Vec<T>) -> Vec<T> {
        itens.into_iter().skip(self.skip).take(self.limit).collect()
    }
}
