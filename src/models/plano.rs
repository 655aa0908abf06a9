// src/models/plano.rs
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Espelha a tabela 'plano'
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Plano {
    pub codigo_plano: i64,
    pub nome_plano: String,
    pub preco: f64,
    pub descricao: Option<String>,
}

/// Dados para criar um plano (o código é atribuído pela base de dados).
#[derive(Debug, Deserialize)]
pub struct PlanoCreate {
    pub nome_plano: String,
    pub preco: f64,
    pub descricao: Option<String>,
}

/// Atualização parcial: apenas os campos presentes são gravados.
#[derive(Debug, Default, Deserialize)]
pub struct PlanoUpdate {
    pub nome_plano: Option<String>,
    pub preco: Option<f64>,
    pub descricao: Option<String>,
}
