// src/models/bioimpedancia.rs
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Medição de bioimpedância de um aluno (no máximo uma por matrícula).
/// Serve de payload de criação e de resposta: os campos coincidem.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Bioimpedancia {
    pub matricula: i64,
    pub peso: f64,
    pub altura: f64,
    pub tmb: i64,
    pub percentual_gordura: f64,
    pub quantidade_agua: f64,
}

/// Atualização parcial de medição.
#[derive(Debug, Default, Deserialize)]
pub struct BioimpedanciaUpdate {
    pub peso: Option<f64>,
    pub altura: Option<f64>,
    pub tmb: Option<i64>,
    pub percentual_gordura: Option<f64>,
    pub quantidade_agua: Option<f64>,
}
