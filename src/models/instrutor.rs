// src/models/instrutor.rs
use crate::models::contato::{Contato, ContatoUpdate};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Turno de trabalho (instrutor) ou de funcionamento (turma).
/// Guardado como TEXT com as grafias originais.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum Turno {
    #[serde(rename = "Manhã")]
    #[sqlx(rename = "Manhã")]
    Manha,
    Tarde,
    Noite,
}

/// Linha do LEFT JOIN instrutor x contato_instrutor.
#[derive(Debug, Clone, FromRow)]
pub struct InstrutorComContatoRow {
    pub cref: i64,
    pub cpf: String,
    pub nome: String,
    pub data_nascimento: NaiveDate,
    pub data_admissao: NaiveDate,
    pub turno: Turno,
    pub telefone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InstrutorResponse {
    pub cref: i64,
    pub cpf: String,
    pub nome: String,
    pub data_nascimento: NaiveDate,
    pub data_admissao: NaiveDate,
    pub turno: Turno,
    pub contato: Option<Contato>,
}

impl From<InstrutorComContatoRow> for InstrutorResponse {
    fn from(row: InstrutorComContatoRow) -> Self {
        let contato = row.telefone.map(|telefone| Contato {
            telefone,
            email: row.email,
        });
        InstrutorResponse {
            cref: row.cref,
            cpf: row.cpf,
            nome: row.nome,
            data_nascimento: row.data_nascimento,
            data_admissao: row.data_admissao,
            turno: row.turno,
            contato,
        }
    }
}

/// Criação de instrutor. O CREF é atribuído externamente (licença
/// profissional), por isso vem no payload em vez de ser gerado.
#[derive(Debug, Deserialize)]
pub struct InstrutorCreate {
    pub cref: i64,
    pub cpf: String,
    pub nome: String,
    pub data_nascimento: NaiveDate,
    pub data_admissao: NaiveDate,
    pub turno: Turno,
    pub contato: Contato,
}

#[derive(Debug, Default, Deserialize)]
pub struct InstrutorUpdate {
    pub cpf: Option<String>,
    pub nome: Option<String>,
    pub data_nascimento: Option<NaiveDate>,
    pub data_admissao: Option<NaiveDate>,
    pub turno: Option<Turno>,
    pub contato: Option<ContatoUpdate>,
}
