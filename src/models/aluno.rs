// src/models/aluno.rs
use crate::models::contato::{Contato, ContatoUpdate};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum Sexo {
    M,
    F,
}

/// Linha do LEFT JOIN aluno x contato_aluno, lida por nome de coluna.
#[derive(Debug, Clone, FromRow)]
pub struct AlunoComContatoRow {
    pub matricula: i64,
    pub cpf: String,
    pub nome: String,
    pub sexo: Sexo,
    pub data_nascimento: NaiveDate,
    pub data_matricula: NaiveDate,
    pub codigo_plano: i64,
    pub telefone: Option<String>,
    pub email: Option<String>,
}

/// Aluno como exposto pela API, com o contato aninhado.
#[derive(Debug, Clone, Serialize)]
pub struct AlunoResponse {
    pub matricula: i64,
    pub cpf: String,
    pub nome: String,
    pub sexo: Sexo,
    pub data_nascimento: NaiveDate,
    pub data_matricula: NaiveDate,
    pub codigo_plano: i64,
    pub contato: Option<Contato>,
}

impl From<AlunoComContatoRow> for AlunoResponse {
    fn from(row: AlunoComContatoRow) -> Self {
        // telefone é PK do contato: se existe linha de contato, existe telefone
        let contato = row.telefone.map(|telefone| Contato {
            telefone,
            email: row.email,
        });
        AlunoResponse {
            matricula: row.matricula,
            cpf: row.cpf,
            nome: row.nome,
            sexo: row.sexo,
            data_nascimento: row.data_nascimento,
            data_matricula: row.data_matricula,
            codigo_plano: row.codigo_plano,
            contato,
        }
    }
}

/// Criação de aluno: o contato é obrigatório e gravado na mesma transação.
#[derive(Debug, Deserialize)]
pub struct AlunoCreate {
    pub cpf: String,
    pub nome: String,
    pub sexo: Sexo,
    pub data_nascimento: NaiveDate,
    pub data_matricula: NaiveDate,
    pub codigo_plano: i64,
    pub contato: Contato,
}

/// Atualização parcial: campos ausentes ficam intocados.
#[derive(Debug, Default, Deserialize)]
pub struct AlunoUpdate {
    pub cpf: Option<String>,
    pub nome: Option<String>,
    pub sexo: Option<Sexo>,
    pub data_nascimento: Option<NaiveDate>,
    pub data_matricula: Option<NaiveDate>,
    pub codigo_plano: Option<i64>,
    pub contato: Option<ContatoUpdate>,
}
