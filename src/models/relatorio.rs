// src/models/relatorio.rs
use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// Linha do JOIN aluno x plano usada pelo relatório. A idade é derivada
/// em Rust a partir de data_nascimento na hora da consulta.
#[derive(Debug, Clone, FromRow)]
pub struct RelatorioAlunoRow {
    pub matricula: i64,
    pub nome_aluno: String,
    pub cpf: String,
    pub data_nascimento: NaiveDate,
    pub data_matricula: NaiveDate,
    pub nome_plano: String,
    pub valor_plano: f64,
}

/// Entrada do relatório de alunos (projeção somente leitura).
#[derive(Debug, Clone, Serialize)]
pub struct RelatorioAlunoResponse {
    pub matricula: i64,
    pub nome_aluno: String,
    pub cpf: String,
    pub idade: i64,
    pub data_matricula: NaiveDate,
    pub nome_plano: String,
    pub valor_plano: f64,
}

impl RelatorioAlunoResponse {
    pub fn derivar(row: RelatorioAlunoRow, hoje: NaiveDate) -> Self {
        RelatorioAlunoResponse {
            matricula: row.matricula,
            nome_aluno: row.nome_aluno,
            cpf: row.cpf,
            idade: crate::models::idade_em_anos(row.data_nascimento, hoje),
            data_matricula: row.data_matricula,
            nome_plano: row.nome_plano,
            valor_plano: row.valor_plano,
        }
    }
}
