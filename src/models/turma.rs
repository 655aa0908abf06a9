// src/models/turma.rs
use crate::models::contato::Contato;
use crate::models::instrutor::{InstrutorResponse, Turno};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Projeção tipada do JOIN turma x instrutor x contato_instrutor.
/// As colunas do instrutor levam sufixo no SELECT para não colidir
/// com as da turma (em vez de decodificar por posição).
#[derive(Debug, Clone, FromRow)]
pub struct TurmaComInstrutorRow {
    pub id_turma: i64,
    pub nome_atividade: String,
    pub quantidade_vagas: i64,
    pub turno: Turno,
    pub cref: i64,
    pub cpf_instrutor: String,
    pub nome_instrutor: String,
    pub nascimento_instrutor: NaiveDate,
    pub admissao_instrutor: NaiveDate,
    pub turno_instrutor: Turno,
    pub telefone_instrutor: Option<String>,
    pub email_instrutor: Option<String>,
}

/// Turma como exposta pela API: dados próprios, instrutor completo e a
/// lista de matrículas dos alunos inscritos.
#[derive(Debug, Clone, Serialize)]
pub struct TurmaResponse {
    pub id_turma: i64,
    pub nome_atividade: String,
    pub quantidade_vagas: i64,
    pub turno: Turno,
    pub cref: i64,
    pub instrutor: InstrutorResponse,
    pub alunos: Vec<i64>,
}

impl TurmaResponse {
    pub fn montar(row: TurmaComInstrutorRow, alunos: Vec<i64>) -> Self {
        let contato = row.telefone_instrutor.map(|telefone| Contato {
            telefone,
            email: row.email_instrutor,
        });
        TurmaResponse {
            id_turma: row.id_turma,
            nome_atividade: row.nome_atividade,
            quantidade_vagas: row.quantidade_vagas,
            turno: row.turno,
            cref: row.cref,
            instrutor: InstrutorResponse {
                cref: row.cref,
                cpf: row.cpf_instrutor,
                nome: row.nome_instrutor,
                data_nascimento: row.nascimento_instrutor,
                data_admissao: row.admissao_instrutor,
                turno: row.turno_instrutor,
                contato,
            },
            alunos,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TurmaCreate {
    pub nome_atividade: String,
    pub quantidade_vagas: i64,
    pub turno: Turno,
    pub cref: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct TurmaUpdate {
    pub nome_atividade: Option<String>,
    pub quantidade_vagas: Option<i64>,
    pub turno: Option<Turno>,
    pub cref: Option<i64>,
}
