// src/models/mod.rs
pub mod aluno;
pub mod bioimpedancia;
pub mod contato;
pub mod instrutor;
pub mod plano;
pub mod relatorio;
pub mod turma;

use chrono::{Datelike, NaiveDate};

/// Idade em anos completos na data `hoje`.
/// Usada no relatório de alunos e na regra de idade mínima do instrutor.
pub fn idade_em_anos(nascimento: NaiveDate, hoje: NaiveDate) -> i64 {
    let mut idade = i64::from(hoje.year()) - i64::from(nascimento.year());
    if (hoje.month(), hoje.day()) < (nascimento.month(), nascimento.day()) {
        idade -= 1;
    }
    idade
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idade_conta_anos_completos() {
        let nascimento = NaiveDate::from_ymd_opt(2000, 6, 15).unwrap();
        // Véspera do aniversário: ainda 24
        let vespera = NaiveDate::from_ymd_opt(2025, 6, 14).unwrap();
        assert_eq!(idade_em_anos(nascimento, vespera), 24);
        // No próprio aniversário: 25
        let aniversario = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        assert_eq!(idade_em_anos(nascimento, aniversario), 25);
    }
}
