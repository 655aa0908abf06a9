// src/services/relatorio_service.rs
use crate::{
    error::AppResult,
    models::relatorio::{RelatorioAlunoRow, RelatorioAlunoResponse},
};
use sqlx::SqlitePool;

/// Relatório de alunos: projeção somente leitura do JOIN aluno x plano,
/// calculada sobre o estado atual das tabelas (nada é materializado).
/// A idade em anos completos é derivada na hora da consulta.
pub async fn relatorio_alunos(db_pool: &SqlitePool) -> AppResult<Vec<RelatorioAlunoResponse>> {
    let linhas = sqlx::query_as::<_, RelatorioAlunoRow>(
        r#"
        SELECT a.matricula,
               a.nome  AS nome_aluno,
               a.cpf,
               a.data_nascimento,
               a.data_matricula,
               p.nome_plano,
               p.preco AS valor_plano
        FROM aluno a
        JOIN plano p ON a.codigo_plano = p.codigo_plano
        ORDER BY a.nome
        "#,
    )
    .fetch_all(db_pool)
    .await?;

    let hoje = chrono::Local::now().date_naive();
    Ok(linhas
        .into_iter()
        .map(|row| RelatorioAlunoResponse::derivar(row, hoje))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::teste::pool_de_teste;
    use crate::models::aluno::{AlunoCreate, Sexo};
    use crate::models::contato::Contato;
    use crate::models::plano::PlanoCreate;
    use crate::services::{aluno_service, plano_service};
    use chrono::{Datelike, NaiveDate};

    #[tokio::test]
    async fn relatorio_reflete_estado_atual_e_ordena_por_nome() {
        let (pool, _dir) = pool_de_teste().await;
        let basico = plano_service::criar_plano(
            &pool,
            &PlanoCreate {
                nome_plano: "Básico".into(),
                preco: 50.0,
                descricao: None,
            },
        )
        .await
        .unwrap();
        let premium = plano_service::criar_plano(
            &pool,
            &PlanoCreate {
                nome_plano: "Premium".into(),
                preco: 100.0,
                descricao: None,
            },
        )
        .await
        .unwrap();

        let hoje = chrono::Local::now().date_naive();
        // Nasceu há exatamente 30 anos (aniversário hoje)
        let nascimento = NaiveDate::from_ymd_opt(hoje.year() - 30, hoje.month(), hoje.day())
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(hoje.year() - 30, hoje.month(), 28).unwrap());

        for (nome, cpf, tel) in [
            ("Zeca", "11111111111", "(11)99999-0001"),
            ("Ana", "22222222222", "(11)99999-0002"),
        ] {
            aluno_service::criar_aluno(
                &pool,
                &AlunoCreate {
                    cpf: cpf.into(),
                    nome: nome.into(),
                    sexo: Sexo::M,
                    data_nascimento: nascimento,
                    data_matricula: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                    codigo_plano: basico.codigo_plano,
                    contato: Contato {
                        telefone: tel.into(),
                        email: None,
                    },
                },
            )
            .await
            .unwrap();
        }

        let relatorio = relatorio_alunos(&pool).await.unwrap();
        assert_eq!(relatorio.len(), 2);
        assert_eq!(relatorio[0].nome_aluno, "Ana");
        assert_eq!(relatorio[1].nome_aluno, "Zeca");
        assert_eq!(relatorio[0].idade, 30);
        assert_eq!(relatorio[0].nome_plano, "Básico");
        assert_eq!(relatorio[0].valor_plano, 50.0);

        // Troca de plano: o relatório deve refletir na hora
        let matricula = relatorio[0].matricula;
        aluno_service::trocar_plano(&pool, matricula, premium.codigo_plano)
            .await
            .unwrap();
        let relatorio = relatorio_alunos(&pool).await.unwrap();
        assert_eq!(relatorio[0].nome_plano, "Premium");
        assert_eq!(relatorio[0].valor_plano, 100.0);
    }
}
