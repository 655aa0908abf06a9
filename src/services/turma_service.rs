// src/services/turma_service.rs
use crate::{
    error::{AppError, AppResult},
    models::turma::{TurmaComInstrutorRow, TurmaCreate, TurmaResponse, TurmaUpdate},
};
use sqlx::SqlitePool;
use std::collections::HashMap;

const SELECT_TURMA: &str = r#"
    SELECT t.id_turma, t.nome_atividade, t.quantidade_vagas, t.turno, t.cref,
           i.cpf             AS cpf_instrutor,
           i.nome            AS nome_instrutor,
           i.data_nascimento AS nascimento_instrutor,
           i.data_admissao   AS admissao_instrutor,
           i.turno           AS turno_instrutor,
           ci.telefone       AS telefone_instrutor,
           ci.email          AS email_instrutor
    FROM turma t
    JOIN instrutor i ON t.cref = i.cref
    LEFT JOIN contato_instrutor ci ON i.cref = ci.cref
"#;

pub async fn criar_turma(db_pool: &SqlitePool, dados: &TurmaCreate) -> AppResult<TurmaResponse> {
    tracing::debug!("Criando turma '{}'", dados.nome_atividade);

    // O instrutor precisa existir antes da turma (404 em vez de erro de FK)
    let existe: Option<i64> = sqlx::query_scalar("SELECT cref FROM instrutor WHERE cref = ?")
        .bind(dados.cref)
        .fetch_optional(db_pool)
        .await?;
    if existe.is_none() {
        return Err(AppError::NaoEncontrado("Instrutor"));
    }

    let id_turma: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO turma (nome_atividade, quantidade_vagas, turno, cref)
        VALUES (?, ?, ?, ?)
        RETURNING id_turma
        "#,
    )
    .bind(&dados.nome_atividade)
    .bind(dados.quantidade_vagas)
    .bind(dados.turno)
    .bind(dados.cref)
    .fetch_one(db_pool)
    .await
    .map_err(AppError::de_sqlx)?;

    tracing::info!("Turma {} criada: '{}'", id_turma, dados.nome_atividade);
    buscar_turma(db_pool, id_turma).await
}

/// Lista todas as turmas (com instrutor e lista de matrículas),
/// ordenadas pelo nome da atividade.
pub async fn listar_turmas(db_pool: &SqlitePool) -> AppResult<Vec<TurmaResponse>> {
    let linhas = sqlx::query_as::<_, TurmaComInstrutorRow>(
        &format!("{SELECT_TURMA} ORDER BY t.nome_atividade"),
    )
    .fetch_all(db_pool)
    .await?;

    // Uma única consulta para os alunos de todas as turmas
    let pares: Vec<(i64, i64)> = sqlx::query_as(
        "SELECT id_turma, matricula FROM turma_instrutor_aluno ORDER BY id_turma, matricula",
    )
    .fetch_all(db_pool)
    .await?;

    let mut por_turma: HashMap<i64, Vec<i64>> = HashMap::new();
    for (id_turma, matricula) in pares {
        por_turma.entry(id_turma).or_default().push(matricula);
    }

    Ok(linhas
        .into_iter()
        .map(|row| {
            let alunos = por_turma.remove(&row.id_turma).unwrap_or_default();
            TurmaResponse::montar(row, alunos)
        })
        .collect())
}

pub async fn buscar_turma(db_pool: &SqlitePool, id_turma: i64) -> AppResult<TurmaResponse> {
    let row = sqlx::query_as::<_, TurmaComInstrutorRow>(
        &format!("{SELECT_TURMA} WHERE t.id_turma = ?"),
    )
    .bind(id_turma)
    .fetch_optional(db_pool)
    .await?
    .ok_or(AppError::NaoEncontrado("Turma"))?;

    let alunos: Vec<i64> = sqlx::query_scalar(
        "SELECT matricula FROM turma_instrutor_aluno WHERE id_turma = ? ORDER BY matricula",
    )
    .bind(id_turma)
    .fetch_all(db_pool)
    .await?;

    Ok(TurmaResponse::montar(row, alunos))
}

pub async fn atualizar_turma(
    db_pool: &SqlitePool,
    id_turma: i64,
    dados: &TurmaUpdate,
) -> AppResult<TurmaResponse> {
    let res = sqlx::query(
        r#"
        UPDATE turma
        SET nome_atividade   = COALESCE(?, nome_atividade),
            quantidade_vagas = COALESCE(?, quantidade_vagas),
            turno            = COALESCE(?, turno),
            cref             = COALESCE(?, cref)
        WHERE id_turma = ?
        "#,
    )
    .bind(&dados.nome_atividade)
    .bind(dados.quantidade_vagas)
    .bind(dados.turno)
    .bind(dados.cref)
    .bind(id_turma)
    .execute(db_pool)
    .await
    .map_err(AppError::de_sqlx)?;

    if res.rows_affected() == 0 {
        return Err(AppError::NaoEncontrado("Turma"));
    }
    buscar_turma(db_pool, id_turma).await
}

pub async fn apagar_turma(db_pool: &SqlitePool, id_turma: i64) -> AppResult<()> {
    let res = sqlx::query("DELETE FROM turma WHERE id_turma = ?")
        .bind(id_turma)
        .execute(db_pool)
        .await?;
    if res.rows_affected() == 0 {
        return Err(AppError::NaoEncontrado("Turma"));
    }
    Ok(())
}

/// Matricula um aluno numa turma respeitando o limite de vagas.
///
/// O coração da operação é um único INSERT condicional: a contagem de
/// matrículas e a comparação com quantidade_vagas acontecem dentro do
/// próprio comando, sob o lock de escrita do SQLite. Duas matrículas
/// concorrentes na última vaga nunca passam ambas — a segunda reavalia
/// a contagem já com a primeira gravada e não insere nada.
pub async fn matricular(db_pool: &SqlitePool, id_turma: i64, matricula: i64) -> AppResult<()> {
    // Preconições com erro claro (404) antes do insert
    let aluno: Option<i64> = sqlx::query_scalar("SELECT matricula FROM aluno WHERE matricula = ?")
        .bind(matricula)
        .fetch_optional(db_pool)
        .await?;
    if aluno.is_none() {
        return Err(AppError::NaoEncontrado("Aluno"));
    }

    let res = sqlx::query(
        r#"
        INSERT INTO turma_instrutor_aluno (id_turma, matricula)
        SELECT ?1, ?2
        WHERE (SELECT COUNT(*) FROM turma_instrutor_aluno WHERE id_turma = ?1)
            < (SELECT quantidade_vagas FROM turma WHERE id_turma = ?1)
        "#,
    )
    .bind(id_turma)
    .bind(matricula)
    .execute(db_pool)
    .await
    .map_err(AppError::de_sqlx)?;

    if res.rows_affected() == 0 {
        // Nada inserido: ou a turma não existe (subconsulta NULL),
        // ou está cheia. Distinguir para o cliente.
        let turma: Option<i64> = sqlx::query_scalar("SELECT id_turma FROM turma WHERE id_turma = ?")
            .bind(id_turma)
            .fetch_optional(db_pool)
            .await?;
        return match turma {
            None => Err(AppError::NaoEncontrado("Turma")),
            Some(_) => Err(AppError::SemVagas),
        };
    }

    tracing::info!("Aluno {} matriculado na turma {}", matricula, id_turma);
    Ok(())
}

/// Remove o aluno da turma. Não há invariante a proteger na saída.
pub async fn desmatricular(db_pool: &SqlitePool, id_turma: i64, matricula: i64) -> AppResult<()> {
    let res = sqlx::query(
        "DELETE FROM turma_instrutor_aluno WHERE id_turma = ? AND matricula = ?",
    )
    .bind(id_turma)
    .bind(matricula)
    .execute(db_pool)
    .await?;
    if res.rows_affected() == 0 {
        return Err(AppError::NaoEncontrado("Matrícula na turma"));
    }
    tracing::info!("Aluno {} removido da turma {}", matricula, id_turma);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::teste::pool_de_teste;
    use crate::models::aluno::{AlunoCreate, Sexo};
    use crate::models::contato::Contato;
    use crate::models::instrutor::{InstrutorCreate, Turno};
    use crate::models::plano::PlanoCreate;
    use crate::services::{aluno_service, instrutor_service, plano_service};
    use chrono::NaiveDate;

    async fn instrutor_de_teste(pool: &SqlitePool) -> i64 {
        instrutor_service::criar_instrutor(
            pool,
            &InstrutorCreate {
                cref: 123456,
                cpf: "99988877766".into(),
                nome: "José Santos".into(),
                data_nascimento: NaiveDate::from_ymd_opt(1985, 1, 1).unwrap(),
                data_admissao: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                turno: Turno::Manha,
                contato: Contato {
                    telefone: "(11)98888-0001".into(),
                    email: None,
                },
            },
        )
        .await
        .unwrap()
        .cref
    }

    async fn aluno_de_teste(pool: &SqlitePool, n: u32) -> i64 {
        let codigo_plano: Option<i64> =
            sqlx::query_scalar("SELECT codigo_plano FROM plano LIMIT 1")
                .fetch_optional(pool)
                .await
                .unwrap();
        let codigo_plano = match codigo_plano {
            Some(c) => c,
            None => {
                plano_service::criar_plano(
                    pool,
                    &PlanoCreate {
                        nome_plano: "Básico".into(),
                        preco: 50.0,
                        descricao: None,
                    },
                )
                .await
                .unwrap()
                .codigo_plano
            }
        };
        aluno_service::criar_aluno(
            pool,
            &AlunoCreate {
                cpf: format!("000000000{:02}", n),
                nome: format!("Aluno {}", n),
                sexo: Sexo::F,
                data_nascimento: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
                data_matricula: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                codigo_plano,
                contato: Contato {
                    telefone: format!("(11)90000-00{:02}", n),
                    email: None,
                },
            },
        )
        .await
        .unwrap()
        .matricula
    }

    async fn turma_de_teste(pool: &SqlitePool, vagas: i64, cref: i64) -> i64 {
        criar_turma(
            pool,
            &TurmaCreate {
                nome_atividade: "Musculação".into(),
                quantidade_vagas: vagas,
                turno: Turno::Tarde,
                cref,
            },
        )
        .await
        .unwrap()
        .id_turma
    }

    #[tokio::test]
    async fn turma_exige_instrutor_existente() {
        let (pool, _dir) = pool_de_teste().await;
        let err = criar_turma(
            &pool,
            &TurmaCreate {
                nome_atividade: "Musculação".into(),
                quantidade_vagas: 20,
                turno: Turno::Tarde,
                cref: 999,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::NaoEncontrado("Instrutor")));
    }

    #[tokio::test]
    async fn busca_traz_instrutor_e_alunos() {
        let (pool, _dir) = pool_de_teste().await;
        let cref = instrutor_de_teste(&pool).await;
        let id_turma = turma_de_teste(&pool, 10, cref).await;
        let a1 = aluno_de_teste(&pool, 1).await;
        let a2 = aluno_de_teste(&pool, 2).await;

        matricular(&pool, id_turma, a1).await.unwrap();
        matricular(&pool, id_turma, a2).await.unwrap();

        let turma = buscar_turma(&pool, id_turma).await.unwrap();
        assert_eq!(turma.instrutor.cref, cref);
        assert_eq!(turma.alunos, vec![a1, a2]);
    }

    #[tokio::test]
    async fn cenario_de_capacidade_um() {
        let (pool, _dir) = pool_de_teste().await;
        let cref = instrutor_de_teste(&pool).await;
        let id_turma = turma_de_teste(&pool, 1, cref).await;
        let a = aluno_de_teste(&pool, 1).await;
        let b = aluno_de_teste(&pool, 2).await;

        // A entra, B é barrado, A sai, B entra
        matricular(&pool, id_turma, a).await.unwrap();
        let err = matricular(&pool, id_turma, b).await.unwrap_err();
        assert!(matches!(err, AppError::SemVagas));

        desmatricular(&pool, id_turma, a).await.unwrap();
        matricular(&pool, id_turma, b).await.unwrap();
    }

    #[tokio::test]
    async fn matricula_dupla_viola_restricao() {
        let (pool, _dir) = pool_de_teste().await;
        let cref = instrutor_de_teste(&pool).await;
        let id_turma = turma_de_teste(&pool, 5, cref).await;
        let a = aluno_de_teste(&pool, 1).await;

        matricular(&pool, id_turma, a).await.unwrap();
        let err = matricular(&pool, id_turma, a).await.unwrap_err();
        // Chave composta (id_turma, matricula): é conflito, não falta de vaga
        assert!(matches!(err, AppError::Restricao(_)));
    }

    #[tokio::test]
    async fn matricula_em_turma_inexistente() {
        let (pool, _dir) = pool_de_teste().await;
        instrutor_de_teste(&pool).await;
        let a = aluno_de_teste(&pool, 1).await;
        let err = matricular(&pool, 999, a).await.unwrap_err();
        assert!(matches!(err, AppError::NaoEncontrado("Turma")));
    }

    #[tokio::test]
    async fn desmatricular_quem_nao_esta_matriculado() {
        let (pool, _dir) = pool_de_teste().await;
        let cref = instrutor_de_teste(&pool).await;
        let id_turma = turma_de_teste(&pool, 5, cref).await;
        let a = aluno_de_teste(&pool, 1).await;
        let err = desmatricular(&pool, id_turma, a).await.unwrap_err();
        assert!(matches!(err, AppError::NaoEncontrado(_)));
    }

    /// Propriedade de concorrência: N tentativas simultâneas contra k
    /// vagas livres produzem exatamente k sucessos e N-k SemVagas,
    /// qualquer que seja o entrelaçamento.
    #[tokio::test]
    async fn matriculas_concorrentes_nao_estouram_vagas() {
        let (pool, _dir) = pool_de_teste().await;
        let cref = instrutor_de_teste(&pool).await;
        const VAGAS: i64 = 3;
        const TENTATIVAS: u32 = 10;
        let id_turma = turma_de_teste(&pool, VAGAS, cref).await;

        let mut matriculas = Vec::new();
        for n in 1..=TENTATIVAS {
            matriculas.push(aluno_de_teste(&pool, n).await);
        }

        let mut tarefas = Vec::new();
        for matricula in matriculas {
            let pool = pool.clone();
            tarefas.push(tokio::spawn(async move {
                matricular(&pool, id_turma, matricula).await
            }));
        }

        let mut sucessos: i64 = 0;
        let mut sem_vagas: i64 = 0;
        for tarefa in tarefas {
            match tarefa.await.unwrap() {
                Ok(()) => sucessos += 1,
                Err(AppError::SemVagas) => sem_vagas += 1,
                Err(outro) => panic!("erro inesperado: {outro:?}"),
            }
        }

        assert_eq!(sucessos, VAGAS);
        assert_eq!(sem_vagas, i64::from(TENTATIVAS) - VAGAS);

        let ocupadas: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM turma_instrutor_aluno WHERE id_turma = ?")
                .bind(id_turma)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(ocupadas, VAGAS);
    }

    #[tokio::test]
    async fn apagar_instrutor_cascateia_turma_e_matriculas() {
        let (pool, _dir) = pool_de_teste().await;
        let cref = instrutor_de_teste(&pool).await;
        let id_turma = turma_de_teste(&pool, 5, cref).await;
        let a = aluno_de_teste(&pool, 1).await;
        matricular(&pool, id_turma, a).await.unwrap();

        instrutor_service::apagar_instrutor(&pool, cref).await.unwrap();

        let err = buscar_turma(&pool, id_turma).await.unwrap_err();
        assert!(matches!(err, AppError::NaoEncontrado("Turma")));

        let restantes: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM turma_instrutor_aluno")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(restantes, 0, "matrícula órfã após a cascata");
    }
}
