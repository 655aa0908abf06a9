// src/services/instrutor_service.rs
use crate::{
    error::{AppError, AppResult},
    models::idade_em_anos,
    models::instrutor::{
        InstrutorComContatoRow, InstrutorCreate, InstrutorResponse, InstrutorUpdate,
    },
};
use chrono::NaiveDate;
use sqlx::SqlitePool;

const SELECT_INSTRUTOR: &str = r#"
    SELECT i.cref, i.cpf, i.nome, i.data_nascimento, i.data_admissao, i.turno,
           c.telefone, c.email
    FROM instrutor i
    LEFT JOIN contato_instrutor c ON i.cref = c.cref
"#;

const IDADE_MINIMA: i64 = 18;

fn verificar_maioridade(data_nascimento: NaiveDate) -> AppResult<()> {
    let hoje = chrono::Local::now().date_naive();
    if idade_em_anos(data_nascimento, hoje) < IDADE_MINIMA {
        return Err(AppError::MenorDeIdade);
    }
    Ok(())
}

/// Cria o instrutor e o seu contato numa única transação.
/// A regra de idade mínima é verificada aqui, no momento da escrita.
pub async fn criar_instrutor(
    db_pool: &SqlitePool,
    dados: &InstrutorCreate,
) -> AppResult<InstrutorResponse> {
    verificar_maioridade(dados.data_nascimento)?;

    tracing::debug!("Criando instrutor CREF {}", dados.cref);
    let mut tx = db_pool.begin().await?;

    sqlx::query(
        r#"
        INSERT INTO instrutor (cref, cpf, nome, data_nascimento, data_admissao, turno)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(dados.cref)
    .bind(&dados.cpf)
    .bind(&dados.nome)
    .bind(dados.data_nascimento)
    .bind(dados.data_admissao)
    .bind(dados.turno)
    .execute(&mut *tx)
    .await
    .map_err(AppError::de_sqlx)?;

    sqlx::query("INSERT INTO contato_instrutor (telefone, email, cref) VALUES (?, ?, ?)")
        .bind(&dados.contato.telefone)
        .bind(&dados.contato.email)
        .bind(dados.cref)
        .execute(&mut *tx)
        .await
        .map_err(AppError::de_sqlx)?;

    tx.commit().await?;
    tracing::info!("Instrutor {} criado: '{}'", dados.cref, dados.nome);
    buscar_instrutor(db_pool, dados.cref).await
}

/// Lista todos os instrutores (com contato), ordenados pelo nome.
pub async fn listar_instrutores(db_pool: &SqlitePool) -> AppResult<Vec<InstrutorResponse>> {
    let linhas = sqlx::query_as::<_, InstrutorComContatoRow>(
        &format!("{SELECT_INSTRUTOR} ORDER BY i.nome"),
    )
    .fetch_all(db_pool)
    .await?;
    Ok(linhas.into_iter().map(InstrutorResponse::from).collect())
}

pub async fn buscar_instrutor(db_pool: &SqlitePool, cref: i64) -> AppResult<InstrutorResponse> {
    sqlx::query_as::<_, InstrutorComContatoRow>(&format!("{SELECT_INSTRUTOR} WHERE i.cref = ?"))
        .bind(cref)
        .fetch_optional(db_pool)
        .await?
        .map(InstrutorResponse::from)
        .ok_or(AppError::NaoEncontrado("Instrutor"))
}

pub async fn atualizar_instrutor(
    db_pool: &SqlitePool,
    cref: i64,
    dados: &InstrutorUpdate,
) -> AppResult<InstrutorResponse> {
    if let Some(data_nascimento) = dados.data_nascimento {
        verificar_maioridade(data_nascimento)?;
    }

    let mut tx = db_pool.begin().await?;

    let res = sqlx::query(
        r#"
        UPDATE instrutor
        SET cpf             = COALESCE(?, cpf),
            nome            = COALESCE(?, nome),
            data_nascimento = COALESCE(?, data_nascimento),
            data_admissao   = COALESCE(?, data_admissao),
            turno           = COALESCE(?, turno)
        WHERE cref = ?
        "#,
    )
    .bind(&dados.cpf)
    .bind(&dados.nome)
    .bind(dados.data_nascimento)
    .bind(dados.data_admissao)
    .bind(dados.turno)
    .bind(cref)
    .execute(&mut *tx)
    .await
    .map_err(AppError::de_sqlx)?;

    if res.rows_affected() == 0 {
        return Err(AppError::NaoEncontrado("Instrutor"));
    }

    if let Some(contato) = &dados.contato {
        sqlx::query(
            r#"
            UPDATE contato_instrutor
            SET telefone = COALESCE(?, telefone),
                email    = COALESCE(?, email)
            WHERE cref = ?
            "#,
        )
        .bind(&contato.telefone)
        .bind(&contato.email)
        .bind(cref)
        .execute(&mut *tx)
        .await
        .map_err(AppError::de_sqlx)?;
    }

    tx.commit().await?;
    buscar_instrutor(db_pool, cref).await
}

pub async fn apagar_instrutor(db_pool: &SqlitePool, cref: i64) -> AppResult<()> {
    let res = sqlx::query("DELETE FROM instrutor WHERE cref = ?")
        .bind(cref)
        .execute(db_pool)
        .await?;
    if res.rows_affected() == 0 {
        return Err(AppError::NaoEncontrado("Instrutor"));
    }
    tracing::info!("Instrutor {} apagado (cascata sobre turmas dependentes)", cref);
    Ok(())
}
