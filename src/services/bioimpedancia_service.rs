// src/services/bioimpedancia_service.rs
use crate::{
    error::{AppError, AppResult},
    models::bioimpedancia::{Bioimpedancia, BioimpedanciaUpdate},
};
use sqlx::SqlitePool;

/// Registra uma medição. A matrícula é PK: uma segunda medição para o
/// mesmo aluno falha com violação de restrição (o cliente deve usar PUT).
pub async fn criar_bioimpedancia(
    db_pool: &SqlitePool,
    dados: &Bioimpedancia,
) -> AppResult<Bioimpedancia> {
    tracing::debug!("Registrando bioimpedância do aluno {}", dados.matricula);
    sqlx::query(
        r#"
        INSERT INTO bioimpedancia
            (matricula, peso, altura, tmb, percentual_gordura, quantidade_agua)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(dados.matricula)
    .bind(dados.peso)
    .bind(dados.altura)
    .bind(dados.tmb)
    .bind(dados.percentual_gordura)
    .bind(dados.quantidade_agua)
    .execute(db_pool)
    .await
    .map_err(AppError::de_sqlx)?;

    Ok(dados.clone())
}

pub async fn listar_bioimpedancias(db_pool: &SqlitePool) -> AppResult<Vec<Bioimpedancia>> {
    let medicoes = sqlx::query_as::<_, Bioimpedancia>(
        r#"
        SELECT matricula, peso, altura, tmb, percentual_gordura, quantidade_agua
        FROM bioimpedancia
        ORDER BY matricula
        "#,
    )
    .fetch_all(db_pool)
    .await?;
    Ok(medicoes)
}

pub async fn buscar_bioimpedancia(
    db_pool: &SqlitePool,
    matricula: i64,
) -> AppResult<Bioimpedancia> {
    sqlx::query_as::<_, Bioimpedancia>(
        r#"
        SELECT matricula, peso, altura, tmb, percentual_gordura, quantidade_agua
        FROM bioimpedancia
        WHERE matricula = ?
        "#,
    )
    .bind(matricula)
    .fetch_optional(db_pool)
    .await?
    .ok_or(AppError::NaoEncontrado("Medição de bioimpedância"))
}

pub async fn atualizar_bioimpedancia(
    db_pool: &SqlitePool,
    matricula: i64,
    dados: &BioimpedanciaUpdate,
) -> AppResult<Bioimpedancia> {
    let res = sqlx::query(
        r#"
        UPDATE bioimpedancia
        SET peso               = COALESCE(?, peso),
            altura             = COALESCE(?, altura),
            tmb                = COALESCE(?, tmb),
            percentual_gordura = COALESCE(?, percentual_gordura),
            quantidade_agua    = COALESCE(?, quantidade_agua)
        WHERE matricula = ?
        "#,
    )
    .bind(dados.peso)
    .bind(dados.altura)
    .bind(dados.tmb)
    .bind(dados.percentual_gordura)
    .bind(dados.quantidade_agua)
    .bind(matricula)
    .execute(db_pool)
    .await
    .map_err(AppError::de_sqlx)?;

    if res.rows_affected() == 0 {
        return Err(AppError::NaoEncontrado("Medição de bioimpedância"));
    }
    buscar_bioimpedancia(db_pool, matricula).await
}

pub async fn apagar_bioimpedancia(db_pool: &SqlitePool, matricula: i64) -> AppResult<()> {
    let res = sqlx::query("DELETE FROM bioimpedancia WHERE matricula = ?")
        .bind(matricula)
        .execute(db_pool)
        .await?;
    if res.rows_affected() == 0 {
        return Err(AppError::NaoEncontrado("Medição de bioimpedância"));
    }
    Ok(())
}
