// src/services/plano_service.rs
use crate::{
    error::{AppError, AppResult},
    models::plano::{Plano, PlanoCreate, PlanoUpdate},
};
use sqlx::SqlitePool;

pub async fn criar_plano(db_pool: &SqlitePool, dados: &PlanoCreate) -> AppResult<Plano> {
    tracing::debug!("Criando plano '{}'", dados.nome_plano);
    let codigo_plano: i64 = sqlx::query_scalar(
        "INSERT INTO plano (nome_plano, preco, descricao) VALUES (?, ?, ?) RETURNING codigo_plano",
    )
    .bind(&dados.nome_plano)
    .bind(dados.preco)
    .bind(&dados.descricao)
    .fetch_one(db_pool)
    .await
    .map_err(AppError::de_sqlx)?;

    tracing::info!("Plano {} criado: '{}'", codigo_plano, dados.nome_plano);
    Ok(Plano {
        codigo_plano,
        nome_plano: dados.nome_plano.clone(),
        preco: dados.preco,
        descricao: dados.descricao.clone(),
    })
}

/// Lista todos os planos, ordenados pelo código.
pub async fn listar_planos(db_pool: &SqlitePool) -> AppResult<Vec<Plano>> {
    let planos = sqlx::query_as::<_, Plano>(
        "SELECT codigo_plano, nome_plano, preco, descricao FROM plano ORDER BY codigo_plano",
    )
    .fetch_all(db_pool)
    .await?;
    Ok(planos)
}

pub async fn buscar_plano(db_pool: &SqlitePool, codigo_plano: i64) -> AppResult<Plano> {
    sqlx::query_as::<_, Plano>(
        "SELECT codigo_plano, nome_plano, preco, descricao FROM plano WHERE codigo_plano = ?",
    )
    .bind(codigo_plano)
    .fetch_optional(db_pool)
    .await?
    .ok_or(AppError::NaoEncontrado("Plano"))
}

/// Atualização parcial via COALESCE: campos ausentes (NULL no bind)
/// mantêm o valor atual da linha.
pub async fn atualizar_plano(
    db_pool: &SqlitePool,
    codigo_plano: i64,
    dados: &PlanoUpdate,
) -> AppResult<Plano> {
    let res = sqlx::query(
        r#"
        UPDATE plano
        SET nome_plano = COALESCE(?, nome_plano),
            preco      = COALESCE(?, preco),
            descricao  = COALESCE(?, descricao)
        WHERE codigo_plano = ?
        "#,
    )
    .bind(&dados.nome_plano)
    .bind(dados.preco)
    .bind(&dados.descricao)
    .bind(codigo_plano)
    .execute(db_pool)
    .await
    .map_err(AppError::de_sqlx)?;

    if res.rows_affected() == 0 {
        return Err(AppError::NaoEncontrado("Plano"));
    }
    buscar_plano(db_pool, codigo_plano).await
}

pub async fn apagar_plano(db_pool: &SqlitePool, codigo_plano: i64) -> AppResult<()> {
    let res = sqlx::query("DELETE FROM plano WHERE codigo_plano = ?")
        .bind(codigo_plano)
        .execute(db_pool)
        .await?;
    if res.rows_affected() == 0 {
        return Err(AppError::NaoEncontrado("Plano"));
    }
    tracing::info!("Plano {} apagado (cascata sobre alunos dependentes)", codigo_plano);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::teste::pool_de_teste;

    fn plano_basico() -> PlanoCreate {
        PlanoCreate {
            nome_plano: "Básico".into(),
            preco: 50.0,
            descricao: Some("Acesso à musculação".into()),
        }
    }

    #[tokio::test]
    async fn cria_e_busca_plano() {
        let (pool, _dir) = pool_de_teste().await;
        let criado = criar_plano(&pool, &plano_basico()).await.unwrap();
        let lido = buscar_plano(&pool, criado.codigo_plano).await.unwrap();
        assert_eq!(lido.nome_plano, "Básico");
        assert_eq!(lido.preco, 50.0);
    }

    #[tokio::test]
    async fn listagem_ordenada_por_codigo() {
        let (pool, _dir) = pool_de_teste().await;
        criar_plano(&pool, &plano_basico()).await.unwrap();
        criar_plano(
            &pool,
            &PlanoCreate {
                nome_plano: "Premium".into(),
                preco: 100.0,
                descricao: None,
            },
        )
        .await
        .unwrap();

        let planos = listar_planos(&pool).await.unwrap();
        assert_eq!(planos.len(), 2);
        assert!(planos[0].codigo_plano < planos[1].codigo_plano);
    }

    #[tokio::test]
    async fn atualizacao_parcial_nao_toca_campos_ausentes() {
        let (pool, _dir) = pool_de_teste().await;
        let criado = criar_plano(&pool, &plano_basico()).await.unwrap();

        let atualizado = atualizar_plano(
            &pool,
            criado.codigo_plano,
            &PlanoUpdate {
                preco: Some(60.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(atualizado.preco, 60.0);
        assert_eq!(atualizado.nome_plano, "Básico");
        assert_eq!(atualizado.descricao.as_deref(), Some("Acesso à musculação"));
    }

    #[tokio::test]
    async fn atualizacao_vazia_e_idempotente() {
        let (pool, _dir) = pool_de_teste().await;
        let criado = criar_plano(&pool, &plano_basico()).await.unwrap();
        let antes = buscar_plano(&pool, criado.codigo_plano).await.unwrap();

        atualizar_plano(&pool, criado.codigo_plano, &PlanoUpdate::default())
            .await
            .unwrap();

        let depois = buscar_plano(&pool, criado.codigo_plano).await.unwrap();
        assert_eq!(antes.nome_plano, depois.nome_plano);
        assert_eq!(antes.preco, depois.preco);
        assert_eq!(antes.descricao, depois.descricao);
    }

    #[tokio::test]
    async fn apagar_inexistente_da_nao_encontrado() {
        let (pool, _dir) = pool_de_teste().await;
        let err = apagar_plano(&pool, 999).await.unwrap_err();
        assert!(matches!(err, AppError::NaoEncontrado("Plano")));
    }

    #[tokio::test]
    async fn preco_nao_positivo_viola_restricao() {
        let (pool, _dir) = pool_de_teste().await;
        let err = criar_plano(
            &pool,
            &PlanoCreate {
                nome_plano: "Grátis".into(),
                preco: 0.0,
                descricao: None,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Restricao(_)));
    }
}
