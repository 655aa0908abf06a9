// src/services/aluno_service.rs
use crate::{
    error::{AppError, AppResult},
    models::aluno::{AlunoComContatoRow, AlunoCreate, AlunoResponse, AlunoUpdate},
};
use sqlx::SqlitePool;

const SELECT_ALUNO: &str = r#"
    SELECT a.matricula, a.cpf, a.nome, a.sexo,
           a.data_nascimento, a.data_matricula, a.codigo_plano,
           c.telefone, c.email
    FROM aluno a
    LEFT JOIN contato_aluno c ON a.matricula = c.matricula
"#;

/// Cria o aluno e o seu contato numa única transação: se o contato
/// falhar (ex.: telefone repetido), o aluno não fica gravado.
pub async fn criar_aluno(db_pool: &SqlitePool, dados: &AlunoCreate) -> AppResult<AlunoResponse> {
    tracing::debug!("Criando aluno '{}'", dados.nome);
    let mut tx = db_pool.begin().await?;

    let matricula: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO aluno (cpf, nome, sexo, data_nascimento, data_matricula, codigo_plano)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING matricula
        "#,
    )
    .bind(&dados.cpf)
    .bind(&dados.nome)
    .bind(dados.sexo)
    .bind(dados.data_nascimento)
    .bind(dados.data_matricula)
    .bind(dados.codigo_plano)
    .fetch_one(&mut *tx)
    .await
    .map_err(AppError::de_sqlx)?;

    sqlx::query("INSERT INTO contato_aluno (telefone, email, matricula) VALUES (?, ?, ?)")
        .bind(&dados.contato.telefone)
        .bind(&dados.contato.email)
        .bind(matricula)
        .execute(&mut *tx)
        .await
        .map_err(AppError::de_sqlx)?;

    tx.commit().await?;
    tracing::info!("Aluno {} criado: '{}'", matricula, dados.nome);
    buscar_aluno(db_pool, matricula).await
}

/// Lista todos os alunos (com contato), ordenados pelo nome.
pub async fn listar_alunos(db_pool: &SqlitePool) -> AppResult<Vec<AlunoResponse>> {
    let linhas = sqlx::query_as::<_, AlunoComContatoRow>(
        &format!("{SELECT_ALUNO} ORDER BY a.nome"),
    )
    .fetch_all(db_pool)
    .await?;
    Ok(linhas.into_iter().map(AlunoResponse::from).collect())
}

pub async fn buscar_aluno(db_pool: &SqlitePool, matricula: i64) -> AppResult<AlunoResponse> {
    sqlx::query_as::<_, AlunoComContatoRow>(&format!("{SELECT_ALUNO} WHERE a.matricula = ?"))
        .bind(matricula)
        .fetch_optional(db_pool)
        .await?
        .map(AlunoResponse::from)
        .ok_or(AppError::NaoEncontrado("Aluno"))
}

/// Atualização parcial do aluno e, se fornecido, do seu contato.
/// Tudo na mesma transação.
pub async fn atualizar_aluno(
    db_pool: &SqlitePool,
    matricula: i64,
    dados: &AlunoUpdate,
) -> AppResult<AlunoResponse> {
    let mut tx = db_pool.begin().await?;

    let res = sqlx::query(
        r#"
        UPDATE aluno
        SET cpf             = COALESCE(?, cpf),
            nome            = COALESCE(?, nome),
            sexo            = COALESCE(?, sexo),
            data_nascimento = COALESCE(?, data_nascimento),
            data_matricula  = COALESCE(?, data_matricula),
            codigo_plano    = COALESCE(?, codigo_plano)
        WHERE matricula = ?
        "#,
    )
    .bind(&dados.cpf)
    .bind(&dados.nome)
    .bind(dados.sexo)
    .bind(dados.data_nascimento)
    .bind(dados.data_matricula)
    .bind(dados.codigo_plano)
    .bind(matricula)
    .execute(&mut *tx)
    .await
    .map_err(AppError::de_sqlx)?;

    if res.rows_affected() == 0 {
        return Err(AppError::NaoEncontrado("Aluno"));
    }

    if let Some(contato) = &dados.contato {
        sqlx::query(
            r#"
            UPDATE contato_aluno
            SET telefone = COALESCE(?, telefone),
                email    = COALESCE(?, email)
            WHERE matricula = ?
            "#,
        )
        .bind(&contato.telefone)
        .bind(&contato.email)
        .bind(matricula)
        .execute(&mut *tx)
        .await
        .map_err(AppError::de_sqlx)?;
    }

    tx.commit().await?;
    buscar_aluno(db_pool, matricula).await
}

pub async fn apagar_aluno(db_pool: &SqlitePool, matricula: i64) -> AppResult<()> {
    let res = sqlx::query("DELETE FROM aluno WHERE matricula = ?")
        .bind(matricula)
        .execute(db_pool)
        .await?;
    if res.rows_affected() == 0 {
        return Err(AppError::NaoEncontrado("Aluno"));
    }
    Ok(())
}

/// Troca de plano: só é permitida para um plano estritamente mais caro.
/// Em caso de sucesso a data de matrícula é "re-carimbada" para hoje.
pub async fn trocar_plano(
    db_pool: &SqlitePool,
    matricula: i64,
    novo_plano: i64,
) -> AppResult<AlunoResponse> {
    let mut tx = db_pool.begin().await?;

    let preco_atual: Option<f64> = sqlx::query_scalar(
        r#"
        SELECT p.preco
        FROM aluno a
        JOIN plano p ON a.codigo_plano = p.codigo_plano
        WHERE a.matricula = ?
        "#,
    )
    .bind(matricula)
    .fetch_optional(&mut *tx)
    .await?;
    let preco_atual = preco_atual.ok_or(AppError::NaoEncontrado("Aluno"))?;

    let preco_novo: Option<f64> =
        sqlx::query_scalar("SELECT preco FROM plano WHERE codigo_plano = ?")
            .bind(novo_plano)
            .fetch_optional(&mut *tx)
            .await?;
    let preco_novo = preco_novo.ok_or(AppError::NaoEncontrado("Plano"))?;

    if preco_novo <= preco_atual {
        // Nada foi alterado: a transação cai e faz rollback
        return Err(AppError::PoliticaPlano(
            "O novo plano deve ser mais caro que o atual".into(),
        ));
    }

    let hoje = chrono::Local::now().date_naive();
    sqlx::query("UPDATE aluno SET codigo_plano = ?, data_matricula = ? WHERE matricula = ?")
        .bind(novo_plano)
        .bind(hoje)
        .bind(matricula)
        .execute(&mut *tx)
        .await
        .map_err(AppError::de_sqlx)?;

    tx.commit().await?;
    tracing::info!("Aluno {} mudou para o plano {}", matricula, novo_plano);
    buscar_aluno(db_pool, matricula).await
}
