// src/models/contato.rs
use serde::{Deserialize, Serialize};

/// Contato de aluno ou instrutor. O telefone é chave primária na tabela
/// correspondente (contato_aluno / contato_instrutor), logo é único
/// entre todos os contatos dessa entidade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contato {
    pub telefone: String,
    pub email: Option<String>,
}

/// Atualização parcial de contato.
#[derive(Debug, Default, Deserialize)]
pub struct ContatoUpdate {
    pub telefone: Option<String>,
    pub email: Option<String>,
}
