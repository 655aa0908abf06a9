// src/services/mod.rs
pub mod aluno_service;
pub mod bioimpedancia_service;
pub mod instrutor_service;
pub mod plano_service;
pub mod relatorio_service;
pub mod turma_service;
