use serde::{Deserialize, Serialize};

/// Request body for create (`POST`) and update (`PUT`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    pub nome: String,
    pub preco: f64,
    pub descricao: String,
}

impl ProductPayload {
    pub fn new(nome: impl Into<String>, preco: f64, descricao: impl Into<String>) -> Self {
        Self {
            nome: nome.into(),
            preco,
            descricao: descricao.into(),
        }
    }
}
