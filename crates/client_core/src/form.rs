//! Form fields and the create/edit session mode.

use shared::{
    domain::{Product, ProductId},
    protocol::ProductPayload,
};
use thiserror::Error;

pub const CREATE_LABEL: &str = "Salvar Produto";
pub const UPDATE_LABEL: &str = "Atualizar Produto";

/// Whether a submit creates a new product or replaces an existing one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Creating,
    Editing(ProductId),
}

impl FormMode {
    pub fn editing_id(&self) -> Option<&ProductId> {
        match self {
            Self::Creating => None,
            Self::Editing(id) => Some(id),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing(_))
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DraftError {
    #[error("nome must not be empty")]
    EmptyName,
    #[error("preco is not a valid number: {0:?}")]
    InvalidPrice(String),
    #[error("preco must not be negative: {0}")]
    NegativePrice(f64),
}

/// Validated, unsaved form values. Only [`ProductDraft::parse`] builds one.
///
/// ```compile_fail
/// let draft = client_core::ProductDraft {
///     nome: String::new(),
///     preco: -1.0,
///     descricao: String::new(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    nome: String,
    preco: f64,
    descricao: String,
}

impl ProductDraft {
    pub fn parse(nome: &str, preco: &str, descricao: &str) -> Result<Self, DraftError> {
        let nome = nome.trim();
        if nome.is_empty() {
            return Err(DraftError::EmptyName);
        }
        let preco_text = preco.trim();
        let preco = preco_text
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| DraftError::InvalidPrice(preco_text.to_string()))?;
        if preco < 0.0 {
            return Err(DraftError::NegativePrice(preco));
        }
        Ok(Self {
            nome: nome.to_string(),
            preco,
            descricao: descricao.trim().to_string(),
        })
    }

    pub fn nome(&self) -> &str {
        &self.nome
    }

    pub fn preco(&self) -> f64 {
        self.preco
    }

    pub fn descricao(&self) -> &str {
        &self.descricao
    }
}

impl From<ProductDraft> for ProductPayload {
    fn from(draft: ProductDraft) -> Self {
        ProductPayload::new(draft.nome, draft.preco, draft.descricao)
    }
}

/// Raw text of the form inputs plus the session mode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub nome: String,
    pub preco: String,
    pub descricao: String,
    id: String,
    mode: FormMode,
}

impl ProductForm {
    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    /// Value of the hidden id field; empty while creating.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn submit_label(&self) -> &'static str {
        if self.mode.is_editing() {
            UPDATE_LABEL
        } else {
            CREATE_LABEL
        }
    }

    pub fn cancel_visible(&self) -> bool {
        self.mode.is_editing()
    }

    pub fn draft(&self) -> Result<ProductDraft, DraftError> {
        ProductDraft::parse(&self.nome, &self.preco, &self.descricao)
    }

    pub(crate) fn load(&mut self, product: &Product) {
        self.id = product.id.to_string();
        self.nome = product.nome.clone();
        self.preco = product.preco.to_string();
        self.descricao = product.descricao.clone().unwrap_or_default();
        self.mode = FormMode::Editing(product.id.clone());
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_trims_text_fields() {
        let draft = ProductDraft::parse("  Widget ", " 9.5 ", "  azul  ").expect("valid");
        assert_eq!(draft.nome(), "Widget");
        assert_eq!(draft.preco(), 9.5);
        assert_eq!(draft.descricao(), "azul");
    }

    #[test]
    fn draft_rejects_blank_name() {
        assert_eq!(ProductDraft::parse("   ", "5", ""), Err(DraftError::EmptyName));
        assert_eq!(ProductDraft::parse("", "5", ""), Err(DraftError::EmptyName));
    }

    #[test]
    fn draft_rejects_bad_prices() {
        assert_eq!(
            ProductDraft::parse("Widget", "abc", ""),
            Err(DraftError::InvalidPrice("abc".into()))
        );
        assert_eq!(
            ProductDraft::parse("Widget", "", ""),
            Err(DraftError::InvalidPrice(String::new()))
        );
        assert!(matches!(
            ProductDraft::parse("Widget", "NaN", ""),
            Err(DraftError::InvalidPrice(_))
        ));
        assert!(matches!(
            ProductDraft::parse("Widget", "inf", ""),
            Err(DraftError::InvalidPrice(_))
        ));
        assert_eq!(
            ProductDraft::parse("Widget", "-0.01", ""),
            Err(DraftError::NegativePrice(-0.01))
        );
    }

    #[test]
    fn zero_price_is_valid() {
        let draft = ProductDraft::parse("Brinde", "0", "").expect("zero is allowed");
        assert_eq!(draft.preco(), 0.0);
    }

    #[test]
    fn load_switches_to_editing_and_reset_restores_create_mode() {
        let mut form = ProductForm::default();
        assert_eq!(form.submit_label(), CREATE_LABEL);
        assert!(!form.cancel_visible());

        form.load(&Product {
            id: ProductId::from(7),
            nome: "Caneta".into(),
            preco: 10.0,
            descricao: None,
        });
        assert_eq!(form.mode(), &FormMode::Editing(ProductId::from(7)));
        assert_eq!(form.id(), "7");
        assert_eq!(form.preco, "10");
        assert_eq!(form.descricao, "");
        assert_eq!(form.submit_label(), UPDATE_LABEL);
        assert!(form.cancel_visible());

        form.reset();
        assert_eq!(form, ProductForm::default());
        assert_eq!(form.mode(), &FormMode::Creating);
    }
}
