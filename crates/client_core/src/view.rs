//! Presentation seam between the controller and whatever renders it.

use std::fmt;

use shared::domain::{Product, ProductId};

/// The user-facing action a notice reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Load,
    Edit,
    Create,
    Update,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// A blocking, alert-style message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub action: Action,
    pub text: String,
}

impl Notice {
    pub fn success(action: Action, text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            action,
            text: text.into(),
        }
    }

    pub fn failure(action: Action, text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Failure,
            action,
            text: text.into(),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.kind == NoticeKind::Failure
    }
}

/// Two-decimal price. Exact ties round away from zero; `{:.2}` alone would
/// round them to even (`0.125` to `0.12`).
pub fn format_price(preco: f64) -> String {
    let cents = preco * 100.0;
    // Only multiples of 1/8 can sit exactly on a tie, and for those `cents`
    // is exact. Near-ties like 2.675 keep the exact-decimal formatting.
    if (preco * 8.0).fract() == 0.0 && cents.fract().abs() == 0.5 {
        return format!("R$ {:.2}", cents.round() / 100.0);
    }
    format!("R$ {preco:.2}")
}

/// One rendered table row, with its inline Editar/Excluir buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    pub id: ProductId,
    pub nome: String,
    pub preco: String,
    pub descricao: String,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        let descricao = match product.descricao.as_deref() {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => "-".to_string(),
        };
        Self {
            id: product.id.clone(),
            nome: product.nome.clone(),
            preco: format_price(product.preco),
            descricao,
        }
    }
}

impl fmt::Display for ProductRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {} | [Editar][Excluir]",
            self.id, self.nome, self.preco, self.descricao
        )
    }
}

pub trait ProductView {
    /// Replaces every row of the table.
    fn render_table(&mut self, rows: &[ProductRow]);

    fn notify(&mut self, notice: &Notice);

    /// Blocking yes/no prompt.
    fn confirm(&mut self, prompt: &str) -> bool;

    fn focus_name(&mut self) {}

    fn scroll_to_form(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(preco: f64, descricao: Option<&str>) -> Product {
        Product {
            id: ProductId::from(1),
            nome: "Widget".into(),
            preco,
            descricao: descricao.map(str::to_string),
        }
    }

    #[test]
    fn row_matches_table_layout() {
        let row = ProductRow::from(&product(9.5, None));
        assert_eq!(row.to_string(), "1 | Widget | R$ 9.50 | - | [Editar][Excluir]");
    }

    #[test]
    fn empty_description_renders_as_dash() {
        assert_eq!(ProductRow::from(&product(1.0, Some(""))).descricao, "-");
        assert_eq!(ProductRow::from(&product(1.0, Some("azul"))).descricao, "azul");
    }

    #[test]
    fn prices_always_have_two_decimals() {
        assert_eq!(format_price(0.0), "R$ 0.00");
        assert_eq!(format_price(12.0), "R$ 12.00");
        assert_eq!(format_price(3.14159), "R$ 3.14");
        assert_eq!(format_price(1999.9), "R$ 1999.90");
    }

    #[test]
    fn exact_ties_round_up() {
        assert_eq!(format_price(0.125), "R$ 0.13");
        assert_eq!(format_price(10.125), "R$ 10.13");
        assert_eq!(format_price(0.375), "R$ 0.38");
        assert_eq!(format_price(2.5), "R$ 2.50");
        // 2.675 is stored just below the tie.
        assert_eq!(format_price(2.675), "R$ 2.67");
        assert_eq!(format_price(1.005), "R$ 1.00");
    }

    #[test]
    fn unreadable_price_renders_as_nan() {
        assert_eq!(format_price(f64::NAN), "R$ NaN");
    }
}
