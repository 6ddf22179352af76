//! Create/edit session state machine and the refresh-after-mutation protocol.
//!
//! Every operation handles its own failures: it logs them, shows a notice and
//! reports an [`Outcome`]. Nothing propagates past the operation that failed.

use std::sync::Arc;

use shared::{domain::ProductId, protocol::ProductPayload};
use tracing::{error, info, warn};

use crate::{
    form::{FormMode, ProductDraft, ProductForm},
    view::{Action, Notice, ProductRow, ProductView},
    ProductApi,
};

pub const CONFIRM_DELETE_PROMPT: &str = "Tem certeza que deseja excluir este produto?";
pub const INVALID_DRAFT_MESSAGE: &str = "Por favor, preencha o nome e um preço válido.";
pub const LOAD_FAILED_MESSAGE: &str =
    "Não foi possível carregar os produtos. Verifique o console para mais detalhes.";
pub const EDIT_LOAD_FAILED_MESSAGE: &str = "Não foi possível carregar o produto para edição.";
pub const DELETED_MESSAGE: &str = "Produto excluído com sucesso!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// Rejected by client-side validation; nothing was sent.
    Invalid,
    /// The user declined the confirmation prompt; nothing was sent.
    Declined,
    Failed,
}

/// Inline button pressed on a table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    Edit(ProductId),
    Delete(ProductId),
}

pub struct ProductFormController {
    api: Arc<dyn ProductApi>,
    form: ProductForm,
}

impl ProductFormController {
    pub fn new(api: Arc<dyn ProductApi>) -> Self {
        Self {
            api,
            form: ProductForm::default(),
        }
    }

    pub fn form(&self) -> &ProductForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ProductForm {
        &mut self.form
    }

    pub fn mode(&self) -> &FormMode {
        self.form.mode()
    }

    /// Initial load when the view comes up.
    pub async fn start<V: ProductView + ?Sized>(&mut self, view: &mut V) -> Outcome {
        self.list(view).await
    }

    /// Fetches the collection and replaces the table. A failed fetch leaves
    /// the previous rows on screen.
    pub async fn list<V: ProductView + ?Sized>(&self, view: &mut V) -> Outcome {
        match self.api.list().await {
            Ok(products) => {
                let rows: Vec<ProductRow> = products.iter().map(ProductRow::from).collect();
                view.render_table(&rows);
                Outcome::Done
            }
            Err(err) => {
                error!(error = %err, "failed to load products");
                view.notify(&Notice::failure(Action::Load, LOAD_FAILED_MESSAGE));
                Outcome::Failed
            }
        }
    }

    /// Loads one product into the form and switches to edit mode.
    pub async fn edit<V: ProductView + ?Sized>(&mut self, id: &ProductId, view: &mut V) -> Outcome {
        match self.api.get(id).await {
            Ok(product) => {
                self.form.load(&product);
                view.focus_name();
                view.scroll_to_form();
                Outcome::Done
            }
            Err(err) => {
                error!(error = %err, product_id = %id, "failed to load product for editing");
                view.notify(&Notice::failure(Action::Edit, EDIT_LOAD_FAILED_MESSAGE));
                Outcome::Failed
            }
        }
    }

    /// Validates the current form and upserts it.
    pub async fn submit<V: ProductView + ?Sized>(&mut self, view: &mut V) -> Outcome {
        match self.form.draft() {
            Ok(draft) => self.upsert(draft, view).await,
            Err(err) => {
                warn!(error = %err, "rejected product draft");
                view.notify(&Notice::failure(
                    upsert_action(self.form.mode()),
                    INVALID_DRAFT_MESSAGE,
                ));
                Outcome::Invalid
            }
        }
    }

    /// Creates or replaces a product depending on the current mode. On success
    /// the table is re-fetched and the form goes back to create mode; on
    /// failure the form keeps its values so the user can retry.
    async fn upsert<V: ProductView + ?Sized>(
        &mut self,
        draft: ProductDraft,
        view: &mut V,
    ) -> Outcome {
        let mode = self.form.mode().clone();
        let action = upsert_action(&mode);
        let payload = ProductPayload::from(draft);
        let result = match &mode {
            FormMode::Editing(id) => self.api.update(id, &payload).await,
            FormMode::Creating => self.api.create(&payload).await,
        };

        match result {
            Ok(()) => {
                info!(?mode, nome = %payload.nome, "product saved");
                self.list(view).await;
                self.reset_form(view);
                view.notify(&Notice::success(
                    action,
                    format!("Produto {} com sucesso!", past_participle(action)),
                ));
                Outcome::Done
            }
            Err(err) => {
                error!(error = %err, ?mode, "failed to save product");
                view.notify(&Notice::failure(
                    action,
                    format!(
                        "Não foi possível {} o produto. {}",
                        infinitive(action),
                        err
                    ),
                ));
                Outcome::Failed
            }
        }
    }

    /// Deletes after a blocking confirmation; declining sends nothing.
    pub async fn delete<V: ProductView + ?Sized>(&mut self, id: &ProductId, view: &mut V) -> Outcome {
        if !view.confirm(CONFIRM_DELETE_PROMPT) {
            return Outcome::Declined;
        }

        match self.api.delete(id).await {
            Ok(()) => {
                info!(product_id = %id, "product deleted");
                self.list(view).await;
                view.notify(&Notice::success(Action::Delete, DELETED_MESSAGE));
                Outcome::Done
            }
            Err(err) => {
                error!(error = %err, product_id = %id, "failed to delete product");
                view.notify(&Notice::failure(
                    Action::Delete,
                    format!("Não foi possível excluir o produto. {}", err),
                ));
                Outcome::Failed
            }
        }
    }

    pub fn cancel<V: ProductView + ?Sized>(&mut self, view: &mut V) {
        self.reset_form(view);
    }

    pub async fn handle_row_action<V: ProductView + ?Sized>(
        &mut self,
        action: RowAction,
        view: &mut V,
    ) -> Outcome {
        match action {
            RowAction::Edit(id) => self.edit(&id, view).await,
            RowAction::Delete(id) => self.delete(&id, view).await,
        }
    }

    fn reset_form<V: ProductView + ?Sized>(&mut self, view: &mut V) {
        self.form.reset();
        view.focus_name();
    }
}

fn upsert_action(mode: &FormMode) -> Action {
    if mode.is_editing() {
        Action::Update
    } else {
        Action::Create
    }
}

fn infinitive(action: Action) -> &'static str {
    match action {
        Action::Update => "atualizar",
        _ => "adicionar",
    }
}

fn past_participle(action: Action) -> &'static str {
    match action {
        Action::Update => "atualizado",
        _ => "adicionado",
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
