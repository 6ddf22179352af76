//! Console commands, one per line of input.

use client_core::RowAction;
use shared::domain::ProductId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    List,
    Row(RowAction),
    SetNome(String),
    SetPreco(String),
    SetDescricao(String),
    Submit,
    Cancel,
    ShowForm,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '{0}' (type 'help' for the list)")]
    Unknown(String),
    #[error("'{0}' needs a product id")]
    MissingId(&'static str),
}

pub const HELP: &str = "\
comandos:
  list                  recarrega a tabela
  edit <id>             carrega o produto no formulário
  delete <id>           exclui o produto (pede confirmação)
  nome <texto>          preenche o nome
  preco <valor>         preenche o preço
  descricao <texto>     preenche a descrição
  submit                salva o formulário
  cancel                cancela a edição
  form                  mostra o formulário
  help                  mostra esta ajuda
  quit                  sai";

impl UiCommand {
    /// Parses one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        let cmd = match keyword.to_ascii_lowercase().as_str() {
            "list" | "listar" => Self::List,
            "edit" | "editar" => Self::Row(RowAction::Edit(required_id(rest, "edit")?)),
            "delete" | "excluir" => Self::Row(RowAction::Delete(required_id(rest, "delete")?)),
            "nome" => Self::SetNome(rest.to_string()),
            "preco" => Self::SetPreco(rest.to_string()),
            "descricao" => Self::SetDescricao(rest.to_string()),
            "submit" | "salvar" => Self::Submit,
            "cancel" | "cancelar" => Self::Cancel,
            "form" => Self::ShowForm,
            "help" | "ajuda" | "?" => Self::Help,
            "quit" | "exit" | "sair" => Self::Quit,
            _ => return Err(CommandError::Unknown(keyword.to_string())),
        };
        Ok(Some(cmd))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Row(RowAction::Edit(_)) => "edit",
            Self::Row(RowAction::Delete(_)) => "delete",
            Self::SetNome(_) => "set_nome",
            Self::SetPreco(_) => "set_preco",
            Self::SetDescricao(_) => "set_descricao",
            Self::Submit => "submit",
            Self::Cancel => "cancel",
            Self::ShowForm => "show_form",
            Self::Help => "help",
            Self::Quit => "quit",
        }
    }
}

fn required_id(rest: &str, command: &'static str) -> Result<ProductId, CommandError> {
    rest.split_whitespace()
        .next()
        .map(ProductId::from)
        .ok_or(CommandError::MissingId(command))
}
