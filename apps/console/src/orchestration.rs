//! Routes console commands to the form controller.

use std::io::{BufRead, Write};

use anyhow::Context;
use client_core::{Outcome, ProductFormController, RowAction};
use tracing::{debug, info};

use crate::{
    commands::{UiCommand, HELP},
    terminal::TerminalView,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub async fn dispatch<R: BufRead, W: Write>(
    controller: &mut ProductFormController,
    view: &mut TerminalView<R, W>,
    cmd: UiCommand,
) -> Flow {
    debug!(command = cmd.name(), "dispatching console command");

    match cmd {
        UiCommand::List => {
            controller.list(view).await;
        }
        UiCommand::Row(action) => {
            let editing = matches!(action, RowAction::Edit(_));
            let outcome = controller.handle_row_action(action, view).await;
            if editing && outcome == Outcome::Done {
                view.show_form(controller.form());
            }
        }
        UiCommand::SetNome(value) => controller.form_mut().nome = value,
        UiCommand::SetPreco(value) => controller.form_mut().preco = value,
        UiCommand::SetDescricao(value) => controller.form_mut().descricao = value,
        UiCommand::Submit => {
            controller.submit(view).await;
        }
        UiCommand::Cancel => {
            controller.cancel(view);
            view.show_form(controller.form());
        }
        UiCommand::ShowForm => view.show_form(controller.form()),
        UiCommand::Help => view.show_message(HELP),
        UiCommand::Quit => return Flow::Quit,
    }

    Flow::Continue
}

/// Loads the table, then reads commands until `quit` or end of input.
pub async fn run<R: BufRead, W: Write>(
    controller: &mut ProductFormController,
    view: &mut TerminalView<R, W>,
) -> anyhow::Result<()> {
    controller.start(view).await;
    view.show_message("digite 'help' para ver os comandos");

    loop {
        view.prompt();
        let Some(line) = view.read_line().context("failed to read console input")? else {
            break;
        };
        match UiCommand::parse(&line) {
            Ok(Some(cmd)) => {
                if dispatch(controller, view, cmd).await == Flow::Quit {
                    break;
                }
            }
            Ok(None) => {}
            Err(err) => view.show_message(&err.to_string()),
        }
    }

    info!("console session finished");
    Ok(())
}

#[cfg(test)]
#[path = "tests/orchestration_tests.rs"]
mod tests;
