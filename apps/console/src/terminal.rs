//! Line-oriented terminal rendition of the product table and form.

use std::{
    fmt,
    io::{self, BufRead, Write},
};

use client_core::{Notice, NoticeKind, ProductForm, ProductRow, ProductView};
use tracing::warn;

const TABLE_HEADER: &str = "ID | Nome | Preço | Descrição | Ações";

pub struct TerminalView<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalView<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Next input line without its terminator; `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(|c: char| c == '\r' || c == '\n').to_string()))
    }

    pub fn prompt(&mut self) {
        self.emit(format_args!("> "));
        if let Err(err) = self.output.flush() {
            warn!(error = %err, "failed to flush terminal output");
        }
    }

    pub fn show_form(&mut self, form: &ProductForm) {
        let id = if form.id().is_empty() { "-" } else { form.id() };
        self.emit(format_args!(
            "formulário [{}]\n  id: {id}\n  nome: {}\n  preco: {}\n  descricao: {}\n",
            form.submit_label(),
            form.nome,
            form.preco,
            form.descricao,
        ));
        if form.cancel_visible() {
            self.emit(format_args!("  (cancel para sair da edição)\n"));
        }
    }

    pub fn show_message(&mut self, text: &str) {
        self.emit(format_args!("{text}\n"));
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    fn emit(&mut self, args: fmt::Arguments<'_>) {
        if let Err(err) = self.output.write_fmt(args) {
            warn!(error = %err, "failed to write to terminal");
        }
    }
}

impl<R: BufRead, W: Write> ProductView for TerminalView<R, W> {
    fn render_table(&mut self, rows: &[ProductRow]) {
        self.emit(format_args!("{TABLE_HEADER}\n"));
        if rows.is_empty() {
            self.emit(format_args!("(nenhum produto cadastrado)\n"));
        }
        for row in rows {
            self.emit(format_args!("{row}\n"));
        }
    }

    fn notify(&mut self, notice: &Notice) {
        let tag = match notice.kind {
            NoticeKind::Success => "ok",
            NoticeKind::Failure => "erro",
        };
        self.emit(format_args!("[{tag}] {}\n", notice.text));
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        self.emit(format_args!("{prompt} [s/N] "));
        if let Err(err) = self.output.flush() {
            warn!(error = %err, "failed to flush terminal output");
        }
        match self.read_line() {
            Ok(Some(answer)) => matches!(
                answer.trim().to_ascii_lowercase().as_str(),
                "s" | "sim" | "y" | "yes"
            ),
            Ok(None) => false,
            Err(err) => {
                warn!(error = %err, "failed to read confirmation");
                false
            }
        }
    }
}
