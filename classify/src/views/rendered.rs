use crate::render::prelude::ResultTable;
use crate::report_stdout;
use colored::Colorize;
use std::io::Write;
use tracing::error;

/// What a view shows at a given moment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderedView {
    pub title: String,
    pub loading: Option<String>,
    pub error: Option<String>,
    pub table: Option<ResultTable>,
}

impl RenderedView {
    pub fn titled(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Default::default()
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_some()
    }

    /// Write the view to the terminal. Errors go through logging so they
    /// land on the console and in the log file.
    pub async fn print(&self) {
        report_stdout!("{}", self.title.white().bold());
        if let Some(loading) = &self.loading {
            report_stdout!("{}", loading);
            return;
        }
        if let Some(message) = &self.error {
            error!(target: "always", "{}", message);
        }
        if let Some(table) = &self.table {
            report_stdout!("{}", table.to_text());
        }
    }
}
