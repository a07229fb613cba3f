use super::column::Column;
use crate::models::prelude::AnalysisResult;
use std::cmp::max;

pub const NO_RESULTS_TEXT: &str = "No results found";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRow {
    Record(Vec<String>),
    /// A single cell spanning `span` columns.
    Empty { span: usize, text: String },
}

/// Rows rendered for the fixed column set in [`Column`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultTable {
    pub rows: Vec<TableRow>,
}

impl ResultTable {
    /// One row per record, in the order given. An empty slice yields the
    /// explicit "no results" row instead of an empty body.
    pub fn from_records(records: &[AnalysisResult]) -> Self {
        if records.is_empty() {
            return Self::empty();
        }

        Self {
            rows: records.iter().map(Self::record_row).collect(),
        }
    }

    pub fn single(record: &AnalysisResult) -> Self {
        Self {
            rows: vec![Self::record_row(record)],
        }
    }

    pub fn empty() -> Self {
        Self {
            rows: vec![TableRow::Empty {
                span: Column::all().len(),
                text: NO_RESULTS_TEXT.to_string(),
            }],
        }
    }

    fn record_row(record: &AnalysisResult) -> TableRow {
        TableRow::Record(Column::all().iter().map(|c| c.render(record)).collect())
    }

    pub fn headers(&self) -> Vec<String> {
        Column::all().iter().map(Column::header).collect()
    }

    pub fn record_rows(&self) -> Vec<&Vec<String>> {
        self.rows
            .iter()
            .filter_map(|row| match row {
                TableRow::Record(cells) => Some(cells),
                TableRow::Empty { .. } => None,
            })
            .collect()
    }

    /// Plain text, one line per row, columns padded to the widest cell.
    pub fn to_text(&self) -> String {
        let headers = self.headers();
        let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
        for cells in self.record_rows() {
            for (width, cell) in widths.iter_mut().zip(cells) {
                *width = max(*width, cell.chars().count());
            }
        }

        let mut lines = vec![format_cells(&headers, &widths)];
        lines.push(
            widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join("-+-"),
        );
        for row in &self.rows {
            match row {
                TableRow::Record(cells) => lines.push(format_cells(cells, &widths)),
                TableRow::Empty { text, .. } => lines.push(text.clone()),
            }
        }

        lines.join("\n")
    }
}

fn format_cells(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:width$}"))
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}
