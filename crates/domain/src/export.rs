use crate::report::{ReportKind, ReportRow};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Spreadsheet rendering failed: {0}")]
    RenderFailed(String),
}

/// A rendered report, ready to be uploaded as a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedReport {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Turns report rows into a spreadsheet file
pub trait ReportExporter: Send + Sync {
    fn export(&self, kind: ReportKind, rows: &[ReportRow]) -> Result<ExportedReport, ExportError>;
}
