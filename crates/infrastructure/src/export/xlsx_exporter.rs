use domain::action::format_timestamp;
use domain::export::{ExportError, ExportedReport, ReportExporter};
use domain::report::{REPORT_COLUMNS, ReportKind, ReportRow};
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use tracing::debug;

/// Renders reports as a single-sheet `.xlsx` workbook held in memory
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxReportExporter;

impl XlsxReportExporter {
    pub fn new() -> Self {
        Self
    }

    fn render(&self, rows: &[ReportRow]) -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();
        let header = Format::new().set_bold();
        let sheet = workbook.add_worksheet();
        sheet.set_name("records")?;

        for (col, title) in REPORT_COLUMNS.iter().enumerate() {
            sheet.write_string_with_format(0, col as u16, *title, &header)?;
        }

        for (i, row) in rows.iter().enumerate() {
            let r = i as u32 + 1;
            sheet.write_number(r, 0, row.scooter_number as f64)?;
            sheet.write_number(r, 1, row.user_id as f64)?;
            sheet.write_string(r, 2, row.action.as_str())?;
            sheet.write_string(r, 3, format_timestamp(&row.datetime))?;
        }

        sheet.set_column_width(3, 20)?;
        workbook.save_to_buffer()
    }
}

impl ReportExporter for XlsxReportExporter {
    fn export(&self, kind: ReportKind, rows: &[ReportRow]) -> Result<ExportedReport, ExportError> {
        let bytes = self
            .render(rows)
            .map_err(|e| ExportError::RenderFailed(e.to_string()))?;
        let file_name = kind.file_name();
        debug!(file = %file_name, rows = rows.len(), bytes = bytes.len(), "Report rendered");
        Ok(ExportedReport { file_name, bytes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::ActionKind;
    use domain::action::parse_timestamp;

    fn row(scooter_number: i64) -> ReportRow {
        ReportRow {
            scooter_number,
            user_id: 42,
            action: ActionKind::Battery,
            datetime: parse_timestamp("2025-01-01T10:00:00").unwrap(),
        }
    }

    #[test]
    fn test_export_produces_xlsx_archive() {
        let report = XlsxReportExporter::new()
            .export(ReportKind::Full, &[row(101), row(102)])
            .unwrap();
        assert_eq!(report.file_name, "rapor.xlsx");
        // xlsx files are zip archives
        assert_eq!(&report.bytes[..2], b"PK");
    }

    #[test]
    fn test_daily_export_is_named_after_day() {
        let day = chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let report = XlsxReportExporter::new()
            .export(ReportKind::Daily(day), &[row(105)])
            .unwrap();
        assert_eq!(report.file_name, "rapor_gunluk_2025-01-01.xlsx");
        assert!(!report.bytes.is_empty());
    }
}
