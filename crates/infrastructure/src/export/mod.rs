pub mod xlsx_exporter;

pub use xlsx_exporter::XlsxReportExporter;
