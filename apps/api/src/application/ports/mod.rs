pub mod sheet_exporter;
