/// Filesystem adapters for the export data directory
pub mod data_dir;
mod export_writer;

pub use export_writer::ExportWriter;
