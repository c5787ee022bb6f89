pub mod file_names;
pub mod flatten;
