pub mod file;
pub mod listing;
