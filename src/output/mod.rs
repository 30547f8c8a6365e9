//! Output module: tabular export and the console run summary

pub mod table;
pub mod summary;

pub use table::export;
