//! Infrastructure layer - file formats for rate tables and plot data

pub mod plot_csv;
pub mod rate_table;
