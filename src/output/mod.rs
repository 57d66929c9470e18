mod console;
mod csv_writer;
mod excel_writer;

pub use console::{build_table, print_report};
pub use csv_writer::CsvWriter;
pub use excel_writer::ExcelWriter;
