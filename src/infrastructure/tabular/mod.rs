mod csv_column_reader;
mod csv_result_writer;
mod tabular_error;
mod text_upload;

pub use csv_column_reader::{read_csv_column, read_csv_columns};
pub use csv_result_writer::{RESULT_HEADERS, write_results_csv};
pub use tabular_error::TabularError;
pub use text_upload::decode_text_upload;
