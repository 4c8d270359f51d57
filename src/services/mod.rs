pub mod json_writer;
pub mod normalizer;
pub mod row_parser;
pub mod settings_prompt;
pub mod stamper;

pub use json_writer::{output_path_for, JsonWriter};
pub use normalizer::normalize_text;
pub use row_parser::{parse_row, ParsedRow, RowOutcome, SkipReason};
pub use settings_prompt::{ask_input_path, ask_settings};
pub use stamper::{Stamp, Stamper};
