pub mod assembler;
pub mod collector;

pub use assembler::assemble;
pub use collector::{collect_from_path, collect_from_str, parse_rows};
