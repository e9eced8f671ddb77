pub mod parser;
pub mod priority;

pub use parser::{parse, ParsedCapture};
pub use priority::Priority;
