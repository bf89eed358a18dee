//! SQL Parser
//!
//! A hand-written recursive descent parser that groups tokens into
//! statements, clauses and the few expression shapes the layout engine
//! treats specially.

mod error;
mod parser;

pub use error::ParseError;
pub use parser::{Parser, DEFAULT_MAX_DEPTH};
