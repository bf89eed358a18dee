//! Layout engine.
//!
//! Renders parsed statements back to text. Source whitespace is ignored:
//! line breaks, indentation and keyword case come from the tree and the
//! [`FormatOptions`] alone, which makes formatting idempotent.

mod emitter;
mod options;
mod spacing;
mod writer;

pub use options::{FormatOptions, Indent, KeywordCase, TAB_WIDTH};

use tracing::debug;

use crate::ast::Statement;
use crate::error::ConfigError;
use writer::Writer;

/// Renders statements with fixed options.
#[derive(Debug, Clone)]
pub struct Formatter {
    options: FormatOptions,
}

impl Formatter {
    /// Creates a formatter after validating `options`.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if an option is out of range.
    pub fn new(options: FormatOptions) -> Result<Self, ConfigError> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Returns the options.
    #[must_use]
    pub const fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Renders `statements`.
    #[must_use]
    pub fn format(&self, statements: &[Statement]) -> String {
        let mut writer = Writer::new(&self.options, false);
        writer.write_statements(statements);
        let output = writer.finish();
        debug!(
            statements = statements.len(),
            bytes = output.len(),
            "Formatted statements"
        );
        output
    }
}
