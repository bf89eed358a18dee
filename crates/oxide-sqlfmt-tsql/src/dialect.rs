//! Transact-SQL dialect implementation.

use oxide_sqlfmt_core::dialect::{
    words, Dialect, DialectConfig, IdentChars, ParamTypes, QuoteStyle, StringType,
};

use crate::vocabulary::{
    OPERATORS, RESERVED_BINARY_COMMANDS, RESERVED_COMMANDS, RESERVED_FUNCTION_NAMES,
    RESERVED_JOINS, RESERVED_KEYWORDS,
};

/// System variables such as `@@ROWCOUNT`.
const SYSTEM_VARIABLE: &str = r"@@[\p{Alphabetic}\p{N}_]+";

/// Transact-SQL dialect (SQL Server, Azure SQL).
#[derive(Debug, Default, Clone, Copy)]
pub struct TSqlDialect;

impl TSqlDialect {
    /// Creates a new T-SQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for TSqlDialect {
    fn name(&self) -> &'static str {
        "tsql"
    }

    fn config(&self) -> DialectConfig {
        DialectConfig {
            reserved_commands: words(RESERVED_COMMANDS),
            reserved_binary_commands: words(RESERVED_BINARY_COMMANDS),
            reserved_joins: words(RESERVED_JOINS),
            reserved_keywords: words(RESERVED_KEYWORDS),
            reserved_function_names: words(RESERVED_FUNCTION_NAMES),
            string_types: vec![StringType::new(QuoteStyle::SingleQuote).with_prefixes(&["N"])],
            ident_types: vec![QuoteStyle::DoubleQuote, QuoteStyle::Bracket],
            ident_chars: IdentChars {
                first: String::from("#@"),
                rest: String::from("#@$"),
            },
            params: ParamTypes {
                named: words(&["@"]),
                quoted: words(&["@"]),
                ..ParamTypes::default()
            },
            variable_patterns: vec![String::from(SYSTEM_VARIABLE)],
            operators: words(OPERATORS),
            ..DialectConfig::default()
        }
    }
}
