//! SQL dialect vocabulary.
//!
//! Dialects differ in their reserved words, quoting rules, placeholder
//! syntax and operators. None of that is hard-coded in the engine: a dialect
//! is a [`DialectConfig`] value handed to the tokenizer and parser at
//! construction time. The [`Dialect`] trait names such a value.

mod generic;

pub use generic::GenericDialect;

use crate::error::ConfigError;

/// Trait for named SQL dialects.
pub trait Dialect {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns the vocabulary and lexical conventions of the dialect.
    fn config(&self) -> DialectConfig;
}

/// Quoting convention for strings and quoted identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuoteStyle {
    /// `"..."`, doubled `""` or backslash escapes.
    DoubleQuote,
    /// `'...'`, doubled `''` or backslash escapes.
    SingleQuote,
    /// `` `...` ``, doubled backtick escapes.
    Backtick,
    /// `[...]`, doubled `]]` escapes.
    Bracket,
    /// `$$...$$`.
    DollarQuote,
}

impl QuoteStyle {
    /// Returns the opening character sequence.
    #[must_use]
    pub const fn open(&self) -> &'static str {
        match self {
            Self::DoubleQuote => "\"",
            Self::SingleQuote => "'",
            Self::Backtick => "`",
            Self::Bracket => "[",
            Self::DollarQuote => "$$",
        }
    }

    /// Returns the regular expression matching a complete quoted text.
    #[must_use]
    pub const fn pattern(&self) -> &'static str {
        match self {
            Self::DoubleQuote => r#""(?:[^"\\]|\\.|"")*""#,
            Self::SingleQuote => r"'(?:[^'\\]|\\.|'')*'",
            Self::Backtick => r"`(?:[^`]|``)*`",
            Self::Bracket => r"\[(?:[^\]]|\]\])*\]",
            Self::DollarQuote => r"\$\$.*?\$\$",
        }
    }
}

/// A string literal style with its optional prefixes (e.g., `N'...'`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringType {
    /// The quoting convention.
    pub quote: QuoteStyle,
    /// Case-insensitive letter prefixes allowed before the opening quote.
    pub prefixes: Vec<String>,
}

impl StringType {
    /// Creates a string type without prefixes.
    #[must_use]
    pub const fn new(quote: QuoteStyle) -> Self {
        Self {
            quote,
            prefixes: Vec::new(),
        }
    }

    /// Adds allowed prefixes.
    #[must_use]
    pub fn with_prefixes(mut self, prefixes: &[&str]) -> Self {
        self.prefixes = words(prefixes);
        self
    }
}

/// Extra characters allowed in unquoted identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentChars {
    /// Characters allowed as the first character, beyond letters and `_`.
    pub first: String,
    /// Characters allowed after the first, beyond letters, digits and `_`.
    pub rest: String,
}

impl IdentChars {
    /// Returns true if `c` may continue an identifier or reserved word.
    #[must_use]
    pub fn is_rest(&self, c: char) -> bool {
        c.is_alphanumeric() || c == '_' || self.rest.contains(c)
    }
}

/// Placeholder parameter markers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamTypes {
    /// Markers for named parameters (`@name`, `:name`).
    pub named: Vec<String>,
    /// Markers for quoted parameters (`@"name"`).
    pub quoted: Vec<String>,
    /// Markers for indexed parameters (`$1`).
    pub indexed: Vec<String>,
    /// Whether `?` is a positional parameter.
    pub positional: bool,
}

/// A matching pair of parenthesis markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParenPair {
    /// Opening marker.
    pub open: String,
    /// Closing marker.
    pub close: String,
}

impl ParenPair {
    /// Creates a pair.
    #[must_use]
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }
}

/// Everything the engine needs to know about one SQL dialect.
///
/// Reserved word lists may contain multi-word entries such as
/// `LEFT OUTER JOIN`; words match case-insensitively and may be separated
/// by any whitespace in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialectConfig {
    /// Clause-starting commands (SELECT, FROM, ORDER BY, ...).
    pub reserved_commands: Vec<String>,
    /// Set operations (UNION, INTERSECT, ...).
    pub reserved_binary_commands: Vec<String>,
    /// Joins (JOIN, LEFT OUTER JOIN, ...).
    pub reserved_joins: Vec<String>,
    /// Clauses only meaningful inside CASE (WHEN, ELSE).
    pub reserved_dependent_clauses: Vec<String>,
    /// Other reserved keywords.
    pub reserved_keywords: Vec<String>,
    /// Logical operators (AND, OR).
    pub reserved_logical_operators: Vec<String>,
    /// Join conditions (ON, USING).
    pub reserved_join_conditions: Vec<String>,
    /// Words opening a CASE expression.
    pub reserved_case_start: Vec<String>,
    /// Words closing a CASE expression.
    pub reserved_case_end: Vec<String>,
    /// Reserved function names.
    pub reserved_function_names: Vec<String>,
    /// String literal styles.
    pub string_types: Vec<StringType>,
    /// Quoted identifier styles.
    pub ident_types: Vec<QuoteStyle>,
    /// Extra identifier characters.
    pub ident_chars: IdentChars,
    /// Placeholder parameter markers.
    pub params: ParamTypes,
    /// Regular expressions matching dialect variables (e.g., `@@\w+`).
    pub variable_patterns: Vec<String>,
    /// Multi-character operators beyond the built-in ones.
    pub operators: Vec<String>,
    /// Parenthesis pairs; the first pair is conventionally `()`.
    pub parens: Vec<ParenPair>,
    /// Line comment markers.
    pub line_comment_types: Vec<String>,
    /// Statement separator.
    pub statement_delimiter: String,
}

impl Default for DialectConfig {
    fn default() -> Self {
        Self {
            reserved_commands: Vec::new(),
            reserved_binary_commands: Vec::new(),
            reserved_joins: Vec::new(),
            reserved_dependent_clauses: words(&["WHEN", "ELSE"]),
            reserved_keywords: Vec::new(),
            reserved_logical_operators: words(&["AND", "OR"]),
            reserved_join_conditions: words(&["ON", "USING"]),
            reserved_case_start: words(&["CASE"]),
            reserved_case_end: words(&["END"]),
            reserved_function_names: Vec::new(),
            string_types: vec![StringType::new(QuoteStyle::SingleQuote)],
            ident_types: vec![QuoteStyle::DoubleQuote],
            ident_chars: IdentChars::default(),
            params: ParamTypes::default(),
            variable_patterns: Vec::new(),
            operators: Vec::new(),
            parens: vec![ParenPair::new("(", ")")],
            line_comment_types: words(&["--"]),
            statement_delimiter: String::from(";"),
        }
    }
}

impl DialectConfig {
    /// Returns the closing marker paired with `open`.
    #[must_use]
    pub fn closing_for(&self, open: &str) -> Option<&str> {
        self.parens
            .iter()
            .find(|pair| pair.open == open)
            .map(|pair| pair.close.as_str())
    }

    /// Returns the reserved word lists with their field names.
    #[must_use]
    pub fn reserved_lists(&self) -> [(&'static str, &[String]); 10] {
        [
            ("reserved_commands", &self.reserved_commands),
            ("reserved_binary_commands", &self.reserved_binary_commands),
            ("reserved_joins", &self.reserved_joins),
            ("reserved_dependent_clauses", &self.reserved_dependent_clauses),
            ("reserved_keywords", &self.reserved_keywords),
            ("reserved_logical_operators", &self.reserved_logical_operators),
            ("reserved_join_conditions", &self.reserved_join_conditions),
            ("reserved_case_start", &self.reserved_case_start),
            ("reserved_case_end", &self.reserved_case_end),
            ("reserved_function_names", &self.reserved_function_names),
        ]
    }

    /// Checks the configuration for empty or malformed entries.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reserved_commands.is_empty() {
            return Err(ConfigError::EmptyVocabulary("reserved_commands"));
        }

        for (list, entries) in self.reserved_lists() {
            for entry in entries {
                let mut parts = entry.split_whitespace().peekable();
                let well_formed = parts.peek().is_some()
                    && parts.all(|word| word.chars().all(|c| self.ident_chars.is_rest(c)));
                if !well_formed {
                    return Err(ConfigError::MalformedVocabulary {
                        list,
                        entry: entry.clone(),
                    });
                }
            }
        }

        self.validate_parens()?;

        if !is_symbol(&self.statement_delimiter) {
            return Err(ConfigError::InvalidDelimiter(
                self.statement_delimiter.clone(),
            ));
        }

        let markers = self
            .params
            .named
            .iter()
            .chain(&self.params.quoted)
            .chain(&self.params.indexed)
            .chain(&self.line_comment_types)
            .chain(&self.operators);
        for marker in markers {
            if !is_symbol(marker) {
                return Err(ConfigError::InvalidMarker(marker.clone()));
            }
        }

        for string_type in &self.string_types {
            for prefix in &string_type.prefixes {
                if prefix.is_empty() || !prefix.chars().all(char::is_alphabetic) {
                    return Err(ConfigError::InvalidMarker(prefix.clone()));
                }
            }
        }

        Ok(())
    }

    fn validate_parens(&self) -> Result<(), ConfigError> {
        if self.parens.is_empty() {
            return Err(ConfigError::InvalidParens(String::from(
                "at least one parenthesis pair is required",
            )));
        }

        for (i, pair) in self.parens.iter().enumerate() {
            if !is_symbol(&pair.open) || !is_symbol(&pair.close) {
                return Err(ConfigError::InvalidParens(format!(
                    "invalid pair {}{}",
                    pair.open, pair.close
                )));
            }
            if self.parens[..i].iter().any(|other| other.open == pair.open) {
                return Err(ConfigError::InvalidParens(format!(
                    "opening marker {} is listed twice",
                    pair.open
                )));
            }
            let clashes_with_quote = self
                .ident_types
                .iter()
                .copied()
                .chain(self.string_types.iter().map(|s| s.quote))
                .any(|quote| quote.open() == pair.open);
            if clashes_with_quote {
                return Err(ConfigError::ConflictingMarkers(pair.open.clone()));
            }
        }

        Ok(())
    }
}

/// Converts a static word list into owned vocabulary entries.
#[must_use]
pub fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| (*w).to_string()).collect()
}

/// Non-empty, no whitespace, and not starting like a word.
fn is_symbol(marker: &str) -> bool {
    marker
        .chars()
        .next()
        .is_some_and(|c| !c.is_alphanumeric() && c != '_')
        && !marker.chars().any(char::is_whitespace)
}
