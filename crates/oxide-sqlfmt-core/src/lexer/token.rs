//! Token types produced by the tokenizer.

use super::Span;

/// The lexical class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Comments
    /// `/* ... */`
    BlockComment,
    /// `-- ...` up to the end of the line
    LineComment,

    // Punctuation
    /// `,`
    Comma,
    /// A configured opening marker, `(` by default
    OpenParen,
    /// A configured closing marker, `)` by default
    CloseParen,
    /// Statement separator, `;` by default
    Delimiter,
    /// Any operator symbol, including `.` and `*`
    Operator,

    // Literals and names
    /// Number literal (e.g., 42, 3.5e2, 0xFF)
    Number,
    /// String literal (e.g., 'hello', N'hello')
    String,
    /// Unquoted identifier
    Identifier,
    /// Quoted identifier (e.g., "name", [name])
    QuotedIdentifier,
    /// Dialect-specific variable (e.g., @@ROWCOUNT)
    Variable,

    // Placeholders
    /// `@name` or `:name`
    NamedParameter,
    /// `@"name"`
    QuotedParameter,
    /// `$1`
    IndexedParameter,
    /// `?`
    PositionalParameter,

    // Reserved words
    /// `CASE`
    ReservedCaseStart,
    /// `END`
    ReservedCaseEnd,
    /// Clause-starting command (e.g., SELECT, FROM, ORDER BY)
    ReservedCommand,
    /// Set operation (e.g., UNION ALL)
    ReservedBinaryCommand,
    /// `WHEN` / `ELSE`
    ReservedDependentClause,
    /// Join (e.g., LEFT OUTER JOIN)
    ReservedJoin,
    /// Any other reserved keyword (e.g., AS, BETWEEN)
    ReservedKeyword,
    /// `AND` / `OR`
    ReservedLogicalOperator,
    /// `ON` / `USING`
    ReservedJoinCondition,
    /// Reserved function name (e.g., COUNT)
    ReservedFunctionName,
}

impl TokenKind {
    /// Returns the upper snake case name of the class.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BlockComment => "BLOCK_COMMENT",
            Self::LineComment => "LINE_COMMENT",
            Self::Comma => "COMMA",
            Self::OpenParen => "OPEN_PAREN",
            Self::CloseParen => "CLOSE_PAREN",
            Self::Delimiter => "DELIMITER",
            Self::Operator => "OPERATOR",
            Self::Number => "NUMBER",
            Self::String => "STRING",
            Self::Identifier => "IDENTIFIER",
            Self::QuotedIdentifier => "QUOTED_IDENTIFIER",
            Self::Variable => "VARIABLE",
            Self::NamedParameter => "NAMED_PARAMETER",
            Self::QuotedParameter => "QUOTED_PARAMETER",
            Self::IndexedParameter => "INDEXED_PARAMETER",
            Self::PositionalParameter => "POSITIONAL_PARAMETER",
            Self::ReservedCaseStart => "RESERVED_CASE_START",
            Self::ReservedCaseEnd => "RESERVED_CASE_END",
            Self::ReservedCommand => "RESERVED_COMMAND",
            Self::ReservedBinaryCommand => "RESERVED_BINARY_COMMAND",
            Self::ReservedDependentClause => "RESERVED_DEPENDENT_CLAUSE",
            Self::ReservedJoin => "RESERVED_JOIN",
            Self::ReservedKeyword => "RESERVED_KEYWORD",
            Self::ReservedLogicalOperator => "RESERVED_LOGICAL_OPERATOR",
            Self::ReservedJoinCondition => "RESERVED_JOIN_CONDITION",
            Self::ReservedFunctionName => "RESERVED_FUNCTION_NAME",
        }
    }

    /// Returns true for every reserved-word class.
    #[must_use]
    pub const fn is_reserved(&self) -> bool {
        matches!(
            self,
            Self::ReservedCaseStart
                | Self::ReservedCaseEnd
                | Self::ReservedCommand
                | Self::ReservedBinaryCommand
                | Self::ReservedDependentClause
                | Self::ReservedJoin
                | Self::ReservedKeyword
                | Self::ReservedLogicalOperator
                | Self::ReservedJoinCondition
                | Self::ReservedFunctionName
        )
    }

    /// Returns true for the classes that open a clause node.
    #[must_use]
    pub const fn starts_clause(&self) -> bool {
        matches!(
            self,
            Self::ReservedCommand | Self::ReservedBinaryCommand | Self::ReservedJoin
        )
    }

    /// Returns true for comments.
    #[must_use]
    pub const fn is_comment(&self) -> bool {
        matches!(self, Self::BlockComment | Self::LineComment)
    }

    /// Returns true for placeholder parameters.
    #[must_use]
    pub const fn is_parameter(&self) -> bool {
        matches!(
            self,
            Self::NamedParameter
                | Self::QuotedParameter
                | Self::IndexedParameter
                | Self::PositionalParameter
        )
    }

    /// Returns true for tokens that stand for a value on their own.
    #[must_use]
    pub const fn is_operand(&self) -> bool {
        matches!(
            self,
            Self::Number
                | Self::String
                | Self::Identifier
                | Self::QuotedIdentifier
                | Self::Variable
                | Self::NamedParameter
                | Self::QuotedParameter
                | Self::IndexedParameter
                | Self::PositionalParameter
        )
    }
}

impl core::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified lexical unit with its source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The lexical class.
    pub kind: TokenKind,
    /// The exact source text.
    pub text: String,
    /// The normalized text (uppercased for reserved words).
    pub value: String,
    /// Whitespace between the previous token and this one.
    pub whitespace_before: String,
    /// Parameter name without its marker, for placeholders that have one.
    pub key: Option<String>,
    /// The location in the source text.
    pub span: Span,
}

impl Token {
    /// Creates a token whose value equals its text.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        let text = text.into();
        Self {
            kind,
            value: text.clone(),
            text,
            whitespace_before: String::new(),
            key: None,
            span,
        }
    }

    /// Replaces the normalized value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Sets the parameter key.
    #[must_use]
    pub fn with_key(mut self, key: Option<String>) -> Self {
        self.key = key;
        self
    }

    /// Sets the preceding whitespace.
    #[must_use]
    pub fn with_whitespace(mut self, whitespace: impl Into<String>) -> Self {
        self.whitespace_before = whitespace.into();
        self
    }

    /// Returns true if the token has the given class.
    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Returns true if the token has the given class and normalized value.
    #[must_use]
    pub fn is_value(&self, kind: TokenKind, value: &str) -> bool {
        self.kind == kind && self.value == value
    }

    /// Returns true if no whitespace separates this token from the previous one.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.whitespace_before.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_new_copies_text_into_value() {
        let token = Token::new(TokenKind::Identifier, "users", Span::new(0, 5));
        assert_eq!(token.text, "users");
        assert_eq!(token.value, "users");
        assert!(token.key.is_none());
        assert!(token.is_attached());
    }

    #[test]
    fn test_token_builders() {
        let token = Token::new(TokenKind::ReservedJoin, "left  join", Span::new(4, 14))
            .with_value("LEFT JOIN")
            .with_whitespace(" ");
        assert!(token.is_value(TokenKind::ReservedJoin, "LEFT JOIN"));
        assert!(!token.is_attached());
    }

    #[test]
    fn test_kind_classification() {
        assert!(TokenKind::ReservedCommand.starts_clause());
        assert!(TokenKind::ReservedJoin.starts_clause());
        assert!(!TokenKind::ReservedKeyword.starts_clause());
        assert!(TokenKind::ReservedFunctionName.is_reserved());
        assert!(!TokenKind::Identifier.is_reserved());
        assert!(TokenKind::IndexedParameter.is_parameter());
        assert!(TokenKind::QuotedIdentifier.is_operand());
        assert!(!TokenKind::Operator.is_operand());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(TokenKind::ReservedCommand.to_string(), "RESERVED_COMMAND");
        assert_eq!(TokenKind::Number.to_string(), "NUMBER");
    }
}
