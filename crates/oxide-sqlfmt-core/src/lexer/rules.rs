//! The ordered rule table driving the tokenizer.
//!
//! Every token class gets one matcher built from the dialect configuration.
//! Classes are tried in [`MATCH_ORDER`]; the first class that matches at the
//! current position wins, and each class takes its own longest match.

use regex::Regex;

use super::reserved::ReservedWords;
use super::TokenKind;
use crate::dialect::{DialectConfig, IdentChars};
use crate::error::ConfigError;

/// Token classes in the order they are tried.
pub const MATCH_ORDER: [TokenKind; 26] = [
    TokenKind::BlockComment,
    TokenKind::LineComment,
    TokenKind::Comma,
    TokenKind::OpenParen,
    TokenKind::CloseParen,
    TokenKind::QuotedIdentifier,
    TokenKind::Number,
    TokenKind::ReservedCaseStart,
    TokenKind::ReservedCaseEnd,
    TokenKind::ReservedCommand,
    TokenKind::ReservedBinaryCommand,
    TokenKind::ReservedDependentClause,
    TokenKind::ReservedJoin,
    TokenKind::ReservedKeyword,
    TokenKind::ReservedLogicalOperator,
    TokenKind::ReservedJoinCondition,
    TokenKind::ReservedFunctionName,
    TokenKind::NamedParameter,
    TokenKind::QuotedParameter,
    TokenKind::IndexedParameter,
    TokenKind::PositionalParameter,
    TokenKind::Variable,
    TokenKind::String,
    TokenKind::Identifier,
    TokenKind::Delimiter,
    TokenKind::Operator,
];

/// Operators every dialect understands, beyond single characters.
const BUILTIN_OPERATORS: &[&str] = &["<>", "<=", ">=", "!=", "||"];

/// Single-character operators.
const OPERATOR_CHARS: &str = r"[+\-*/%&|^<>=.:~!]";

/// Marker that turns a reserved word listed as a function name into a call.
const FUNCTION_OPEN: &str = "(";

const NUMBER: &str =
    r"0x[0-9a-fA-F]+|0b[01]+|(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][-+]?[0-9]+)?";

/// How a placeholder's key is derived from its first capture group.
#[derive(Debug, Clone, Copy)]
enum KeyRule {
    None,
    Capture,
    Unquote,
}

#[derive(Debug, Clone)]
enum Matcher {
    Pattern { regex: Regex, key: KeyRule },
    Reserved(ReservedWords),
}

#[derive(Debug, Clone)]
struct Rule {
    kind: TokenKind,
    matcher: Matcher,
}

/// A successful match at the start of the remaining input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch {
    /// The token class.
    pub kind: TokenKind,
    /// Length of the match in bytes.
    pub len: usize,
    /// Normalized value for reserved words.
    pub value: Option<String>,
    /// Placeholder key.
    pub key: Option<String>,
}

/// Compiled matchers for one dialect, in match order.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<Rule>,
    ident_chars: IdentChars,
    function_names: ReservedWords,
}

impl RuleTable {
    /// Validates `config` and compiles its rules.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the configuration is invalid or a pattern
    /// does not compile.
    pub fn new(config: &DialectConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rules = Vec::with_capacity(MATCH_ORDER.len());
        for kind in MATCH_ORDER {
            if let Some(matcher) = build_matcher(kind, config)? {
                rules.push(Rule { kind, matcher });
            }
        }

        Ok(Self {
            rules,
            ident_chars: config.ident_chars.clone(),
            function_names: ReservedWords::new(&config.reserved_function_names),
        })
    }

    /// Returns the classes this table can produce, in match order.
    pub fn kinds(&self) -> impl Iterator<Item = TokenKind> + '_ {
        self.rules.iter().map(|rule| rule.kind)
    }

    /// Matches the first class that applies at the start of `input`.
    ///
    /// Reserved classes are skipped when `after_dot` is set, so a qualified
    /// name like `t.from` stays an identifier.
    #[must_use]
    pub fn match_at(&self, input: &str, after_dot: bool) -> Option<RuleMatch> {
        self.rules
            .iter()
            .filter(|rule| !(after_dot && rule.kind.is_reserved()))
            .find_map(|rule| self.try_rule(rule, input))
            .map(|m| self.promote_function_name(m, input))
    }

    fn try_rule(&self, rule: &Rule, input: &str) -> Option<RuleMatch> {
        match &rule.matcher {
            Matcher::Pattern { regex, key } => {
                let caps = regex.captures(input)?;
                let whole = caps.get(0)?;
                if whole.is_empty() {
                    return None;
                }
                let key = match key {
                    KeyRule::None => None,
                    KeyRule::Capture => caps.get(1).map(|m| m.as_str().to_string()),
                    KeyRule::Unquote => caps.get(1).map(|m| unquote(m.as_str())),
                };
                Some(RuleMatch {
                    kind: rule.kind,
                    len: whole.end(),
                    value: None,
                    key,
                })
            }
            Matcher::Reserved(words) => {
                let (len, value) = words.match_at(input, &self.ident_chars)?;
                Some(RuleMatch {
                    kind: rule.kind,
                    len,
                    value: Some(value),
                    key: None,
                })
            }
        }
    }

    /// Reclassifies a reserved word of another class that is also a
    /// function name, when `(` comes next.
    fn promote_function_name(&self, mut m: RuleMatch, input: &str) -> RuleMatch {
        if m.kind.is_reserved()
            && m.kind != TokenKind::ReservedFunctionName
            && m.value
                .as_deref()
                .is_some_and(|value| self.function_names.contains(value))
            && input[m.len..].trim_start().starts_with(FUNCTION_OPEN)
        {
            m.kind = TokenKind::ReservedFunctionName;
        }
        m
    }
}

fn build_matcher(kind: TokenKind, config: &DialectConfig) -> Result<Option<Matcher>, ConfigError> {
    if kind.is_reserved() {
        let words = ReservedWords::new(reserved_list(kind, config));
        return Ok((!words.is_empty()).then_some(Matcher::Reserved(words)));
    }

    let (body, key) = match kind {
        TokenKind::BlockComment => (String::from(r"/\*.*?(?:\*/|\z)"), KeyRule::None),
        TokenKind::LineComment => (
            format!("(?:{})[^\r\n]*", alternation(&config.line_comment_types)),
            KeyRule::None,
        ),
        TokenKind::Comma => (String::from(","), KeyRule::None),
        TokenKind::OpenParen => {
            let opens: Vec<String> = config.parens.iter().map(|p| p.open.clone()).collect();
            (alternation(&opens), KeyRule::None)
        }
        TokenKind::CloseParen => {
            let mut closes: Vec<String> = config.parens.iter().map(|p| p.close.clone()).collect();
            closes.dedup();
            (alternation(&closes), KeyRule::None)
        }
        TokenKind::QuotedIdentifier => match quoted_identifiers(config) {
            Some(body) => (body, KeyRule::None),
            None => return Ok(None),
        },
        TokenKind::Number => (String::from(NUMBER), KeyRule::None),
        TokenKind::NamedParameter if !config.params.named.is_empty() => {
            // Marker characters never continue a name, so `@@x` is not `@` + `@x`.
            let rest: String = config
                .ident_chars
                .rest
                .chars()
                .filter(|c| !config.params.named.iter().any(|m| m.contains(*c)))
                .collect();
            (
                format!(
                    "(?:{})([\\p{{Alphabetic}}\\p{{N}}_{}]+)",
                    alternation(&config.params.named),
                    class_chars(&rest)
                ),
                KeyRule::Capture,
            )
        }
        TokenKind::QuotedParameter if !config.params.quoted.is_empty() => {
            match quoted_identifiers(config) {
                Some(body) => (
                    format!("(?:{})({body})", alternation(&config.params.quoted)),
                    KeyRule::Unquote,
                ),
                None => return Ok(None),
            }
        }
        TokenKind::IndexedParameter if !config.params.indexed.is_empty() => (
            format!("(?:{})([0-9]+)", alternation(&config.params.indexed)),
            KeyRule::Capture,
        ),
        TokenKind::PositionalParameter if config.params.positional => {
            (String::from(r"\?"), KeyRule::None)
        }
        TokenKind::Variable if !config.variable_patterns.is_empty() => {
            for pattern in &config.variable_patterns {
                Regex::new(pattern).map_err(|err| ConfigError::InvalidPattern {
                    pattern: pattern.clone(),
                    message: err.to_string(),
                })?;
            }
            let body = config
                .variable_patterns
                .iter()
                .map(|p| format!("(?:{p})"))
                .collect::<Vec<_>>()
                .join("|");
            (body, KeyRule::None)
        }
        TokenKind::String if !config.string_types.is_empty() => {
            let body = config
                .string_types
                .iter()
                .map(|string_type| {
                    if string_type.prefixes.is_empty() {
                        string_type.quote.pattern().to_string()
                    } else {
                        format!(
                            "(?i:{})?{}",
                            alternation(&string_type.prefixes),
                            string_type.quote.pattern()
                        )
                    }
                })
                .collect::<Vec<_>>()
                .join("|");
            (body, KeyRule::None)
        }
        TokenKind::Identifier => (
            format!(
                "[\\p{{Alphabetic}}_{}][\\p{{Alphabetic}}\\p{{N}}_{}]*",
                class_chars(&config.ident_chars.first),
                class_chars(&config.ident_chars.rest)
            ),
            KeyRule::None,
        ),
        TokenKind::Delimiter => (regex::escape(&config.statement_delimiter), KeyRule::None),
        TokenKind::Operator => {
            let mut operators: Vec<String> = BUILTIN_OPERATORS
                .iter()
                .map(|op| (*op).to_string())
                .chain(config.operators.iter().cloned())
                .collect();
            operators.sort();
            operators.dedup();
            (
                format!("{}|{OPERATOR_CHARS}", alternation(&operators)),
                KeyRule::None,
            )
        }
        _ => return Ok(None),
    };

    let source = format!(r"(?s)\A(?:{body})");
    let regex = Regex::new(&source).map_err(|err| ConfigError::InvalidPattern {
        pattern: source.clone(),
        message: err.to_string(),
    })?;
    Ok(Some(Matcher::Pattern { regex, key }))
}

fn reserved_list(kind: TokenKind, config: &DialectConfig) -> &[String] {
    match kind {
        TokenKind::ReservedCaseStart => &config.reserved_case_start,
        TokenKind::ReservedCaseEnd => &config.reserved_case_end,
        TokenKind::ReservedCommand => &config.reserved_commands,
        TokenKind::ReservedBinaryCommand => &config.reserved_binary_commands,
        TokenKind::ReservedDependentClause => &config.reserved_dependent_clauses,
        TokenKind::ReservedJoin => &config.reserved_joins,
        TokenKind::ReservedKeyword => &config.reserved_keywords,
        TokenKind::ReservedLogicalOperator => &config.reserved_logical_operators,
        TokenKind::ReservedJoinCondition => &config.reserved_join_conditions,
        TokenKind::ReservedFunctionName => &config.reserved_function_names,
        _ => &[],
    }
}

fn quoted_identifiers(config: &DialectConfig) -> Option<String> {
    if config.ident_types.is_empty() {
        return None;
    }
    Some(
        config
            .ident_types
            .iter()
            .map(|quote| quote.pattern())
            .collect::<Vec<_>>()
            .join("|"),
    )
}

/// Escaped alternation of literal markers, longest first.
fn alternation(markers: &[String]) -> String {
    let mut sorted: Vec<&String> = markers.iter().collect();
    sorted.sort_by_key(|m| std::cmp::Reverse(m.len()));
    sorted
        .into_iter()
        .map(|m| regex::escape(m))
        .collect::<Vec<_>>()
        .join("|")
}

/// Escapes extra identifier characters for use inside a character class.
fn class_chars(chars: &str) -> String {
    chars
        .chars()
        .map(|c| regex::escape(c.encode_utf8(&mut [0; 4])))
        .collect()
}

/// Strips the quotes of a quoted name and unescapes doubled closing quotes.
fn unquote(quoted: &str) -> String {
    if let Some(inner) = quoted
        .strip_prefix("$$")
        .and_then(|rest| rest.strip_suffix("$$"))
    {
        return inner.to_string();
    }
    let mut chars = quoted.chars();
    let (Some(open), Some(close)) = (chars.next(), chars.next_back()) else {
        return String::new();
    };
    let inner = &quoted[open.len_utf8()..quoted.len() - close.len_utf8()];
    let mut doubled = String::new();
    doubled.push(close);
    doubled.push(close);
    inner.replace(&doubled, &close.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{words, ParamTypes, QuoteStyle};

    fn config() -> DialectConfig {
        DialectConfig {
            reserved_commands: words(&["SELECT", "FROM"]),
            reserved_keywords: words(&["AS", "LEFT"]),
            reserved_function_names: words(&["LEFT", "COUNT"]),
            ident_types: vec![QuoteStyle::DoubleQuote, QuoteStyle::Bracket],
            params: ParamTypes {
                named: words(&["@"]),
                quoted: words(&["@"]),
                indexed: words(&["$"]),
                positional: true,
            },
            ..DialectConfig::default()
        }
    }

    fn kind_at(table: &RuleTable, input: &str) -> Option<TokenKind> {
        table.match_at(input, false).map(|m| m.kind)
    }

    #[test]
    fn test_match_order_covers_every_class_once() {
        let mut seen = std::collections::HashSet::new();
        assert!(MATCH_ORDER.iter().all(|kind| seen.insert(*kind)));
        assert_eq!(MATCH_ORDER[0], TokenKind::BlockComment);
        assert_eq!(MATCH_ORDER[25], TokenKind::Operator);
    }

    #[test]
    fn test_unconfigured_classes_are_skipped() {
        let table = RuleTable::new(&DialectConfig {
            reserved_commands: words(&["SELECT"]),
            ..DialectConfig::default()
        })
        .unwrap();
        let kinds: Vec<_> = table.kinds().collect();
        assert!(!kinds.contains(&TokenKind::Variable));
        assert!(!kinds.contains(&TokenKind::PositionalParameter));
        assert!(kinds.contains(&TokenKind::Identifier));
    }

    #[test]
    fn test_comment_beats_operator() {
        let table = RuleTable::new(&config()).unwrap();
        assert_eq!(kind_at(&table, "-- note"), Some(TokenKind::LineComment));
        assert_eq!(kind_at(&table, "- 1"), Some(TokenKind::Operator));
        assert_eq!(kind_at(&table, "/* a */ b"), Some(TokenKind::BlockComment));
    }

    #[test]
    fn test_unterminated_block_comment_runs_to_end() {
        let table = RuleTable::new(&config()).unwrap();
        let m = table.match_at("/* open\nstill", false).unwrap();
        assert_eq!(m.len, 13);
    }

    #[test]
    fn test_reserved_skipped_after_dot() {
        let table = RuleTable::new(&config()).unwrap();
        assert_eq!(kind_at(&table, "from"), Some(TokenKind::ReservedCommand));
        assert_eq!(
            table.match_at("from", true).map(|m| m.kind),
            Some(TokenKind::Identifier)
        );
    }

    #[test]
    fn test_keyword_promoted_before_paren() {
        let table = RuleTable::new(&config()).unwrap();
        assert_eq!(
            kind_at(&table, "LEFT (name, 2)"),
            Some(TokenKind::ReservedFunctionName)
        );
        assert_eq!(kind_at(&table, "left x"), Some(TokenKind::ReservedKeyword));
        assert_eq!(kind_at(&table, "COUNT(*)"), Some(TokenKind::ReservedFunctionName));
    }

    #[test]
    fn test_command_promoted_before_paren() {
        let table = RuleTable::new(&DialectConfig {
            reserved_commands: words(&["SELECT", "OFFSET"]),
            reserved_function_names: words(&["OFFSET"]),
            ..DialectConfig::default()
        })
        .unwrap();
        assert_eq!(kind_at(&table, "OFFSET(5)"), Some(TokenKind::ReservedFunctionName));
        assert_eq!(kind_at(&table, "offset 5"), Some(TokenKind::ReservedCommand));
        assert_eq!(kind_at(&table, "SELECT (1)"), Some(TokenKind::ReservedCommand));
    }

    #[test]
    fn test_parameter_keys() {
        let table = RuleTable::new(&config()).unwrap();

        let named = table.match_at("@foo = 1", false).unwrap();
        assert_eq!(named.kind, TokenKind::NamedParameter);
        assert_eq!(named.key.as_deref(), Some("foo"));

        let quoted = table.match_at(r#"@"a ""b""""#, false).unwrap();
        assert_eq!(quoted.kind, TokenKind::QuotedParameter);
        assert_eq!(quoted.key.as_deref(), Some(r#"a "b""#));

        let bracketed = table.match_at("@[x]]y]", false).unwrap();
        assert_eq!(bracketed.key.as_deref(), Some("x]y"));

        let indexed = table.match_at("$12", false).unwrap();
        assert_eq!(indexed.kind, TokenKind::IndexedParameter);
        assert_eq!(indexed.key.as_deref(), Some("12"));

        let positional = table.match_at("?", false).unwrap();
        assert_eq!(positional.kind, TokenKind::PositionalParameter);
        assert_eq!(positional.key, None);
    }

    #[test]
    fn test_numbers() {
        let table = RuleTable::new(&config()).unwrap();
        for (input, len) in [("42", 2), ("3.5e2", 5), (".5", 2), ("0xFF", 4), ("1.", 2)] {
            let m = table.match_at(input, false).unwrap();
            assert_eq!(m.kind, TokenKind::Number, "{input}");
            assert_eq!(m.len, len, "{input}");
        }
    }

    #[test]
    fn test_longest_operator_wins() {
        let table = RuleTable::new(&DialectConfig {
            operators: words(&["::", "!<"]),
            ..config()
        })
        .unwrap();
        assert_eq!(table.match_at("<> 1", false).unwrap().len, 2);
        assert_eq!(table.match_at("::int", false).unwrap().len, 2);
        assert_eq!(table.match_at("!< 1", false).unwrap().len, 2);
        assert_eq!(table.match_at("=1", false).unwrap().len, 1);
    }

    #[test]
    fn test_invalid_variable_pattern() {
        let err = RuleTable::new(&DialectConfig {
            variable_patterns: vec![String::from("@@(")],
            ..config()
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPattern { pattern, .. } if pattern == "@@("));
    }

    #[test]
    fn test_unmatched_input() {
        let table = RuleTable::new(&config()).unwrap();
        assert_eq!(table.match_at("#tmp", false), None);
        assert_eq!(table.match_at("{", false), None);
    }

    #[test]
    fn test_unquote() {
        assert_eq!(unquote(r#""a""b""#), r#"a"b"#);
        assert_eq!(unquote("[a]]b]"), "a]b");
        assert_eq!(unquote("`x`"), "x");
    }
}
