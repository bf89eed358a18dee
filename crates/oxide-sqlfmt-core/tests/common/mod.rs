#![allow(dead_code)]

use oxide_sqlfmt_core::ast::{AstNode, Clause, Statement};
use oxide_sqlfmt_core::dialect::{words, DialectConfig, ParenPair};
use oxide_sqlfmt_core::{
    FormatError, FormatOptions, GenericDialect, SqlFormatter, Token, TokenKind, Tokenizer,
};

/// A small dialect with just enough vocabulary to exercise every node.
pub fn test_config() -> DialectConfig {
    DialectConfig {
        reserved_commands: words(&["SELECT", "FROM", "WHERE", "LIMIT", "CREATE TABLE"]),
        reserved_binary_commands: words(&["UNION"]),
        reserved_joins: words(&["JOIN"]),
        reserved_dependent_clauses: words(&["WHEN", "ELSE"]),
        reserved_keywords: words(&["BETWEEN", "LIKE", "ON", "USING"]),
        reserved_function_names: words(&["SQRT", "OFFSET"]),
        parens: vec![ParenPair::new("(", ")"), ParenPair::new("[", "]")],
        ..DialectConfig::default()
    }
}

pub fn test_formatter() -> SqlFormatter {
    SqlFormatter::new(&test_config(), FormatOptions::default())
        .unwrap_or_else(|e| panic!("Invalid test dialect: {e}"))
}

pub fn generic(options: FormatOptions) -> SqlFormatter {
    SqlFormatter::from_dialect(&GenericDialect, options)
        .unwrap_or_else(|e| panic!("Invalid options: {e}"))
}

pub fn tokenize(sql: &str) -> Vec<Token> {
    let tokenizer =
        Tokenizer::new(&test_config()).unwrap_or_else(|e| panic!("Invalid test dialect: {e}"));
    tokenizer
        .tokenize(sql)
        .unwrap_or_else(|e| panic!("Failed to tokenize: {sql}\nError: {e:?}"))
}

pub fn parse(sql: &str) -> Vec<Statement> {
    test_formatter()
        .parse(sql)
        .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"))
}

pub fn parse_err(sql: &str) -> FormatError {
    test_formatter()
        .parse(sql)
        .expect_err(&format!("Expected parse error for: {sql}"))
}

/// Parses a single statement and returns its children.
pub fn parse_one(sql: &str) -> Vec<AstNode> {
    let mut statements = parse(sql);
    assert_eq!(statements.len(), 1, "Expected one statement in: {sql}");
    statements.remove(0).children
}

/// Parses a single statement consisting of a single clause.
pub fn parse_clause(sql: &str) -> Clause {
    let mut children = parse_one(sql);
    assert_eq!(children.len(), 1, "Expected one clause in: {sql}");
    match children.remove(0) {
        AstNode::Clause(clause) => clause,
        other => panic!("Expected clause, got {other:?}"),
    }
}

/// Formats with the generic dialect and default options.
pub fn format(sql: &str) -> String {
    format_with(sql, FormatOptions::default())
}

pub fn format_with(sql: &str, options: FormatOptions) -> String {
    generic(options)
        .format(sql)
        .unwrap_or_else(|e| panic!("Failed to format: {sql}\nError: {e}"))
}

/// Verifies that formatting reaches a fixed point after one pass.
pub fn assert_idempotent(formatter: &SqlFormatter, sql: &str) {
    let first = formatter
        .format(sql)
        .unwrap_or_else(|e| panic!("Failed to format: {sql}\nError: {e}"));
    let second = formatter
        .format(&first)
        .unwrap_or_else(|e| panic!("Failed to re-format: {first}\nError: {e}"));
    assert_eq!(
        first, second,
        "Formatting is not idempotent.\n  Input:  {sql}\n  First:  {first}\n  Second: {second}"
    );
}

/// The token stream with layout-dependent parts normalized: reserved words
/// by value, line comments without trailing whitespace.
pub fn signature(formatter: &SqlFormatter, sql: &str) -> Vec<(TokenKind, String)> {
    formatter
        .tokenize(sql)
        .unwrap_or_else(|e| panic!("Failed to tokenize: {sql}\nError: {e}"))
        .into_iter()
        .map(|token| {
            let text = if token.kind.is_reserved() {
                token.value
            } else if token.is(TokenKind::LineComment) {
                token.text.trim_end().to_string()
            } else {
                token.text
            };
            (token.kind, text)
        })
        .collect()
}

/// Statements covering every node kind in the generic dialect.
pub const CORPUS: &[&str] = &[
    "select a, b from t",
    "SELECT count(*) AS n FROM users WHERE age BETWEEN 18 AND 65",
    "select * from a left join b on a.id = b.id and a.x > -1",
    "SELECT CASE WHEN x = 1 THEN 'a' WHEN x = 2 THEN 'b' ELSE NULL END FROM t",
    "select case status when 1 then 'on' else 'off' end as state from devices",
    "select x from (select y from z where q in (1, 2, 3)) s",
    "select a -- trailing\nfrom t",
    "select a, -- after comma\n b from t",
    "UPDATE t SET a = 1, b = :name WHERE id = ?",
    "insert into t (a, b) values (1, 'x'), (2, 'y')",
    "select arr[1], t.col::text from t limit 10",
    "select a from t limit 5, 10",
    "select a from t union all select b from u order by 1 desc",
    "/* block */ select 1",
    "select coalesce(first_name, last_name, 'anonymous') as display_name from people",
    "select -a, - -1, 1 - 2, t. 5 from t",
    "select a from t where x = 1 or (y = 2 and z like 'q%')",
    "create table users (id int primary key, name varchar(100) not null)",
    "select left(name, 3), right (name, 2) from t",
    "select \"quoted col\", `tick` from t;;",
    "with cte as (select 1 as one) select one from cte",
    "select count(*) over (partition by a order by b) from t",
    "select a from t where b = 1 -- end\n;",
    "select 1; select 2;\n\n\nselect 3",
];
