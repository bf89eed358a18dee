//! ANSI-flavoured default dialect.

use super::{
    words, Dialect, DialectConfig, ParamTypes, ParenPair, QuoteStyle, StringType,
};

const RESERVED_COMMANDS: &[&str] = &[
    "ADD",
    "ALTER COLUMN",
    "ALTER TABLE",
    "CREATE INDEX",
    "CREATE TABLE",
    "CREATE VIEW",
    "DELETE FROM",
    "DROP TABLE",
    "DROP VIEW",
    "FETCH FIRST",
    "FETCH NEXT",
    "FROM",
    "GROUP BY",
    "HAVING",
    "INSERT INTO",
    "LIMIT",
    "OFFSET",
    "ORDER BY",
    "PARTITION BY",
    "RETURNING",
    "SELECT",
    "SET",
    "TRUNCATE TABLE",
    "UPDATE",
    "VALUES",
    "WHERE",
    "WINDOW",
    "WITH",
];

const RESERVED_BINARY_COMMANDS: &[&str] = &[
    "EXCEPT",
    "EXCEPT ALL",
    "INTERSECT",
    "INTERSECT ALL",
    "UNION",
    "UNION ALL",
];

const RESERVED_JOINS: &[&str] = &[
    "CROSS JOIN",
    "FULL JOIN",
    "FULL OUTER JOIN",
    "INNER JOIN",
    "JOIN",
    "LEFT JOIN",
    "LEFT OUTER JOIN",
    "NATURAL JOIN",
    "RIGHT JOIN",
    "RIGHT OUTER JOIN",
];

const RESERVED_KEYWORDS: &[&str] = &[
    "ALL",
    "AS",
    "ASC",
    "BETWEEN",
    "CASCADE",
    "CHECK",
    "COLUMN",
    "CONSTRAINT",
    "DEFAULT",
    "DESC",
    "DISTINCT",
    "EXISTS",
    "FALSE",
    "FOREIGN KEY",
    "IF",
    "ILIKE",
    "IN",
    "INTERVAL",
    "IS",
    "LIKE",
    "NOT",
    "NULL",
    "NULLS FIRST",
    "NULLS LAST",
    "ONLY",
    "OVER",
    "PRIMARY KEY",
    "REFERENCES",
    "ROWS",
    "THEN",
    "TRUE",
    "UNIQUE",
];

const RESERVED_FUNCTION_NAMES: &[&str] = &[
    "ABS",
    "AVG",
    "CAST",
    "CEIL",
    "COALESCE",
    "CONCAT",
    "COUNT",
    "DENSE_RANK",
    "EXTRACT",
    "FLOOR",
    "LEFT",
    "LENGTH",
    "LOWER",
    "MAX",
    "MIN",
    "NULLIF",
    "OFFSET",
    "RANK",
    "REPLACE",
    "RIGHT",
    "ROUND",
    "ROW_NUMBER",
    "SQRT",
    "SUBSTRING",
    "SUM",
    "TRIM",
    "UPPER",
];

/// A dialect close to ANSI SQL, used when nothing more specific applies.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericDialect;

impl Dialect for GenericDialect {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn config(&self) -> DialectConfig {
        DialectConfig {
            reserved_commands: words(RESERVED_COMMANDS),
            reserved_binary_commands: words(RESERVED_BINARY_COMMANDS),
            reserved_joins: words(RESERVED_JOINS),
            reserved_keywords: words(RESERVED_KEYWORDS),
            reserved_function_names: words(RESERVED_FUNCTION_NAMES),
            string_types: vec![
                StringType::new(QuoteStyle::SingleQuote).with_prefixes(&["N", "E", "X"]),
            ],
            ident_types: vec![QuoteStyle::DoubleQuote, QuoteStyle::Backtick],
            params: ParamTypes {
                named: words(&[":"]),
                positional: true,
                ..ParamTypes::default()
            },
            operators: words(&["::"]),
            parens: vec![ParenPair::new("(", ")"), ParenPair::new("[", "]")],
            ..DialectConfig::default()
        }
    }
}
