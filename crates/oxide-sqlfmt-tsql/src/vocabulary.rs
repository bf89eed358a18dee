//! Transact-SQL reserved words.

// https://learn.microsoft.com/en-us/sql/t-sql/statements/statements
pub const RESERVED_COMMANDS: &[&str] = &[
    "ADD",
    "ALTER COLUMN",
    "ALTER DATABASE",
    "ALTER FUNCTION",
    "ALTER INDEX",
    "ALTER PROCEDURE",
    "ALTER SCHEMA",
    "ALTER TABLE",
    "ALTER TRIGGER",
    "ALTER VIEW",
    "BACKUP DATABASE",
    "BACKUP LOG",
    "BULK INSERT",
    "CLOSE",
    "CREATE DATABASE",
    "CREATE FUNCTION",
    "CREATE INDEX",
    "CREATE PROCEDURE",
    "CREATE SCHEMA",
    "CREATE TABLE",
    "CREATE TRIGGER",
    "CREATE UNIQUE INDEX",
    "CREATE VIEW",
    "DEALLOCATE",
    "DECLARE",
    "DELETE",
    "DELETE FROM",
    "DENY",
    "DISABLE TRIGGER",
    "DROP DATABASE",
    "DROP FUNCTION",
    "DROP INDEX",
    "DROP PROCEDURE",
    "DROP SCHEMA",
    "DROP TABLE",
    "DROP TRIGGER",
    "DROP VIEW",
    "ENABLE TRIGGER",
    "EXEC",
    "EXECUTE",
    "EXECUTE AS",
    "FETCH FIRST",
    "FETCH NEXT",
    "FROM",
    "GRANT",
    "GROUP BY",
    "HAVING",
    "INSERT",
    "INSERT INTO",
    "INTO",
    "LIMIT",
    "MERGE",
    "MERGE INTO",
    "OFFSET",
    "OPEN",
    "ORDER BY",
    "OUTPUT",
    "PARTITION BY",
    "PRINT",
    "RAISERROR",
    "RECEIVE",
    "RESTORE",
    "RETURN",
    "REVERT",
    "REVOKE",
    "SELECT",
    "SEND",
    "SET",
    "SET SCHEMA",
    "THROW",
    "TRUNCATE TABLE",
    "UPDATE",
    "UPDATE STATISTICS",
    "USE",
    "VALUES",
    "WHERE",
    "WINDOW",
    "WITH",
];

pub const RESERVED_BINARY_COMMANDS: &[&str] = &[
    "EXCEPT",
    "EXCEPT ALL",
    "EXCEPT DISTINCT",
    "INTERSECT",
    "INTERSECT ALL",
    "INTERSECT DISTINCT",
    "MINUS",
    "MINUS ALL",
    "MINUS DISTINCT",
    "UNION",
    "UNION ALL",
    "UNION DISTINCT",
];

pub const RESERVED_JOINS: &[&str] = &[
    "CROSS APPLY",
    "CROSS JOIN",
    "FULL JOIN",
    "FULL OUTER JOIN",
    "INNER JOIN",
    "JOIN",
    "LEFT JOIN",
    "LEFT OUTER JOIN",
    "OUTER APPLY",
    "RIGHT JOIN",
    "RIGHT OUTER JOIN",
];

// https://learn.microsoft.com/en-us/sql/t-sql/language-elements/reserved-keywords-transact-sql
pub const RESERVED_KEYWORDS: &[&str] = &[
    "ALL",
    "ANY",
    "AS",
    "ASC",
    "BEGIN",
    "BETWEEN",
    "BREAK",
    "BY",
    "CASCADE",
    "CHECK",
    "CLUSTERED",
    "COLLATE",
    "COLUMN",
    "COMMIT",
    "CONSTRAINT",
    "CONTINUE",
    "CURRENT",
    "CURSOR",
    "DEFAULT",
    "DESC",
    "DISTINCT",
    "ESCAPE",
    "EXISTS",
    "FOR",
    "FOREIGN KEY",
    "FUNCTION",
    "GOTO",
    "HOLDLOCK",
    "IDENTITY",
    "IF",
    "IN",
    "INDEX",
    "IS",
    "KEY",
    "LIKE",
    "MATCHED",
    "NOCHECK",
    "NOLOCK",
    "NONCLUSTERED",
    "NOT",
    "NULL",
    "OF",
    "ONLY",
    "OPTION",
    "OVER",
    "PERCENT",
    "PIVOT",
    "PRIMARY KEY",
    "PROCEDURE",
    "READONLY",
    "REFERENCES",
    "ROLLBACK",
    "ROWS",
    "SCHEMA",
    "SOME",
    "TABLE",
    "THEN",
    "TIES",
    "TO",
    "TOP",
    "TRANSACTION",
    "TRIGGER",
    "TRY",
    "UNIQUE",
    "UNPIVOT",
    "VIEW",
    "WHILE",
];

// https://learn.microsoft.com/en-us/sql/t-sql/functions/functions
pub const RESERVED_FUNCTION_NAMES: &[&str] = &[
    "ABS",
    "AVG",
    "CAST",
    "CEILING",
    "CHARINDEX",
    "COALESCE",
    "CONCAT",
    "CONVERT",
    "COUNT",
    "COUNT_BIG",
    "DATEADD",
    "DATEDIFF",
    "DATENAME",
    "DATEPART",
    "DENSE_RANK",
    "EOMONTH",
    "FLOOR",
    "FORMAT",
    "GETDATE",
    "GETUTCDATE",
    "IIF",
    "ISNULL",
    "LAG",
    "LEAD",
    "LEFT",
    "LEN",
    "LOWER",
    "LTRIM",
    "MAX",
    "MIN",
    "NEWID",
    "NTILE",
    "NULLIF",
    "OBJECT_ID",
    "RANK",
    "REPLACE",
    "RIGHT",
    "ROUND",
    "ROW_NUMBER",
    "RTRIM",
    "SCOPE_IDENTITY",
    "STRING_AGG",
    "STUFF",
    "SUBSTRING",
    "SUM",
    "SYSDATETIME",
    "TRIM",
    "TRY_CAST",
    "TRY_CONVERT",
    "UPPER",
];

pub const OPERATORS: &[&str] = &[
    "~", "!<", "!>", "+=", "-=", "*=", "/=", "%=", "|=", "&=", "^=", "::",
];
