//! # oxide-sqlfmt-tsql
//!
//! Transact-SQL vocabulary for `oxide-sqlfmt-core`.
//!
//! # How T-SQL differs from the generic dialect
//!
//! - **Identifiers**: `[bracketed]` and `"double quoted"` names; `#temp`
//!   tables and `@local` names use extra identifier characters. Brackets
//!   are therefore quotes, not a parenthesis pair.
//! - **Strings**: `N'unicode'` literals.
//! - **Parameters**: `@name` and `@"quoted name"`.
//! - **System variables**: `@@ROWCOUNT`, `@@IDENTITY`, ...
//! - **Operators**: compound assignment (`+=`, `-=`, ...) and the
//!   not-less / not-greater comparisons `!<`, `!>`.
//! - **Joins**: `CROSS APPLY` and `OUTER APPLY`.
//!
//! ## Example
//!
//! ```rust
//! use oxide_sqlfmt_core::{FormatOptions, SqlFormatter};
//! use oxide_sqlfmt_tsql::TSqlDialect;
//!
//! let formatter = SqlFormatter::from_dialect(&TSqlDialect, FormatOptions::default()).unwrap();
//! let sql = formatter
//!     .format("select top 5 [order id] from #orders where total !< @min")
//!     .unwrap();
//! assert_eq!(sql, "SELECT TOP 5 [order id]\nFROM #orders\nWHERE total !< @min");
//! ```

mod dialect;
mod vocabulary;

pub use dialect::TSqlDialect;
