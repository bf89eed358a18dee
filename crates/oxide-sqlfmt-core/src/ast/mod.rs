//! Abstract Syntax Tree (AST) types for formatting.
//!
//! The tree is shallow and syntax-agnostic: it records only the structure
//! the layout engine needs (clauses, groups, calls, CASE, BETWEEN, LIMIT)
//! and keeps everything else as token leaves.

mod node;
mod statement;

pub use node::{
    ArraySubscript, AstNode, BetweenPredicate, CaseBranch, CaseExpression, Clause, FunctionCall,
    LimitClause, LimitOffset, Parenthesis,
};
pub use statement::Statement;
