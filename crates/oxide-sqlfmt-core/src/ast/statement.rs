//! Top-level statement node.

use super::node::{visit_all, AstNode};
use crate::lexer::Token;

/// One statement of the input, split on the dialect's delimiter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Statement {
    /// The statement body.
    pub children: Vec<AstNode>,
    /// The delimiter token ending the statement, if any.
    pub terminator: Option<Token>,
}

impl Statement {
    /// Returns true if the statement ended with a delimiter.
    #[must_use]
    pub const fn has_semicolon(&self) -> bool {
        self.terminator.is_some()
    }

    /// Returns true if the statement has neither children nor terminator.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.terminator.is_none()
    }

    /// Returns every token of the statement in source order.
    #[must_use]
    pub fn tokens(&self) -> Vec<&Token> {
        let mut tokens = Vec::new();
        visit_all(&self.children, &mut |t| tokens.push(t));
        tokens.extend(&self.terminator);
        tokens
    }
}
