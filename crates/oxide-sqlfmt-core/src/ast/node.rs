//! AST node types.

use crate::lexer::{Span, Token, TokenKind};

/// A node in the formatting AST.
///
/// Every node owns the tokens that delimit it, so walking a tree with
/// [`AstNode::for_each_token`] yields each source token exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AstNode {
    /// A clause started by a command, set operation or join.
    Clause(Clause),
    /// `name(args)`.
    FunctionCall(FunctionCall),
    /// `name[index]`, also chained as `f(x)[i]` or `m[i][j]`.
    ArraySubscript(ArraySubscript),
    /// A parenthesized group.
    Parenthesis(Parenthesis),
    /// `BETWEEN low AND high`.
    BetweenPredicate(BetweenPredicate),
    /// `LIMIT [offset,] count`.
    LimitClause(LimitClause),
    /// `CASE ... END`.
    CaseExpression(CaseExpression),
    /// An unqualified `*`.
    AllColumnsAsterisk(Token),
    /// Any other token.
    Token(Token),
}

/// A clause: the reserved word that opens it and everything up to the next clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    /// The command, binary command or join token.
    pub name: Token,
    /// The clause body.
    pub children: Vec<AstNode>,
}

/// A function call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionCall {
    /// The function name.
    pub name: Token,
    /// The argument list.
    pub parenthesis: Parenthesis,
}

/// An array subscript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArraySubscript {
    /// The subscripted name, call or subscript.
    pub array: Box<AstNode>,
    /// The bracketed index.
    pub parenthesis: Parenthesis,
}

/// A parenthesized group with its markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parenthesis {
    /// The opening marker.
    pub open: Token,
    /// The contents.
    pub children: Vec<AstNode>,
    /// The closing marker.
    pub close: Token,
}

impl Parenthesis {
    /// Returns the opening marker text.
    #[must_use]
    pub fn open_paren(&self) -> &str {
        &self.open.text
    }

    /// Returns the closing marker text.
    #[must_use]
    pub fn close_paren(&self) -> &str {
        &self.close.text
    }

    /// Returns true if the group directly contains a clause.
    #[must_use]
    pub fn has_clause(&self) -> bool {
        self.children
            .iter()
            .any(|child| matches!(child, AstNode::Clause(_)))
    }
}

/// A `BETWEEN` predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BetweenPredicate {
    /// The BETWEEN keyword.
    pub between: Token,
    /// The lower bound.
    pub low: Vec<AstNode>,
    /// The AND separating the bounds.
    pub and: Token,
    /// The upper bound.
    pub high: Vec<AstNode>,
}

/// A LIMIT clause in either `LIMIT count` or `LIMIT offset, count` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimitClause {
    /// The LIMIT keyword.
    pub limit: Token,
    /// The offset and the comma after it.
    pub offset: Option<LimitOffset>,
    /// The row count.
    pub count: Vec<AstNode>,
}

/// The offset part of `LIMIT offset, count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimitOffset {
    /// The offset expression.
    pub expr: Vec<AstNode>,
    /// The comma separating offset and count.
    pub comma: Token,
}

/// A CASE expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseExpression {
    /// The CASE keyword.
    pub case: Token,
    /// The operand of a simple CASE; empty for a searched CASE.
    pub operand: Vec<AstNode>,
    /// WHEN and ELSE branches in source order.
    pub branches: Vec<CaseBranch>,
    /// The END keyword.
    pub end: Token,
}

/// A WHEN or ELSE branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseBranch {
    /// The WHEN or ELSE keyword.
    pub keyword: Token,
    /// The branch body, including THEN and its result.
    pub children: Vec<AstNode>,
}

impl AstNode {
    /// Returns the leaf token, if this node is one.
    #[must_use]
    pub const fn as_token(&self) -> Option<&Token> {
        match self {
            Self::Token(token) => Some(token),
            _ => None,
        }
    }

    /// Returns true if the node is a leaf of the given class.
    #[must_use]
    pub fn is_token(&self, kind: TokenKind) -> bool {
        self.as_token().is_some_and(|t| t.is(kind))
    }

    /// Returns true if the node is a leaf with the given class and value.
    #[must_use]
    pub fn is_token_value(&self, kind: TokenKind, value: &str) -> bool {
        self.as_token().is_some_and(|t| t.is_value(kind, value))
    }

    /// Returns true if the node is a comment leaf.
    #[must_use]
    pub fn is_comment(&self) -> bool {
        self.as_token().is_some_and(|t| t.kind.is_comment())
    }

    /// Returns true if the node stands for a value.
    ///
    /// Structural expressions count as values; clauses and predicates do not.
    #[must_use]
    pub const fn is_operand(&self) -> bool {
        match self {
            Self::Token(token) => token.kind.is_operand(),
            Self::FunctionCall(_)
            | Self::ArraySubscript(_)
            | Self::Parenthesis(_)
            | Self::CaseExpression(_)
            | Self::AllColumnsAsterisk(_) => true,
            Self::Clause(_) | Self::BetweenPredicate(_) | Self::LimitClause(_) => false,
        }
    }

    /// Calls `f` on every token of the subtree in source order.
    pub fn for_each_token<'a>(&'a self, f: &mut impl FnMut(&'a Token)) {
        match self {
            Self::Clause(clause) => {
                f(&clause.name);
                visit_all(&clause.children, f);
            }
            Self::FunctionCall(call) => {
                f(&call.name);
                visit_paren(&call.parenthesis, f);
            }
            Self::ArraySubscript(subscript) => {
                subscript.array.for_each_token(f);
                visit_paren(&subscript.parenthesis, f);
            }
            Self::Parenthesis(paren) => visit_paren(paren, f),
            Self::BetweenPredicate(between) => {
                f(&between.between);
                visit_all(&between.low, f);
                f(&between.and);
                visit_all(&between.high, f);
            }
            Self::LimitClause(limit) => {
                f(&limit.limit);
                if let Some(offset) = &limit.offset {
                    visit_all(&offset.expr, f);
                    f(&offset.comma);
                }
                visit_all(&limit.count, f);
            }
            Self::CaseExpression(case) => {
                f(&case.case);
                visit_all(&case.operand, f);
                for branch in &case.branches {
                    f(&branch.keyword);
                    visit_all(&branch.children, f);
                }
                f(&case.end);
            }
            Self::AllColumnsAsterisk(token) | Self::Token(token) => f(token),
        }
    }

    /// Returns every token of the subtree in source order.
    #[must_use]
    pub fn tokens(&self) -> Vec<&Token> {
        let mut tokens = Vec::new();
        self.for_each_token(&mut |t| tokens.push(t));
        tokens
    }

    /// Returns the source range covered by the node.
    #[must_use]
    pub fn span(&self) -> Span {
        let mut span: Option<Span> = None;
        self.for_each_token(&mut |t| {
            span = Some(span.map_or(t.span, |s| s.merge(t.span)));
        });
        span.unwrap_or_default()
    }
}

pub(crate) fn visit_all<'a>(nodes: &'a [AstNode], f: &mut impl FnMut(&'a Token)) {
    for node in nodes {
        node.for_each_token(f);
    }
}

fn visit_paren<'a>(paren: &'a Parenthesis, f: &mut impl FnMut(&'a Token)) {
    f(&paren.open);
    visit_all(&paren.children, f);
    f(&paren.close);
}
