//! Recursive descent parser building the formatting AST.

use std::collections::VecDeque;

use tracing::debug;

use super::error::ParseError;
use crate::ast::{
    ArraySubscript, AstNode, BetweenPredicate, CaseBranch, CaseExpression, Clause, FunctionCall,
    LimitClause, LimitOffset, Parenthesis, Statement,
};
use crate::dialect::{DialectConfig, ParenPair};
use crate::lexer::{Token, TokenKind};

/// Default bound on nested groups, subscripts, CASE expressions and
/// BETWEEN predicates; a clause inside a group counts as a level too.
/// Parsing and layout both recurse once per level.
pub const DEFAULT_MAX_DEPTH: usize = 64;

const CALL_OPEN: &str = "(";
const SUBSCRIPT_OPEN: &str = "[";

/// SQL Parser.
///
/// Holds only the parenthesis pairs of the dialect; every call to
/// [`Parser::parse`] runs on its own cursor.
#[derive(Debug, Clone)]
pub struct Parser {
    parens: Vec<ParenPair>,
    max_depth: usize,
}

impl Parser {
    /// Creates a parser for the dialect's parenthesis pairs.
    #[must_use]
    pub fn new(config: &DialectConfig) -> Self {
        Self {
            parens: config.parens.clone(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Overrides the nesting limit.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parses a token stream into statements.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` on the first structural inconsistency.
    pub fn parse(&self, tokens: Vec<Token>) -> Result<Vec<Statement>, ParseError> {
        let statements = Cursor::new(self, tokens).parse_statements()?;
        debug!(statements = statements.len(), "Parsed statements");
        Ok(statements)
    }
}

/// Which construct the current sequence belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    Statement,
    Paren,
    Case,
}

struct Cursor<'p> {
    parser: &'p Parser,
    tokens: VecDeque<Token>,
    depth: usize,
}

impl<'p> Cursor<'p> {
    fn new(parser: &'p Parser, tokens: Vec<Token>) -> Self {
        Self {
            parser,
            tokens: tokens.into(),
            depth: 0,
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.front()
    }

    fn advance(&mut self) -> Option<Token> {
        self.tokens.pop_front()
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|t| t.is(kind))
    }

    /// Returns true if the next token is the opening marker `open`.
    fn check_open(&self, open: &str, attached: bool) -> bool {
        self.peek().is_some_and(|t| {
            t.is(TokenKind::OpenParen) && t.text == open && (!attached || t.is_attached())
        })
    }

    /// Returns true if the current sequence of `scope` ends here.
    fn at_scope_end(&self, scope: Scope) -> bool {
        let Some(token) = self.peek() else {
            return true;
        };
        match token.kind {
            TokenKind::Delimiter | TokenKind::CloseParen => true,
            TokenKind::ReservedDependentClause | TokenKind::ReservedCaseEnd => {
                scope == Scope::Case
            }
            _ => false,
        }
    }

    fn at_clause_end(&self, scope: Scope) -> bool {
        self.at_scope_end(scope)
            || self
                .peek()
                .is_some_and(|t| t.kind.starts_clause() || is_limit(t))
    }

    fn enter(&mut self, token: &Token) -> Result<(), ParseError> {
        if self.depth >= self.parser.max_depth {
            return Err(ParseError::NestingTooDeep {
                token: token.clone(),
                limit: self.parser.max_depth,
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn parse_statements(mut self) -> Result<Vec<Statement>, ParseError> {
        let mut statements = Vec::new();

        while !self.tokens.is_empty() {
            let children = self.parse_sequence(Scope::Statement)?;
            let terminator = match self.advance() {
                Some(token) if token.is(TokenKind::Delimiter) => Some(token),
                Some(close) => return Err(ParseError::UnmatchedCloseParen { close }),
                None => None,
            };

            let statement = Statement {
                children,
                terminator,
            };
            if !statement.is_empty() {
                statements.push(statement);
            }
        }

        Ok(statements)
    }

    /// Parses nodes until the end of `scope`, starting clauses as they come.
    fn parse_sequence(&mut self, scope: Scope) -> Result<Vec<AstNode>, ParseError> {
        let mut nodes = Vec::new();

        while !self.at_scope_end(scope) {
            let Some(token) = self.advance() else {
                break;
            };
            let node = if is_limit(&token) {
                self.parse_limit(token, scope)?
            } else if token.kind.starts_clause() {
                self.parse_clause(token, scope)?
            } else {
                self.parse_node(token, &nodes)?
            };
            nodes.push(node);
        }

        Ok(nodes)
    }

    fn parse_clause(&mut self, name: Token, scope: Scope) -> Result<AstNode, ParseError> {
        // A subquery costs a level for its group and one for its clauses.
        let nested = scope != Scope::Statement;
        if nested {
            self.enter(&name)?;
        }
        let mut children = Vec::new();

        while !self.at_clause_end(scope) {
            let Some(token) = self.advance() else {
                break;
            };
            let node = self.parse_node(token, &children)?;
            children.push(node);
        }

        if nested {
            self.leave();
        }
        Ok(AstNode::Clause(Clause { name, children }))
    }

    /// Parses one expression node starting with `token`.
    fn parse_node(&mut self, token: Token, siblings: &[AstNode]) -> Result<AstNode, ParseError> {
        let node = match token.kind {
            TokenKind::OpenParen => AstNode::Parenthesis(self.parse_paren(token)?),
            TokenKind::ReservedCaseStart => self.parse_case(token)?,
            TokenKind::ReservedKeyword if token.value == "BETWEEN" => self.parse_between(token)?,
            TokenKind::ReservedFunctionName if self.check_open(CALL_OPEN, false) => {
                self.parse_function_call(token)?
            }
            TokenKind::Identifier | TokenKind::QuotedIdentifier
                if self.check_open(CALL_OPEN, true) =>
            {
                self.parse_function_call(token)?
            }
            TokenKind::Operator if token.value == "*" && !follows_operand(siblings) => {
                AstNode::AllColumnsAsterisk(token)
            }
            _ => AstNode::Token(token),
        };
        self.parse_subscripts(node)
    }

    /// Wraps `node` in one subscript per attached `[` that follows it.
    fn parse_subscripts(&mut self, mut node: AstNode) -> Result<AstNode, ParseError> {
        let mut links = 0;

        while is_subscriptable(&node) && self.check_open(SUBSCRIPT_OPEN, true) {
            let Some(open) = self.advance() else {
                break;
            };
            // Each link nests the tree one level deeper.
            self.enter(&open)?;
            links += 1;
            let parenthesis = self.parse_paren(open)?;
            node = AstNode::ArraySubscript(ArraySubscript {
                array: Box::new(node),
                parenthesis,
            });
        }

        self.depth -= links;
        Ok(node)
    }

    fn parse_function_call(&mut self, name: Token) -> Result<AstNode, ParseError> {
        let parenthesis = self.parse_next_paren(&name)?;
        Ok(AstNode::FunctionCall(FunctionCall { name, parenthesis }))
    }

    /// Parses the group opened by the token after `owner`.
    fn parse_next_paren(&mut self, owner: &Token) -> Result<Parenthesis, ParseError> {
        match self.advance() {
            Some(open) => self.parse_paren(open),
            // Callers check for the marker first.
            None => Err(ParseError::UnmatchedOpenParen {
                open: owner.clone(),
            }),
        }
    }

    fn parse_paren(&mut self, open: Token) -> Result<Parenthesis, ParseError> {
        self.enter(&open)?;
        let children = self.parse_sequence(Scope::Paren)?;

        let expected = self
            .parser
            .parens
            .iter()
            .find(|pair| pair.open == open.text)
            .map(|pair| pair.close.clone())
            .unwrap_or_default();

        let close = match self.peek() {
            Some(t) if t.is(TokenKind::CloseParen) => self.advance(),
            _ => None,
        };
        let Some(close) = close else {
            return Err(ParseError::UnmatchedOpenParen { open });
        };
        if close.text != expected {
            return Err(ParseError::MismatchedParen {
                open,
                expected,
                found: close,
            });
        }

        self.leave();
        Ok(Parenthesis {
            open,
            children,
            close,
        })
    }

    fn parse_case(&mut self, case: Token) -> Result<AstNode, ParseError> {
        self.enter(&case)?;
        let operand = self.parse_sequence(Scope::Case)?;
        let mut branches = Vec::new();

        loop {
            if self.check(TokenKind::ReservedDependentClause) {
                if let Some(keyword) = self.advance() {
                    let children = self.parse_sequence(Scope::Case)?;
                    branches.push(CaseBranch { keyword, children });
                }
            } else if self.check(TokenKind::ReservedCaseEnd) {
                if let Some(end) = self.advance() {
                    self.leave();
                    return Ok(AstNode::CaseExpression(CaseExpression {
                        case,
                        operand,
                        branches,
                        end,
                    }));
                }
            } else {
                return Err(ParseError::UnterminatedCase { case });
            }
        }
    }

    /// Parses `BETWEEN low AND high`. Without a matching AND the keyword
    /// stays a plain token.
    fn parse_between(&mut self, between: Token) -> Result<AstNode, ParseError> {
        if !self.between_has_and() {
            return Ok(AstNode::Token(between));
        }
        self.enter(&between)?;

        let mut low = Vec::new();
        while !self.at_bound_end() {
            let Some(token) = self.advance() else {
                break;
            };
            let node = self.parse_node(token, &low)?;
            low.push(node);
        }

        let and = match self.peek() {
            Some(t) if t.is_value(TokenKind::ReservedLogicalOperator, "AND") => self.advance(),
            _ => None,
        };
        let Some(and) = and else {
            return Err(ParseError::MalformedBetween {
                between,
                reason: "missing AND",
            });
        };
        if !has_value(&low) {
            return Err(ParseError::MalformedBetween {
                between,
                reason: "empty lower bound",
            });
        }

        let high = self.parse_upper_bound()?;
        if !has_value(&high) {
            return Err(ParseError::MalformedBetween {
                between,
                reason: "empty upper bound",
            });
        }

        self.leave();
        Ok(AstNode::BetweenPredicate(BetweenPredicate {
            between,
            low,
            and,
            high,
        }))
    }

    /// Looks ahead for the AND closing a lower bound, skipping nested
    /// groups and CASE expressions.
    fn between_has_and(&self) -> bool {
        let mut nested = 0usize;

        for token in &self.tokens {
            match token.kind {
                TokenKind::OpenParen | TokenKind::ReservedCaseStart => nested += 1,
                TokenKind::CloseParen | TokenKind::ReservedCaseEnd if nested > 0 => nested -= 1,
                _ if nested > 0 => {}
                TokenKind::ReservedLogicalOperator => return token.value == "AND",
                _ if ends_bound(token) => return false,
                _ => {}
            }
        }

        false
    }

    fn at_bound_end(&self) -> bool {
        let Some(token) = self.peek() else {
            return true;
        };
        ends_bound(token) || token.is(TokenKind::ReservedLogicalOperator)
    }

    /// Parses the upper bound: operands joined by operators, with prefix
    /// operators and comments. A keyword such as INTERVAL takes the operand
    /// after it.
    fn parse_upper_bound(&mut self) -> Result<Vec<AstNode>, ParseError> {
        let mut nodes: Vec<AstNode> = Vec::new();

        loop {
            while self
                .peek()
                .is_some_and(|t| t.kind.is_comment() || t.is(TokenKind::Operator))
            {
                if let Some(token) = self.advance() {
                    nodes.push(AstNode::Token(token));
                }
            }
            if self.at_bound_end() {
                break;
            }
            let Some(token) = self.advance() else {
                break;
            };
            let keyword = token.is(TokenKind::ReservedKeyword);
            let node = self.parse_node(token, &nodes)?;
            nodes.push(node);

            let continues = self.check(TokenKind::Operator)
                || (keyword
                    && self.peek().is_some_and(|t| {
                        t.kind.is_operand() || t.is(TokenKind::OpenParen)
                    }));
            if !continues {
                break;
            }
        }

        Ok(nodes)
    }

    fn parse_limit(&mut self, limit: Token, scope: Scope) -> Result<AstNode, ParseError> {
        let first = self.parse_limit_expr(scope)?;

        let comma = match self.peek() {
            Some(t) if t.is(TokenKind::Comma) => self.advance(),
            _ => None,
        };

        let (offset, count) = match comma {
            Some(comma) => {
                if first.is_empty() {
                    return Err(ParseError::MalformedLimit {
                        limit,
                        reason: "empty offset",
                    });
                }
                let count = self.parse_limit_expr(scope)?;
                (Some(LimitOffset { expr: first, comma }), count)
            }
            None => (None, first),
        };

        if count.is_empty() {
            return Err(ParseError::MalformedLimit {
                limit,
                reason: "missing row count",
            });
        }

        Ok(AstNode::LimitClause(LimitClause {
            limit,
            offset,
            count,
        }))
    }

    fn parse_limit_expr(&mut self, scope: Scope) -> Result<Vec<AstNode>, ParseError> {
        let mut nodes = Vec::new();

        while !self.at_clause_end(scope) && !self.check(TokenKind::Comma) {
            let Some(token) = self.advance() else {
                break;
            };
            let node = self.parse_node(token, &nodes)?;
            nodes.push(node);
        }

        Ok(nodes)
    }
}

fn is_limit(token: &Token) -> bool {
    token.is_value(TokenKind::ReservedCommand, "LIMIT")
}

/// Tokens that can never be part of a BETWEEN bound.
fn ends_bound(token: &Token) -> bool {
    matches!(
        token.kind,
        TokenKind::Delimiter
            | TokenKind::CloseParen
            | TokenKind::Comma
            | TokenKind::ReservedCaseEnd
            | TokenKind::ReservedDependentClause
    ) || token.kind.starts_clause()
        || is_limit(token)
}

/// Returns true if the nodes hold more than comments and operators.
fn has_value(nodes: &[AstNode]) -> bool {
    nodes
        .iter()
        .any(|node| !node.is_comment() && !node.is_token(TokenKind::Operator))
}

fn is_subscriptable(node: &AstNode) -> bool {
    node.is_token(TokenKind::Identifier)
        || matches!(node, AstNode::FunctionCall(_) | AstNode::ArraySubscript(_))
}

/// Returns true if the last non-comment sibling is an operand.
fn follows_operand(siblings: &[AstNode]) -> bool {
    siblings
        .iter()
        .rev()
        .find(|node| !node.is_comment())
        .is_some_and(AstNode::is_operand)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{words, ParenPair};
    use crate::lexer::Tokenizer;

    fn config() -> DialectConfig {
        DialectConfig {
            reserved_commands: words(&["SELECT", "FROM", "WHERE", "LIMIT"]),
            reserved_keywords: words(&["BETWEEN", "THEN"]),
            reserved_function_names: words(&["SQRT"]),
            parens: vec![ParenPair::new("(", ")"), ParenPair::new("[", "]")],
            ..DialectConfig::default()
        }
    }

    fn parse(sql: &str) -> Result<Vec<Statement>, ParseError> {
        let config = config();
        let tokens = Tokenizer::new(&config).unwrap().tokenize(sql).unwrap();
        Parser::new(&config).parse(tokens)
    }

    #[test]
    fn test_empty() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn test_lone_delimiters_are_statements() {
        let statements = parse(";;").unwrap();
        assert_eq!(statements.len(), 2);
        assert!(statements.iter().all(Statement::has_semicolon));
    }

    #[test]
    fn test_clause_stops_at_next_clause() {
        let statements = parse("SELECT a FROM t").unwrap();
        let children = &statements[0].children;
        assert_eq!(children.len(), 2);
        assert!(matches!(&children[0], AstNode::Clause(c) if c.children.len() == 1));
    }

    #[test]
    fn test_space_before_paren_is_not_a_call() {
        let statements = parse("SELECT foo (1)").unwrap();
        let AstNode::Clause(select) = &statements[0].children[0] else {
            panic!("Expected clause");
        };
        assert!(matches!(select.children[0], AstNode::Token(_)));
        assert!(matches!(select.children[1], AstNode::Parenthesis(_)));
    }

    #[test]
    fn test_reserved_function_allows_space() {
        let statements = parse("SELECT SQRT (4)").unwrap();
        let AstNode::Clause(select) = &statements[0].children[0] else {
            panic!("Expected clause");
        };
        assert!(matches!(select.children[0], AstNode::FunctionCall(_)));
    }

    #[test]
    fn test_multiplication_is_not_asterisk() {
        let statements = parse("SELECT a * 2").unwrap();
        let AstNode::Clause(select) = &statements[0].children[0] else {
            panic!("Expected clause");
        };
        assert!(select.children[1].is_token(TokenKind::Operator));
    }

    #[test]
    fn test_nesting_limit() {
        let config = config();
        let sql = format!("SELECT {}1{}", "(".repeat(5), ")".repeat(5));
        let tokens = Tokenizer::new(&config).unwrap().tokenize(&sql).unwrap();
        let parser = Parser::new(&config).with_max_depth(4);
        assert!(matches!(
            parser.parse(tokens.clone()),
            Err(ParseError::NestingTooDeep { limit: 4, .. })
        ));
        assert!(Parser::new(&config).with_max_depth(5).parse(tokens).is_ok());
    }

    #[test]
    fn test_subquery_counts_two_levels() {
        let config = config();
        let sql = format!("SELECT {}1{}", "(SELECT ".repeat(3), ")".repeat(3));
        let tokens = Tokenizer::new(&config).unwrap().tokenize(&sql).unwrap();
        assert!(matches!(
            Parser::new(&config).with_max_depth(5).parse(tokens.clone()),
            Err(ParseError::NestingTooDeep { limit: 5, .. })
        ));
        assert!(Parser::new(&config).with_max_depth(6).parse(tokens).is_ok());
    }

    #[test]
    fn test_between_with_expressions() {
        let statements = parse("WHERE x BETWEEN a.lo + 1 AND -5").unwrap();
        let AstNode::Clause(clause) = &statements[0].children[0] else {
            panic!("Expected clause");
        };
        let AstNode::BetweenPredicate(between) = &clause.children[1] else {
            panic!("Expected BETWEEN");
        };
        assert_eq!(between.low.len(), 5);
        assert_eq!(between.high.len(), 2);
    }

    #[test]
    fn test_between_without_and_stays_a_keyword() {
        let statements = parse("WHERE x BETWEEN 1 OR 2").unwrap();
        let AstNode::Clause(clause) = &statements[0].children[0] else {
            panic!("Expected clause");
        };
        assert!(clause.children[1].is_token_value(TokenKind::ReservedKeyword, "BETWEEN"));
        assert_eq!(clause.children.len(), 5);
    }

    #[test]
    fn test_between_skips_nested_and() {
        let statements = parse("WHERE x BETWEEN (a AND b) AND SQRT(c) THEN").unwrap();
        let AstNode::Clause(clause) = &statements[0].children[0] else {
            panic!("Expected clause");
        };
        let AstNode::BetweenPredicate(between) = &clause.children[1] else {
            panic!("Expected BETWEEN");
        };
        assert!(matches!(between.low[..], [AstNode::Parenthesis(_)]));
        assert!(matches!(between.high[..], [AstNode::FunctionCall(_)]));
        assert!(clause.children[2].is_token_value(TokenKind::ReservedKeyword, "THEN"));
    }

    #[test]
    fn test_chained_subscripts() {
        let statements = parse("SELECT m[1][2], SQRT(x)[3]").unwrap();
        let AstNode::Clause(select) = &statements[0].children[0] else {
            panic!("Expected clause");
        };
        let AstNode::ArraySubscript(outer) = &select.children[0] else {
            panic!("Expected subscript");
        };
        assert!(matches!(*outer.array, AstNode::ArraySubscript(_)));
        let AstNode::ArraySubscript(call) = &select.children[2] else {
            panic!("Expected subscript");
        };
        assert!(matches!(*call.array, AstNode::FunctionCall(_)));
    }

    #[test]
    fn test_subscript_chain_counts_toward_nesting() {
        let config = config();
        let sql = format!("SELECT m{}", "[1]".repeat(5));
        let tokens = Tokenizer::new(&config).unwrap().tokenize(&sql).unwrap();
        // Five links, and the last index group one level below them.
        assert!(matches!(
            Parser::new(&config).with_max_depth(5).parse(tokens.clone()),
            Err(ParseError::NestingTooDeep { limit: 5, .. })
        ));
        assert!(Parser::new(&config).with_max_depth(6).parse(tokens).is_ok());
    }

    #[test]
    fn test_case_inside_clause() {
        let statements = parse("SELECT CASE WHEN a THEN 1 ELSE 2 END FROM t").unwrap();
        let AstNode::Clause(select) = &statements[0].children[0] else {
            panic!("Expected clause");
        };
        let AstNode::CaseExpression(case) = &select.children[0] else {
            panic!("Expected CASE");
        };
        assert!(case.operand.is_empty());
        assert_eq!(case.branches.len(), 2);
        assert_eq!(statements[0].children.len(), 2);
    }

    #[test]
    fn test_unterminated_case() {
        let err = parse("SELECT CASE WHEN a THEN 1").unwrap_err();
        assert!(matches!(&err, ParseError::UnterminatedCase { case } if case.text == "CASE"));
        assert_eq!(err.span().start, 7);
    }
}
