//! Tree walk producing the formatted text.
//!
//! Decisions are made width-first: a construct is tried on one line and
//! broken only when it cannot stay there. A `flat` writer renders
//! everything on one line and is used to measure candidates.

use super::emitter::StringEmitter;
use super::options::{FormatOptions, KeywordCase};
use super::spacing;
use crate::ast::{AstNode, CaseExpression, Clause, LimitClause, Parenthesis, Statement};
use crate::lexer::{Token, TokenKind};

pub(super) struct Writer<'o> {
    options: &'o FormatOptions,
    out: StringEmitter,
    flat: bool,
}

impl<'o> Writer<'o> {
    pub(super) fn new(options: &'o FormatOptions, flat: bool) -> Self {
        Self {
            options,
            out: StringEmitter::new(options.indent.unit()),
            flat,
        }
    }

    pub(super) fn finish(self) -> String {
        self.out.finish()
    }

    pub(super) fn write_statements(&mut self, statements: &[Statement]) {
        for (i, statement) in statements.iter().enumerate() {
            if i > 0 {
                self.out.blank_lines(self.options.lines_between_statements);
            }
            self.write_sequence(&statement.children, 0);
            if let Some(terminator) = &statement.terminator {
                self.out.attach(&terminator.text);
            }
        }
    }

    fn newline(&mut self, depth: usize) {
        if self.flat {
            self.out.space();
        } else {
            self.out.newline(depth);
        }
    }

    /// Width of `f`'s output rendered on one line.
    fn measure(&self, f: impl FnOnce(&mut Writer<'o>)) -> usize {
        let mut writer = Writer::new(self.options, true);
        f(&mut writer);
        writer.finish().chars().count()
    }

    fn fits(&self, depth: usize, width: usize) -> bool {
        depth * self.options.indent.width() + width <= self.options.line_width
    }

    fn write_sequence(&mut self, nodes: &[AstNode], depth: usize) {
        for (i, node) in nodes.iter().enumerate() {
            if !spacing::is_tight(&nodes[..i], node) {
                self.out.space();
            }
            self.write_node(node, depth);
        }
    }

    /// Writes one item per line: items end after a comma and a logical
    /// operator or join condition starts a new one.
    fn write_items(&mut self, nodes: &[AstNode], depth: usize) {
        for item in split_items(nodes) {
            self.newline(depth);
            self.write_sequence(item, depth);
        }
    }

    fn write_node(&mut self, node: &AstNode, depth: usize) {
        match node {
            AstNode::Clause(clause) => self.write_clause(clause, depth),
            AstNode::LimitClause(limit) => self.write_limit(limit, depth),
            AstNode::FunctionCall(call) => {
                self.write_token(&call.name, depth);
                self.write_paren(&call.parenthesis, depth);
            }
            AstNode::ArraySubscript(subscript) => {
                self.write_node(&subscript.array, depth);
                self.write_paren(&subscript.parenthesis, depth);
            }
            AstNode::Parenthesis(paren) => self.write_paren(paren, depth),
            AstNode::BetweenPredicate(between) => {
                self.write_token(&between.between, depth);
                self.out.space();
                self.write_sequence(&between.low, depth);
                self.out.space();
                self.write_token(&between.and, depth);
                self.out.space();
                self.write_sequence(&between.high, depth);
            }
            AstNode::CaseExpression(case) => self.write_case(case, depth),
            AstNode::AllColumnsAsterisk(token) | AstNode::Token(token) => {
                self.write_token(token, depth);
            }
        }
    }

    fn write_token(&mut self, token: &Token, depth: usize) {
        if token.is(TokenKind::LineComment) {
            self.out.text(token.text.trim_end());
            self.newline(depth);
        } else if token.kind.is_reserved() {
            let text = keyword_text(token, self.options.keyword_case);
            self.out.text(&text);
        } else {
            self.out.text(&token.text);
        }
    }

    fn write_clause(&mut self, clause: &Clause, depth: usize) {
        self.newline(depth);
        self.write_token(&clause.name, depth);
        if clause.children.is_empty() {
            return;
        }

        let inline = self.flat
            || (!must_break(&clause.children)
                && self.fits(depth, self.measure(|w| w.write_clause(clause, 0))));
        if inline {
            self.out.space();
            self.write_sequence(&clause.children, depth);
        } else {
            self.write_items(&clause.children, depth + 1);
        }
    }

    fn write_limit(&mut self, limit: &LimitClause, depth: usize) {
        self.newline(depth);
        self.write_token(&limit.limit, depth);
        self.out.space();
        if let Some(offset) = &limit.offset {
            self.write_sequence(&offset.expr, depth);
            self.out.attach(&offset.comma.text);
            self.out.space();
        }
        self.write_sequence(&limit.count, depth);
    }

    fn write_paren(&mut self, paren: &Parenthesis, depth: usize) {
        self.out.text(paren.open_paren());
        if paren.children.is_empty() {
            self.out.text(paren.close_paren());
            return;
        }

        if self.flat {
            self.write_sequence(&paren.children, depth);
        } else if paren.has_clause() {
            self.newline(depth + 1);
            self.write_sequence(&paren.children, depth + 1);
            self.newline(depth);
        } else if !must_break(&paren.children)
            && (paren.children.len() == 1
                || self.fits(depth, self.measure(|w| w.write_paren(paren, 0))))
        {
            self.write_sequence(&paren.children, depth);
        } else {
            self.write_items(&paren.children, depth + 1);
            self.newline(depth);
        }
        self.out.text(paren.close_paren());
    }

    fn write_case(&mut self, case: &CaseExpression, depth: usize) {
        self.write_token(&case.case, depth);
        if !case.operand.is_empty() {
            self.out.space();
            self.write_sequence(&case.operand, depth + 1);
        }
        for branch in &case.branches {
            self.newline(depth + 1);
            self.write_token(&branch.keyword, depth + 1);
            if !branch.children.is_empty() {
                self.out.space();
                self.write_sequence(&branch.children, depth + 1);
            }
        }
        self.newline(depth);
        self.write_token(&case.end, depth);
    }
}

/// Renders a reserved word in the configured case.
pub(super) fn keyword_text(token: &Token, case: KeywordCase) -> String {
    match case {
        KeywordCase::Upper => token.value.clone(),
        KeywordCase::Lower => token.value.to_lowercase(),
        KeywordCase::Preserve => token.text.split_whitespace().collect::<Vec<_>>().join(" "),
    }
}

fn split_items(nodes: &[AstNode]) -> Vec<&[AstNode]> {
    let mut items = Vec::new();
    let mut start = 0;

    for (i, node) in nodes.iter().enumerate() {
        let starts_item = node.is_token(TokenKind::ReservedLogicalOperator)
            || node.is_token(TokenKind::ReservedJoinCondition);
        if starts_item && i > start {
            items.push(&nodes[start..i]);
            start = i;
        }
        if node.is_token(TokenKind::Comma) {
            items.push(&nodes[start..=i]);
            start = i + 1;
        }
    }
    if start < nodes.len() {
        items.push(&nodes[start..]);
    }

    items
}

/// Returns true if the nodes cannot be laid out on one line.
fn must_break(nodes: &[AstNode]) -> bool {
    nodes.iter().any(node_must_break)
}

fn node_must_break(node: &AstNode) -> bool {
    match node {
        AstNode::Token(token) => {
            token.is(TokenKind::LineComment)
                || (token.is(TokenKind::BlockComment) && token.text.contains('\n'))
        }
        AstNode::AllColumnsAsterisk(_) => false,
        AstNode::Clause(_) | AstNode::CaseExpression(_) => true,
        AstNode::Parenthesis(paren) => paren_must_break(paren),
        AstNode::FunctionCall(call) => paren_must_break(&call.parenthesis),
        AstNode::ArraySubscript(subscript) => {
            node_must_break(&subscript.array) || paren_must_break(&subscript.parenthesis)
        }
        AstNode::BetweenPredicate(between) => must_break(&between.low) || must_break(&between.high),
        AstNode::LimitClause(limit) => {
            must_break(&limit.count)
                || limit
                    .offset
                    .as_ref()
                    .is_some_and(|offset| must_break(&offset.expr))
        }
    }
}

fn paren_must_break(paren: &Parenthesis) -> bool {
    paren.has_clause() || must_break(&paren.children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Span;

    fn leaf(kind: TokenKind, text: &str) -> AstNode {
        AstNode::Token(Token::new(kind, text, Span::default()))
    }

    #[test]
    fn test_keyword_text() {
        let token = Token::new(TokenKind::ReservedJoin, "Left\n  Join", Span::default())
            .with_value("LEFT JOIN");
        assert_eq!(keyword_text(&token, KeywordCase::Upper), "LEFT JOIN");
        assert_eq!(keyword_text(&token, KeywordCase::Lower), "left join");
        assert_eq!(keyword_text(&token, KeywordCase::Preserve), "Left Join");
    }

    #[test]
    fn test_split_items() {
        let nodes = vec![
            leaf(TokenKind::Identifier, "a"),
            leaf(TokenKind::Comma, ","),
            leaf(TokenKind::Identifier, "b"),
            leaf(TokenKind::ReservedLogicalOperator, "AND"),
            leaf(TokenKind::Identifier, "c"),
        ];
        let items = split_items(&nodes);
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].len(), 2);
        assert_eq!(items[1].len(), 1);
        assert_eq!(items[2].len(), 2);
    }

    #[test]
    fn test_leading_logical_operator_does_not_make_empty_item() {
        let nodes = vec![
            leaf(TokenKind::ReservedLogicalOperator, "OR"),
            leaf(TokenKind::Identifier, "x"),
        ];
        assert_eq!(split_items(&nodes).len(), 1);
    }

    #[test]
    fn test_must_break() {
        assert!(must_break(&[leaf(TokenKind::LineComment, "-- x")]));
        assert!(!must_break(&[leaf(TokenKind::BlockComment, "/* x */")]));
        assert!(must_break(&[leaf(TokenKind::BlockComment, "/* x\n */")]));
    }
}
