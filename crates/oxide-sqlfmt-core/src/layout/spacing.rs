//! Spacing between neighbouring nodes on a line.

use crate::ast::AstNode;
use crate::lexer::TokenKind;

/// Returns true if `node` is written directly after its previous sibling.
///
/// `before` holds the siblings preceding `node` in the same sequence.
pub(super) fn is_tight(before: &[AstNode], node: &AstNode) -> bool {
    let Some(prev) = before.last() else {
        return true;
    };

    if node.is_token(TokenKind::Comma) {
        return true;
    }
    if is_glue(node) && !prev.is_token(TokenKind::Number) {
        return true;
    }
    if is_glue(prev) && !node.is_token(TokenKind::Number) {
        return true;
    }

    is_unary(before) && !node.is_token(TokenKind::Operator) && !node.is_comment()
}

/// `.` and `::` bind their neighbours.
fn is_glue(node: &AstNode) -> bool {
    node.is_token_value(TokenKind::Operator, ".") || node.is_token_value(TokenKind::Operator, "::")
}

/// Returns true if the last node of `before` is a prefix `+` or `-`.
fn is_unary(before: &[AstNode]) -> bool {
    let Some((last, rest)) = before.split_last() else {
        return false;
    };
    let sign = last.is_token_value(TokenKind::Operator, "-")
        || last.is_token_value(TokenKind::Operator, "+");
    sign && !rest
        .iter()
        .rev()
        .find(|node| !node.is_comment())
        .is_some_and(AstNode::is_operand)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{Span, Token};

    fn leaf(kind: TokenKind, text: &str) -> AstNode {
        AstNode::Token(Token::new(kind, text, Span::default()))
    }

    fn ident(text: &str) -> AstNode {
        leaf(TokenKind::Identifier, text)
    }

    fn op(text: &str) -> AstNode {
        leaf(TokenKind::Operator, text)
    }

    #[test]
    fn test_comma_is_tight() {
        assert!(is_tight(&[ident("a")], &leaf(TokenKind::Comma, ",")));
        assert!(!is_tight(&[ident("a"), leaf(TokenKind::Comma, ",")], &ident("b")));
    }

    #[test]
    fn test_dot_is_tight_except_next_to_numbers() {
        assert!(is_tight(&[ident("t")], &op(".")));
        assert!(is_tight(&[ident("t"), op(".")], &ident("c")));
        assert!(!is_tight(&[leaf(TokenKind::Number, "1")], &op(".")));
        assert!(!is_tight(&[ident("t"), op(".")], &leaf(TokenKind::Number, "5")));
    }

    #[test]
    fn test_unary_minus() {
        let number = leaf(TokenKind::Number, "1");
        assert!(!is_tight(&[op("=")], &op("-")));
        assert!(is_tight(&[op("="), op("-")], &number));
        assert!(is_tight(&[op("-")], &number));
        assert!(!is_tight(&[ident("a"), op("-")], &number));
        assert!(!is_tight(&[op("-")], &op("-")));
    }

    #[test]
    fn test_unary_minus_keeps_space_before_comment() {
        let comment = leaf(TokenKind::LineComment, "-- x");
        assert!(!is_tight(&[op("-")], &comment));
    }
}
