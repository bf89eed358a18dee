//! Idempotence and token preservation over a fixed corpus.

mod common;
use common::*;

use std::sync::Arc;
use std::thread;

use oxide_sqlfmt_core::{FormatOptions, Indent, KeywordCase, SqlFormatter};

fn option_grid() -> Vec<FormatOptions> {
    let mut grid = Vec::new();
    for indent in [Indent::Spaces(2), Indent::Spaces(8), Indent::Tab] {
        for keyword_case in [KeywordCase::Upper, KeywordCase::Lower, KeywordCase::Preserve] {
            for line_width in [1, 20, 50, 120] {
                grid.push(
                    FormatOptions::default()
                        .with_indent(indent)
                        .with_keyword_case(keyword_case)
                        .with_line_width(line_width),
                );
            }
        }
    }
    grid
}

#[test]
fn corpus_is_idempotent() {
    for options in option_grid() {
        let formatter = generic(options);
        for sql in CORPUS {
            assert_idempotent(&formatter, sql);
        }
    }
}

#[test]
fn corpus_keeps_every_token() {
    for options in option_grid() {
        let formatter = generic(options);
        for sql in CORPUS {
            let out = formatter.format(sql).unwrap();
            assert_eq!(
                signature(&formatter, sql),
                signature(&formatter, &out),
                "Tokens changed.\n  Input:  {sql}\n  Output: {out}"
            );
        }
    }
}

#[test]
fn corpus_tree_covers_every_token() {
    let formatter = generic(FormatOptions::default());
    for sql in CORPUS {
        let tokens = formatter.tokenize(sql).unwrap();
        let statements = formatter.parse(sql).unwrap();
        let from_tree: Vec<_> = statements
            .iter()
            .flat_map(|statement| statement.tokens())
            .cloned()
            .collect();
        assert_eq!(from_tree, tokens, "Token coverage broken for: {sql}");
    }
}

#[test]
fn corpus_output_has_no_trailing_whitespace() {
    for options in option_grid() {
        let formatter = generic(options);
        for sql in CORPUS {
            let out = formatter.format(sql).unwrap();
            assert_eq!(out, out.trim(), "Surrounding whitespace in {out:?}");
            assert!(
                out.lines().all(|line| line == line.trim_end()),
                "Trailing whitespace in {out:?}"
            );
        }
    }
}

#[test]
fn formatter_is_shared_across_threads() {
    let formatter = Arc::new(generic(FormatOptions::default().with_line_width(30)));
    let expected: Vec<String> = CORPUS
        .iter()
        .map(|sql| formatter.format(sql).unwrap())
        .collect();
    let expected = Arc::new(expected);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let formatter: Arc<SqlFormatter> = Arc::clone(&formatter);
            let expected = Arc::clone(&expected);
            thread::spawn(move || {
                for (sql, want) in CORPUS.iter().zip(expected.iter()) {
                    assert_eq!(&formatter.format(sql).unwrap(), want);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
