pub mod parser;
pub mod token;

use crate::parser::{parse_with_spans, RawToken};
use crate::token::{Token, TokenKind};

/// Primary entry point: Text -> Structured Tokens
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    parse_with_spans(input)
        .into_iter()
        .map(|(span, raw)| {
            let kind = match raw {
                RawToken::Word(_) => TokenKind::Word,
                RawToken::Punct(c) => TokenKind::Punctuation(c),
            };
            Token {
                span,
                text: &input[span.start..span.end],
                kind,
            }
        })
        .collect()
}

/// The surface words of `input`, in order, without punctuation.
pub fn surface_words(input: &str) -> Vec<&str> {
    tokenize(input)
        .into_iter()
        .filter(|token| token.kind == TokenKind::Word)
        .map(|token| token.text)
        .collect()
}
