//! Lexer for position strings and fallback orders using logos
//!
//! Positions are written `direction[-alignment]` in long or one-letter form
//! (`bottom-start`, `b-s`, `bs`). Fallback orders are runs of one-letter
//! codes (`tbrl`, `sme`).

use logos::Logos;

use crate::error::Span;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t]+")]
pub enum Token {
    // Directions
    #[token("top")]
    #[token("t")]
    Top,
    #[token("bottom")]
    #[token("b")]
    Bottom,
    #[token("left")]
    #[token("l")]
    Left,
    #[token("right")]
    #[token("r")]
    Right,

    // Alignments
    #[token("start")]
    #[token("s")]
    Start,
    #[token("middle")]
    #[token("m")]
    Middle,
    #[token("end")]
    #[token("e")]
    End,

    #[token("-")]
    Dash,
}

/// Lex input into tokens with spans
///
/// Returns the span of the first unrecognized character on failure.
pub fn lex(input: &str) -> Result<Vec<(Token, Span)>, Span> {
    Token::lexer(input)
        .spanned()
        .map(|(tok, span)| tok.map(|t| (t, span.clone())).map_err(|_| span))
        .collect()
}
