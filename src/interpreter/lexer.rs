use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// `POLY`, opening a polynomial declaration.
    #[token("POLY")]
    Poly,
    /// `START`, opening the statement section.
    #[token("START")]
    Start,
    /// `INPUT`, reading a value into a variable.
    #[token("INPUT")]
    Input,
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Number(i64),
    /// Identifier tokens; polynomial, parameter or variable names such as
    /// `F` or `x1`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `=`
    #[token("=")]
    Equals,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `^`
    #[token("^")]
    Caret,

    /// Line breaks; counted for error reporting, then skipped.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// Automatically increments as newlines are processed.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the token slice is not a valid integer.
fn parse_integer(lex: &mut logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
