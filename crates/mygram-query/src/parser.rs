//! Expression parser.
//!
//! Parses a token stream into a [`SearchExpression`] using a single-pass
//! loop with one token of lookahead.
//!
//! # Grammar
//!
//! ```text
//! expression → unit*
//! unit       → "+" operand | "-" operand | group | or_chain | TERM | PHRASE
//! operand    → TERM | PHRASE | group
//! or_chain   → (TERM | PHRASE) ("OR" operand)+
//! group      → "(" ... balanced ... ")"
//! ```
//!
//! # Precedence (highest to lowest)
//!
//! 1. Grouping: `(...)`
//! 2. Prefixes: `+` and `-`
//! 3. AND (implicit, between adjacent units)
//! 4. OR (explicit keyword)
//!
//! Terms and phrases land in the expression's required/excluded lists;
//! OR-chains and groups are captured verbatim into the complex fragment,
//! which the codec re-emits for the backend to parse. Phrases are re-quoted
//! and `OR` is re-padded during capture so the fragment stays re-parseable;
//! everything else is concatenated without separators.

use crate::{
    error::SyntaxError,
    expr::SearchExpression,
    lexer::{Token, tokenize},
};

/// Parser over a pre-tokenized expression.
///
/// The cursor is a plain index, so the one-token lookahead used for OR
/// detection is a `get(position + 1)` with nothing to save or restore.
struct Parser {
    /// Token stream to parse.
    tokens: Vec<Token>,
    /// Current position in the token stream.
    position: usize,
}

impl Parser {
    /// Creates a new parser from a token stream.
    fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Parses the token stream into a structured expression.
    fn parse(mut self) -> Result<SearchExpression, SyntaxError> {
        let mut expr = SearchExpression::default();

        while let Some(token) = self.peek().cloned() {
            match token {
                Token::Plus => {
                    self.advance();
                    match self.peek().cloned() {
                        // A required group is AND-bound by the codec anyway,
                        // so it joins the complex fragment.
                        Some(Token::LParen) => {
                            let group = self.capture_group()?;
                            push_fragment(&mut expr.complex_fragment, &group);
                        }
                        Some(unit @ (Token::Term(_) | Token::Phrase(_))) => {
                            self.advance();
                            expr.required_terms.push(rendered(&unit));
                        }
                        _ => return Err(SyntaxError::MissingOperand('+')),
                    }
                }
                Token::Minus => {
                    self.advance();
                    match self.peek().cloned() {
                        // NOT binds the whole group, so it stays on the
                        // exclusion list.
                        Some(Token::LParen) => {
                            let group = self.capture_group()?;
                            expr.excluded_terms.push(group);
                        }
                        Some(unit @ (Token::Term(_) | Token::Phrase(_))) => {
                            self.advance();
                            expr.excluded_terms.push(rendered(&unit));
                        }
                        _ => return Err(SyntaxError::MissingOperand('-')),
                    }
                }
                Token::LParen => {
                    let group = self.capture_group()?;
                    push_fragment(&mut expr.complex_fragment, &group);
                }
                Token::Term(_) | Token::Phrase(_) => {
                    if self.next_is_or() {
                        let chain = self.capture_or_chain(&token)?;
                        push_fragment(&mut expr.complex_fragment, &chain);
                    } else {
                        // implicit AND
                        self.advance();
                        expr.required_terms.push(rendered(&token));
                    }
                }
                Token::Or => return Err(SyntaxError::StrayOr),
                Token::RParen => return Err(SyntaxError::StrayRParen),
            }
        }

        Ok(expr)
    }

    /// Captures an OR-chain verbatim, starting from `first` (the term or
    /// phrase the cursor currently sits on).
    fn capture_or_chain(&mut self, first: &Token) -> Result<String, SyntaxError> {
        let mut out = String::new();

        render_token(first, &mut out);
        self.advance();

        while matches!(self.peek(), Some(Token::Or)) {
            out.push_str(" OR ");
            self.advance();

            match self.peek().cloned() {
                Some(operand @ (Token::Term(_) | Token::Phrase(_))) => {
                    self.advance();
                    render_token(&operand, &mut out);
                }
                Some(Token::LParen) => {
                    let group = self.capture_group()?;
                    out.push_str(&group);
                }
                _ => return Err(SyntaxError::DanglingOr),
            }
        }

        Ok(out)
    }

    /// Captures a balanced parenthesized group verbatim.
    ///
    /// The cursor must sit on the opening `(`; on success it ends past the
    /// matching `)`.
    fn capture_group(&mut self) -> Result<String, SyntaxError> {
        let mut out = String::new();
        let mut depth = 0usize;

        loop {
            let Some(token) = self.peek().cloned() else {
                return Err(SyntaxError::UnbalancedParens);
            };

            match token {
                Token::LParen => depth += 1,
                Token::RParen => depth -= 1,
                _ => {}
            }

            render_token(&token, &mut out);
            self.advance();

            if depth == 0 {
                return Ok(out);
            }
        }
    }

    /// Checks whether the token after the current one is `OR`.
    fn next_is_or(&self) -> bool {
        matches!(self.tokens.get(self.position + 1), Some(Token::Or))
    }

    /// Returns the current token without consuming it.
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    /// Advances to the next token.
    fn advance(&mut self) {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
    }
}

/// Appends the query-text rendering of a single token to `out`.
///
/// Phrases get their quotes re-added and `OR` its padding; all other tokens
/// render as their literal spelling.
fn render_token(token: &Token, out: &mut String) {
    match token {
        Token::Term(text) => out.push_str(text),
        Token::Phrase(text) => {
            out.push('"');
            out.push_str(text);
            out.push('"');
        }
        Token::Or => out.push_str(" OR "),
        Token::Plus => out.push('+'),
        Token::Minus => out.push('-'),
        Token::LParen => out.push('('),
        Token::RParen => out.push(')'),
    }
}

/// Renders a single token to a fresh string.
fn rendered(token: &Token) -> String {
    let mut out = String::new();
    render_token(token, &mut out);
    out
}

/// Appends a captured piece to the complex fragment, space-joined with any
/// earlier piece.
fn push_fragment(fragment: &mut String, piece: &str) {
    if !fragment.is_empty() {
        fragment.push(' ');
    }
    fragment.push_str(piece);
}

/// Parses a web-style search expression into its structured form.
///
/// Returns a [`SyntaxError`] for empty input or malformed syntax; on error
/// no partial expression escapes.
pub fn parse(input: &str) -> Result<SearchExpression, SyntaxError> {
    let tokens = tokenize(input);

    if tokens.is_empty() {
        return Err(SyntaxError::EmptyExpression);
    }

    Parser::new(tokens).parse()
}

/// Parses an expression and renders the backend query string in one call.
pub fn convert(input: &str) -> Result<String, SyntaxError> {
    Ok(parse(input)?.to_query_string())
}
