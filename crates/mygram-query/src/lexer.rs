//! Expression lexer (tokenizer).
//!
//! Converts a search expression string into a flat token stream for the
//! parser. Tokenization never fails: an unterminated quoted phrase yields
//! whatever content was accumulated, matching the lenient behavior callers
//! depend on.

/// The full-width space (U+3000), common in CJK input. Treated as a token
/// separator alongside ASCII whitespace.
const FULL_WIDTH_SPACE: char = '\u{3000}';

/// A token in the search expression language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A bare search term.
    Term(String),

    /// A quoted phrase (quotes stripped, content preserved verbatim).
    Phrase(String),

    /// Required-term prefix (+).
    Plus,

    /// Excluded-term prefix (-).
    Minus,

    /// The OR keyword (uppercase, whole word only).
    Or,

    /// Left parenthesis.
    LParen,

    /// Right parenthesis.
    RParen,
}

/// Tokenizes a search expression string.
struct Lexer<'a> {
    /// The input string.
    input: &'a str,
    /// Current byte position in input.
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Tokenizes the entire input.
    fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        while let Some(token) = self.next_token() {
            tokens.push(token);
        }

        tokens
    }

    /// Returns the next token, or None at end of input.
    fn next_token(&mut self) -> Option<Token> {
        self.skip_separators();

        let ch = self.peek()?;

        match ch {
            '"' => Some(self.read_phrase()),
            '+' => {
                self.bump(ch);
                Some(Token::Plus)
            }
            '-' => {
                self.bump(ch);
                Some(Token::Minus)
            }
            '(' => {
                self.bump(ch);
                Some(Token::LParen)
            }
            ')' => {
                self.bump(ch);
                Some(Token::RParen)
            }
            _ => {
                if self.at_or_keyword() {
                    self.position += 2;
                    Some(Token::Or)
                } else {
                    Some(self.read_term())
                }
            }
        }
    }

    /// Checks whether the cursor sits on a whole-word `OR` keyword.
    ///
    /// `OR` is only an operator when the bytes on both sides are not
    /// alphanumeric, so `FOREST` and `ORbit` tokenize as plain terms.
    fn at_or_keyword(&self) -> bool {
        if !self.rest().starts_with("OR") {
            return false;
        }
        if self.position > 0 && self.input.as_bytes()[self.position - 1].is_ascii_alphanumeric() {
            return false;
        }
        !matches!(
            self.rest().as_bytes().get(2),
            Some(after) if after.is_ascii_alphanumeric()
        )
    }

    /// Reads a bare term up to the next separator or special character.
    fn read_term(&mut self) -> Token {
        let start = self.position;

        while let Some(ch) = self.peek() {
            if is_separator(ch) || matches!(ch, '+' | '-' | '(' | ')' | '"') {
                break;
            }
            self.bump(ch);
        }

        Token::Term(self.input[start..self.position].to_string())
    }

    /// Reads a quoted phrase.
    ///
    /// A backslash escapes the following character (copied literally,
    /// without the backslash). An unterminated quote returns the content
    /// accumulated so far rather than failing.
    fn read_phrase(&mut self) -> Token {
        self.bump('"'); // opening quote

        let mut content = String::new();

        while let Some(ch) = self.peek() {
            self.bump(ch);
            match ch {
                '"' => return Token::Phrase(content),
                '\\' => {
                    if let Some(escaped) = self.peek() {
                        content.push(escaped);
                        self.bump(escaped);
                    } else {
                        // trailing backslash, kept as-is
                        content.push('\\');
                    }
                }
                _ => content.push(ch),
            }
        }

        Token::Phrase(content)
    }

    /// Skips token separators (ASCII whitespace and U+3000).
    fn skip_separators(&mut self) {
        while let Some(ch) = self.peek() {
            if is_separator(ch) {
                self.bump(ch);
            } else {
                break;
            }
        }
    }

    /// Returns the unconsumed remainder of the input.
    fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }

    /// Returns the current character without consuming it.
    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Advances past the given character.
    fn bump(&mut self, ch: char) {
        self.position += ch.len_utf8();
    }
}

/// Checks whether a character separates tokens.
///
/// Only ASCII whitespace and the full-width space count; other Unicode
/// whitespace is term content.
fn is_separator(ch: char) -> bool {
    ch.is_ascii_whitespace() || ch == FULL_WIDTH_SPACE
}

/// Tokenizes a search expression string.
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        assert_eq!(tokenize(""), vec![]);
    }

    #[test]
    fn whitespace_only() {
        assert_eq!(tokenize("   \t "), vec![]);
    }

    #[test]
    fn single_term() {
        assert_eq!(tokenize("golang"), vec![Token::Term("golang".into())]);
    }

    #[test]
    fn multiple_terms() {
        assert_eq!(
            tokenize("golang tutorial"),
            vec![
                Token::Term("golang".into()),
                Token::Term("tutorial".into())
            ]
        );
    }

    #[test]
    fn prefixes_and_parens() {
        assert_eq!(
            tokenize("+a -b (c)"),
            vec![
                Token::Plus,
                Token::Term("a".into()),
                Token::Minus,
                Token::Term("b".into()),
                Token::LParen,
                Token::Term("c".into()),
                Token::RParen,
            ]
        );
    }

    #[test]
    fn term_stops_at_specials() {
        // A hyphenated word is split: the term rule stops at '-'.
        assert_eq!(
            tokenize("foo-bar"),
            vec![
                Token::Term("foo".into()),
                Token::Minus,
                Token::Term("bar".into())
            ]
        );
    }

    #[test]
    fn quoted_phrase() {
        assert_eq!(
            tokenize("\"machine learning\""),
            vec![Token::Phrase("machine learning".into())]
        );
    }

    #[test]
    fn escaped_quote_inside_phrase() {
        assert_eq!(
            tokenize("\"a\\\"b\""),
            vec![Token::Phrase("a\"b".into())]
        );
    }

    #[test]
    fn unterminated_quote_is_lenient() {
        assert_eq!(tokenize("\"abc"), vec![Token::Phrase("abc".into())]);
    }

    #[test]
    fn trailing_backslash_in_unterminated_quote() {
        assert_eq!(tokenize("\"abc\\"), vec![Token::Phrase("abc\\".into())]);
    }

    #[test]
    fn phrase_keeps_operators_verbatim() {
        assert_eq!(
            tokenize("\"+a -b (c) OR d\""),
            vec![Token::Phrase("+a -b (c) OR d".into())]
        );
    }

    #[test]
    fn or_keyword() {
        assert_eq!(
            tokenize("python OR ruby"),
            vec![
                Token::Term("python".into()),
                Token::Or,
                Token::Term("ruby".into())
            ]
        );
    }

    #[test]
    fn lowercase_or_is_a_term() {
        assert_eq!(
            tokenize("python or ruby"),
            vec![
                Token::Term("python".into()),
                Token::Term("or".into()),
                Token::Term("ruby".into())
            ]
        );
    }

    #[test]
    fn or_inside_word_is_absorbed() {
        assert_eq!(tokenize("FOREST"), vec![Token::Term("FOREST".into())]);
        assert_eq!(tokenize("ORbit"), vec![Token::Term("ORbit".into())]);
        assert_eq!(tokenize("xOR"), vec![Token::Term("xOR".into())]);
    }

    #[test]
    fn or_at_end_of_input() {
        assert_eq!(
            tokenize("a OR"),
            vec![Token::Term("a".into()), Token::Or]
        );
    }

    #[test]
    fn or_next_to_parens() {
        assert_eq!(
            tokenize("(OR)"),
            vec![Token::LParen, Token::Or, Token::RParen]
        );
    }

    #[test]
    fn full_width_space_separates_terms() {
        assert_eq!(
            tokenize("機械学習\u{3000}チュートリアル"),
            vec![
                Token::Term("機械学習".into()),
                Token::Term("チュートリアル".into())
            ]
        );
    }

    #[test]
    fn other_unicode_whitespace_is_term_content() {
        // U+00A0 (no-break space) is not a separator in this grammar.
        assert_eq!(
            tokenize("a\u{00A0}b"),
            vec![Token::Term("a\u{00A0}b".into())]
        );
    }

    #[test]
    fn term_adjacent_to_phrase() {
        assert_eq!(
            tokenize("rust\"async\""),
            vec![Token::Term("rust".into()), Token::Phrase("async".into())]
        );
    }
}
