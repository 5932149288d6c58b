//! Error type for search expression parsing.

use thiserror::Error;

/// A syntax error in a search expression.
///
/// This is the only error the crate produces. On error no partial
/// expression is returned, and every variant is recoverable: the caller can
/// show the message and prompt for a corrected expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// The input contained no tokens at all.
    #[error("empty search expression")]
    EmptyExpression,

    /// A `+` or `-` prefix had no term, phrase, or group after it.
    #[error("expected term after '{0}'")]
    MissingOperand(char),

    /// An `OR` inside a chain had no term, phrase, or group after it.
    #[error("expected term after 'OR'")]
    DanglingOr,

    /// A `(` was never closed before the end of the input.
    #[error("unbalanced parentheses")]
    UnbalancedParens,

    /// An `OR` appeared with no preceding term to chain from.
    #[error("unexpected 'OR' operator")]
    StrayOr,

    /// A `)` appeared without a matching `(`.
    #[error("unexpected ')'")]
    StrayRParen,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_violated_rule() {
        assert_eq!(
            SyntaxError::EmptyExpression.to_string(),
            "empty search expression"
        );
        assert_eq!(
            SyntaxError::MissingOperand('+').to_string(),
            "expected term after '+'"
        );
        assert_eq!(
            SyntaxError::UnbalancedParens.to_string(),
            "unbalanced parentheses"
        );
        assert_eq!(SyntaxError::StrayOr.to_string(), "unexpected 'OR' operator");
    }
}
