//! Structured search expression and query-string codec.

use std::fmt;

use serde::Serialize;

/// A parsed search expression.
///
/// Pure value type: created by the parser, consumed by the codec or the
/// simplifier, never mutated in between. The fields are flat, ordered lists
/// of strings so embedding callers can marshal them without restructuring.
///
/// Together, `required_terms`, `excluded_terms`, and `complex_fragment`
/// reconstruct a query logically equivalent to the input's AND/NOT/OR and
/// grouping structure; quoted phrases are stored with their quotes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SearchExpression {
    /// Terms bound by `+`, plus bare terms outside any OR-chain
    /// (implicit AND). Phrases keep their quote marks.
    pub required_terms: Vec<String>,

    /// Terms bound by `-`.
    pub excluded_terms: Vec<String>,

    /// Reserved for terms outside AND/NOT/complex. Always empty under the
    /// current grammar; kept for backward-compatible consumers.
    pub optional_terms: Vec<String>,

    /// Verbatim reconstruction of OR-chains and parenthesized groups, in
    /// encounter order, space-joined. Empty when the expression has
    /// neither.
    pub complex_fragment: String,
}

impl SearchExpression {
    /// Checks whether the expression carries OR or grouping structure that
    /// the simplified projection would lose.
    pub fn has_complex(&self) -> bool {
        if !self.complex_fragment.is_empty() {
            return true;
        }

        self.required_terms.iter().any(|t| has_or_or_parens(t))
            || self.excluded_terms.iter().any(|t| has_or_or_parens(t))
            || self.optional_terms.iter().any(|t| has_or_or_parens(t))
    }

    /// Renders the backend boolean query string.
    ///
    /// Required terms are joined with `AND`, excluded terms appended as
    /// `NOT term`, and the complex fragment appended in a single pair of
    /// parentheses. `optional_terms` is never rendered.
    pub fn to_query_string(&self) -> String {
        let mut out = self.required_terms.join(" AND ");

        for term in &self.excluded_terms {
            if !out.is_empty() {
                out.push_str(" AND ");
            }
            out.push_str("NOT ");
            out.push_str(term);
        }

        if !self.complex_fragment.is_empty() {
            if !out.is_empty() {
                out.push_str(" AND ");
            }
            if is_parenthesized(&self.complex_fragment) {
                out.push_str(&self.complex_fragment);
            } else {
                out.push('(');
                out.push_str(&self.complex_fragment);
                out.push(')');
            }
        }

        out
    }
}

impl fmt::Display for SearchExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "required: {:?}", self.required_terms)?;
        writeln!(f, "excluded: {:?}", self.excluded_terms)?;
        writeln!(f, "optional: {:?}", self.optional_terms)?;
        write!(f, "complex:  {:?}", self.complex_fragment)
    }
}

/// Checks whether a stored term smuggles OR or grouping syntax.
fn has_or_or_parens(term: &str) -> bool {
    term.contains("OR") || term.contains('(') || term.contains(')')
}

/// Checks whether a fragment is already one balanced parenthesized group,
/// so the codec does not add a second pair.
///
/// Conservative: when unsure (for example parentheses inside phrase
/// quotes), it answers false and the codec wraps, which is always safe.
fn is_parenthesized(fragment: &str) -> bool {
    let bytes = fragment.as_bytes();

    if bytes.first() != Some(&b'(') || bytes.last() != Some(&b')') {
        return false;
    }

    let mut depth = 0i32;
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                // closed before the end, or over-closed
                if depth <= 0 && i + 1 != bytes.len() {
                    return false;
                }
            }
            _ => {}
        }
    }

    depth == 0
}
