//! Lossy projection for callers that cannot express OR or grouping.
//!
//! Legacy callers build their requests from discrete AND/NOT clauses rather
//! than a single query string. This module flattens an expression into that
//! shape, silently dropping any complex fragment.

use serde::Serialize;

use crate::{error::SyntaxError, parser::parse};

/// The flattened main/AND/NOT projection of a search expression.
///
/// Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimplifiedQuery {
    /// The first required term.
    pub main_term: String,

    /// The remaining required terms.
    pub and_terms: Vec<String>,

    /// The excluded terms.
    pub not_terms: Vec<String>,
}

/// Simplifies a search expression to its main/AND/NOT projection.
///
/// Returns `Ok(None)` when the expression has no required terms (for
/// example, only exclusions or only an OR-chain): no main term can be
/// derived, which is an expected outcome, not a syntax error. OR and
/// grouping content is dropped; check
/// [`SearchExpression::has_complex`](crate::SearchExpression::has_complex)
/// first when that loss matters.
pub fn simplify(input: &str) -> Result<Option<SimplifiedQuery>, SyntaxError> {
    let expr = parse(input)?;

    let Some((main_term, and_terms)) = expr.required_terms.split_first() else {
        return Ok(None);
    };

    Ok(Some(SimplifiedQuery {
        main_term: main_term.clone(),
        and_terms: and_terms.to_vec(),
        not_terms: expr.excluded_terms,
    }))
}
