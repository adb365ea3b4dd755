use crate::error::Result;
use crate::index::Term;
use crate::rank::Query;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SEPARATORS: Regex = Regex::new(r"[\s,]+").expect("valid regex");
}

/// Split text on runs of whitespace and/or commas and lower-case every piece.
/// Empty pieces left by leading or trailing separators are skipped.
pub fn tokenize(text: &str) -> Vec<Term> {
    SEPARATORS
        .split(text)
        .filter(|piece| !piece.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Tokenize a raw query string. Fails with `EmptyQuery` when nothing is left.
pub fn parse_query(raw: &str) -> Result<Query> {
    Query::new(tokenize(raw))
}
