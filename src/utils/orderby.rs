//! Whitelist sanitizer for author-supplied `orderby` clauses.
//!
//! The clause ends up as a sort directive for the content repository, so only
//! plain column identifiers with an optional direction are let through.

use regex::Regex;
use std::sync::LazyLock;

/// A bare or back-quoted column identifier.
static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[A-Za-z0-9_]+|`[A-Za-z0-9_]+`)$").expect("valid regex"));

/// The random-order function, alone.
static RANDOM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*RAND\(\s*\)\s*$").expect("valid regex"));

/// Sanitizes an `orderby` clause.
///
/// Accepts either `RAND()` on its own or a comma-separated list of clauses,
/// each made of one or more identifiers, where every identifier may be
/// followed by `ASC` or `DESC`. Whitespace is normalized to single spaces.
///
/// Returns `None` when the clause is rejected; callers fall back to the
/// default ordering.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(sanitize_orderby("title DESC").as_deref(), Some("title DESC"));
/// assert_eq!(sanitize_orderby("menu_order  ID").as_deref(), Some("menu_order ID"));
/// assert_eq!(sanitize_orderby("title; DROP TABLE wp_posts"), None);
/// ```
pub fn sanitize_orderby(raw: &str) -> Option<String> {
    if RANDOM.is_match(raw) {
        return Some("RAND()".to_string());
    }

    let mut clauses = Vec::new();

    for clause in raw.split(',') {
        let mut tokens = Vec::new();
        let mut expect_identifier = true;

        for token in clause.split_whitespace() {
            let is_direction =
                token.eq_ignore_ascii_case("ASC") || token.eq_ignore_ascii_case("DESC");

            if is_direction {
                if expect_identifier {
                    return None;
                }
                tokens.push(token.to_ascii_uppercase());
                expect_identifier = true;
            } else if IDENTIFIER.is_match(token) {
                tokens.push(token.to_string());
                expect_identifier = false;
            } else {
                return None;
            }
        }

        // every clause, including the one after a trailing comma, must name a column
        if tokens.is_empty() {
            return None;
        }

        clauses.push(tokens.join(" "));
    }

    Some(clauses.join(", "))
}
