//! Attachment ID list cleaning.
//!
//! Authors type ID lists by hand (`"5, 3,9"`), so everything that is not a
//! digit or a comma separator is stripped before splitting.

/// Strips every character except ASCII digits and commas.
///
/// Note that whitespace between digits is removed too, so `"1 2"` becomes
/// `"12"`.
pub fn clean_id_list(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',')
        .collect()
}

/// Cleans and parses an ID list, keeping the literal order.
///
/// Empty segments and values that overflow `i64` are dropped. Duplicates are
/// kept; deduplication happens later in sequencing.
pub fn parse_id_list(input: &str) -> Vec<i64> {
    clean_id_list(input)
        .split(',')
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse().ok())
        .collect()
}
