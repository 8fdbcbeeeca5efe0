//! Substring query filter over article text attributes.
//!
//! # Responsibility
//! - Decide whether one record matches a free-text query.
//! - Narrow an ordered listing without disturbing its order.
//!
//! # Invariants
//! - Matching is case-insensitive substring, never tokenized or fuzzy.
//! - A blank or absent query is the identity transform.

use crate::model::article::ArticleRecord;

/// Returns whether any text attribute of `record` contains `needle` as a
/// case-insensitive substring.
///
/// An empty `needle` matches every record.
pub fn matches_query(record: &ArticleRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let needle = needle.to_lowercase();
    text_attributes(record)
        .into_iter()
        .flatten()
        .any(|value| value.to_lowercase().contains(&needle))
}

/// Applies the query filter to an ordered listing.
///
/// `None` and blank queries return `records` unchanged; otherwise the
/// ordered subsequence of matching records is returned.
pub fn filter_articles(records: Vec<ArticleRecord>, query: Option<&str>) -> Vec<ArticleRecord> {
    let needle = match query.map(str::trim) {
        None | Some("") => return records,
        Some(needle) => needle,
    };
    records
        .into_iter()
        .filter(|record| matches_query(record, needle))
        .collect()
}

fn text_attributes(record: &ArticleRecord) -> [Option<&str>; 7] {
    [
        record.page.as_deref(),
        record.title.as_deref(),
        record.author.as_deref(),
        record.author_details.as_deref(),
        record.article_content.as_deref(),
        record.notes.as_deref(),
        record.edition_name.as_deref(),
    ]
}
