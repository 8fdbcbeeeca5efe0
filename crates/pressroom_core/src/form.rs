//! Form-data decoding for the presentation boundary.
//!
//! # Responsibility
//! - Convert raw submitted `(name, value)` text pairs into a typed
//!   [`ArticlePatch`] before any store operation is invoked.
//!
//! # Invariants
//! - Field names are the external camelCase wire names.
//! - An absent field leaves the patch key absent; a present empty value
//!   keeps the key present, which clears the stored field on merge.
//! - Unknown field names are ignored (real posts carry buttons and other
//!   non-model inputs).

use crate::model::article::ArticlePatch;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Decode failure for one submitted form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormDecodeError {
    /// A flag field carried something other than `"true"`/`"false"`.
    InvalidFlag { field: &'static str, value: String },
    /// A numeric field carried a non-numeric value.
    InvalidNumber { field: &'static str, value: String },
}

impl Display for FormDecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFlag { field, value } => {
                write!(f, "field `{field}` expects true|false, got `{value}`")
            }
            Self::InvalidNumber { field, value } => {
                write!(f, "field `{field}` expects a number, got `{value}`")
            }
        }
    }
}

impl Error for FormDecodeError {}

/// Builds an [`ArticlePatch`] from ordered form pairs.
///
/// Later duplicates win, matching browser form semantics.
///
/// # Errors
/// - `InvalidFlag` when `favorite` is neither `"true"` nor `"false"`.
/// - `InvalidNumber` when `index` is present, non-empty and not a `u32`.
pub fn patch_from_form<'a, I>(pairs: I) -> Result<ArticlePatch, FormDecodeError>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut patch = ArticlePatch::default();

    for (name, value) in pairs {
        match name {
            "page" => patch.page = Some(value.to_string()),
            "title" => patch.title = Some(value.to_string()),
            "author" => patch.author = Some(value.to_string()),
            "authorDetails" => patch.author_details = Some(value.to_string()),
            "articleContent" => patch.article_content = Some(value.to_string()),
            "notes" => patch.notes = Some(value.to_string()),
            "articleImage" => patch.article_image = Some(value.to_string()),
            "editionName" => patch.edition_name = Some(value.to_string()),
            "favorite" => patch.favorite = Some(parse_flag("favorite", value)?),
            "index" => {
                // Blank ordinal inputs are treated as not submitted.
                if !value.is_empty() {
                    patch.index =
                        Some(value.parse().map_err(|_| FormDecodeError::InvalidNumber {
                            field: "index",
                            value: value.to_string(),
                        })?);
                }
            }
            _ => {}
        }
    }

    Ok(patch)
}

fn parse_flag(field: &'static str, value: &str) -> Result<bool, FormDecodeError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(FormDecodeError::InvalidFlag {
            field,
            value: other.to_string(),
        }),
    }
}
