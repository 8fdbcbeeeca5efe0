//! Article domain model.
//!
//! # Responsibility
//! - Define the canonical record rendered by list, thumbnail and detail views.
//! - Provide the patch type and merge semantics for partial updates.
//!
//! # Invariants
//! - `id` is stable, unique and never nil.
//! - `page`, when set, is a routing slug matching `^[a-z0-9][a-z0-9-]*$`.
//! - Optional text fields hold `None` for blank; patches normalize the
//!   empty string to `None` so "cleared" and "blank" are the same state.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for an article record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ArticleId = Uuid;

static PAGE_SLUG: Lazy<Regex> =
    Lazy::new(|| Regex::new("^[a-z0-9][a-z0-9-]*$").expect("slug pattern must compile"));

/// Validation failure for a record heading to or coming from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleValidationError {
    /// The nil UUID is reserved and never a valid article id.
    NilId,
    /// `page` is present but not a usable routing slug.
    InvalidPageSlug { slug: String },
}

impl Display for ArticleValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "article id must not be the nil uuid"),
            Self::InvalidPageSlug { slug } => write!(
                f,
                "page slug `{slug}` must match ^[a-z0-9][a-z0-9-]*$"
            ),
        }
    }
}

impl Error for ArticleValidationError {}

/// Canonical article record.
///
/// Serialized with camelCase field names to match the external schema
/// consumed by the presentation layer (`articleImage`, `authorDetails`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRecord {
    /// Stable global id used for routing and favorite toggling.
    pub id: ArticleId,
    /// Routing slug, doubles as the page label in the edition strip.
    pub page: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub author_details: Option<String>,
    pub article_content: Option<String>,
    pub notes: Option<String>,
    /// Reference (URL or path) to the thumbnail/detail image asset.
    pub article_image: Option<String>,
    /// Mutable reader flag. Defaults to `false` on creation.
    pub favorite: bool,
    /// Display grouping; every record belongs to one logical edition.
    pub edition_name: Option<String>,
    /// Display ordinal within the edition strip.
    pub index: Option<u32>,
}

impl ArticleRecord {
    /// Creates an empty record with a fresh unique id.
    ///
    /// All optional fields start as `None` and `favorite` as `false`.
    pub fn empty() -> Self {
        Self {
            id: Uuid::new_v4(),
            page: None,
            title: None,
            author: None,
            author_details: None,
            article_content: None,
            notes: None,
            article_image: None,
            favorite: false,
            edition_name: None,
            index: None,
        }
    }

    /// Creates an empty record with a caller-provided stable id.
    ///
    /// Used by import paths and fixtures where identity already exists.
    pub fn empty_with_id(id: ArticleId) -> Result<Self, ArticleValidationError> {
        if id.is_nil() {
            return Err(ArticleValidationError::NilId);
        }
        let mut record = Self::empty();
        record.id = id;
        Ok(record)
    }

    /// Checks record-level invariants.
    ///
    /// # Errors
    /// - `NilId` when the id is the nil uuid.
    /// - `InvalidPageSlug` when `page` is set but not slug-shaped.
    pub fn validate(&self) -> Result<(), ArticleValidationError> {
        if self.id.is_nil() {
            return Err(ArticleValidationError::NilId);
        }
        if let Some(page) = &self.page {
            if !PAGE_SLUG.is_match(page) {
                return Err(ArticleValidationError::InvalidPageSlug {
                    slug: page.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Partial update for one article record.
///
/// A present field overwrites the stored value; an absent field leaves it
/// untouched. For text fields an explicitly present empty string clears
/// the stored value to `None`, so untouched fields can never be erased by
/// accident while deliberate clearing stays possible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticlePatch {
    pub page: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub author_details: Option<String>,
    pub article_content: Option<String>,
    pub notes: Option<String>,
    pub article_image: Option<String>,
    pub favorite: Option<bool>,
    pub edition_name: Option<String>,
    pub index: Option<u32>,
}

impl ArticlePatch {
    /// Returns a patch carrying only the favorite flag.
    pub fn favorite(value: bool) -> Self {
        Self {
            favorite: Some(value),
            ..Self::default()
        }
    }

    /// Returns whether the patch carries no fields at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merges this patch into `record`.
    ///
    /// Applying the same patch twice yields the same record as applying it
    /// once. The caller validates the merged record before committing.
    pub fn apply_to(&self, record: &mut ArticleRecord) {
        merge_text(&self.page, &mut record.page);
        merge_text(&self.title, &mut record.title);
        merge_text(&self.author, &mut record.author);
        merge_text(&self.author_details, &mut record.author_details);
        merge_text(&self.article_content, &mut record.article_content);
        merge_text(&self.notes, &mut record.notes);
        merge_text(&self.article_image, &mut record.article_image);
        if let Some(favorite) = self.favorite {
            record.favorite = favorite;
        }
        merge_text(&self.edition_name, &mut record.edition_name);
        if let Some(index) = self.index {
            record.index = Some(index);
        }
    }
}

fn merge_text(patch_value: &Option<String>, target: &mut Option<String>) {
    match patch_value {
        None => {}
        Some(value) if value.is_empty() => *target = None,
        Some(value) => *target = Some(value.clone()),
    }
}
