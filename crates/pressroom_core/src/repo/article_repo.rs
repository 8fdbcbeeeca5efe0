//! Article store contract and the authoritative in-memory backend.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the article collection.
//! - Own the process-wide collection as an explicit value, never as
//!   ambient global state.
//!
//! # Invariants
//! - Listing order is insertion order; updates never reorder.
//! - Callers receive owned copies, never references into the collection.
//! - Patch application is idempotent.

use crate::db::DbError;
use crate::model::article::{ArticleId, ArticlePatch, ArticleRecord, ArticleValidationError};
use crate::search::filter::filter_articles;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Store-level error for article persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ArticleValidationError),
    Db(DbError),
    NotFound(ArticleId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "article not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid article data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<ArticleValidationError> for RepoError {
    fn from(value: ArticleValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Query options for listing articles.
#[derive(Debug, Clone, Default)]
pub struct ArticleListQuery {
    /// Free-text filter; blank or absent returns everything.
    pub text: Option<String>,
    /// Exact edition-name filter.
    pub edition: Option<String>,
}

impl ArticleListQuery {
    /// Builds a free-text query, the shape the search form submits.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }
}

/// Store interface for article CRUD operations.
pub trait ArticleRepository {
    /// Validates and appends one record, returning its stable id.
    fn create_article(&mut self, record: &ArticleRecord) -> RepoResult<ArticleId>;
    /// Looks one record up by id. Absence is `Ok(None)`, not an error;
    /// the presentation layer turns it into a user-facing 404.
    fn get_article(&self, id: ArticleId) -> RepoResult<Option<ArticleRecord>>;
    /// Lists records in insertion order, narrowed by the query options.
    fn list_articles(&self, query: &ArticleListQuery) -> RepoResult<Vec<ArticleRecord>>;
    /// Merges `patch` into the record identified by `id` and returns the
    /// updated copy.
    fn update_article(&mut self, id: ArticleId, patch: &ArticlePatch)
        -> RepoResult<ArticleRecord>;
    /// Removes one record by id.
    fn delete_article(&mut self, id: ArticleId) -> RepoResult<()>;
}

/// In-memory article store.
///
/// The owned, insertion-ordered collection behind the store contract.
/// Mutating operations take `&mut self`; a multi-request deployment wraps
/// the store in a mutex or single-writer queue at the call site.
#[derive(Debug, Default)]
pub struct MemoryArticleRepository {
    articles: Vec<ArticleRecord>,
}

impl MemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored records.
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    fn position(&self, id: ArticleId) -> Option<usize> {
        self.articles.iter().position(|record| record.id == id)
    }
}

impl ArticleRepository for MemoryArticleRepository {
    fn create_article(&mut self, record: &ArticleRecord) -> RepoResult<ArticleId> {
        record.validate()?;
        if self.position(record.id).is_some() {
            return Err(RepoError::InvalidData(format!(
                "duplicate article id {}",
                record.id
            )));
        }
        self.articles.push(record.clone());
        Ok(record.id)
    }

    fn get_article(&self, id: ArticleId) -> RepoResult<Option<ArticleRecord>> {
        Ok(self
            .articles
            .iter()
            .find(|record| record.id == id)
            .cloned())
    }

    fn list_articles(&self, query: &ArticleListQuery) -> RepoResult<Vec<ArticleRecord>> {
        let mut records: Vec<ArticleRecord> = self
            .articles
            .iter()
            .filter(|record| match &query.edition {
                Some(edition) => record.edition_name.as_deref() == Some(edition.as_str()),
                None => true,
            })
            .cloned()
            .collect();
        records = filter_articles(records, query.text.as_deref());
        Ok(records)
    }

    fn update_article(
        &mut self,
        id: ArticleId,
        patch: &ArticlePatch,
    ) -> RepoResult<ArticleRecord> {
        let position = self.position(id).ok_or(RepoError::NotFound(id))?;

        // Merge into a copy first so a validation failure leaves the
        // stored record untouched.
        let mut merged = self.articles[position].clone();
        patch.apply_to(&mut merged);
        merged.validate()?;

        self.articles[position] = merged.clone();
        Ok(merged)
    }

    fn delete_article(&mut self, id: ArticleId) -> RepoResult<()> {
        let position = self.position(id).ok_or(RepoError::NotFound(id))?;
        self.articles.remove(position);
        Ok(())
    }
}
