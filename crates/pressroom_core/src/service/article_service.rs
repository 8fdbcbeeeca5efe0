//! Article use-case service.
//!
//! # Responsibility
//! - Provide the operation set the presentation layer calls: create an
//!   empty record, read one, list with a query, patch, toggle favorite,
//!   delete.
//! - Delegate storage to a store implementation.
//!
//! # Invariants
//! - Service APIs never bypass store validation contracts.
//! - Service layer remains storage-agnostic.

use crate::model::article::{ArticleId, ArticlePatch, ArticleRecord};
use crate::repo::article_repo::{ArticleListQuery, ArticleRepository, RepoResult};

/// Use-case wrapper around one article store.
pub struct ArticleService<R: ArticleRepository> {
    repo: R,
}

impl<R: ArticleRepository> ArticleService<R> {
    /// Creates a service using the provided store implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Allocates a new record with a fresh id and all fields at their
    /// defaults, appends it to the collection and returns the copy.
    ///
    /// The "New" button path: the caller typically follows up with an
    /// edit form that patches the blanks in.
    pub fn create_empty_article(&mut self) -> RepoResult<ArticleRecord> {
        let record = ArticleRecord::empty();
        self.repo.create_article(&record)?;
        Ok(record)
    }

    /// Gets one article by id. Absence is `Ok(None)`.
    pub fn get_article(&self, id: ArticleId) -> RepoResult<Option<ArticleRecord>> {
        self.repo.get_article(id)
    }

    /// Lists articles in insertion order, narrowed by query options.
    pub fn list_articles(&self, query: &ArticleListQuery) -> RepoResult<Vec<ArticleRecord>> {
        self.repo.list_articles(query)
    }

    /// Merges a patch into one record and returns the updated copy.
    ///
    /// Returns store-level not-found or validation errors unchanged.
    pub fn update_article(
        &mut self,
        id: ArticleId,
        patch: &ArticlePatch,
    ) -> RepoResult<ArticleRecord> {
        self.repo.update_article(id, patch)
    }

    /// Sets the favorite flag, the fast path behind the star button.
    ///
    /// The patch carries only the flag, so no other field can be touched.
    pub fn set_favorite(&mut self, id: ArticleId, favorite: bool) -> RepoResult<ArticleRecord> {
        self.repo.update_article(id, &ArticlePatch::favorite(favorite))
    }

    /// Deletes one article by id.
    pub fn delete_article(&mut self, id: ArticleId) -> RepoResult<()> {
        self.repo.delete_article(id)
    }
}
