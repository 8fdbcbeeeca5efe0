//! Core domain logic for Pressroom, a server-rendered article browser.
//! This crate is the single source of truth for the article collection
//! and its invariants; presentation layers stay outside.

pub mod db;
pub mod form;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use form::{patch_from_form, FormDecodeError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::article::{
    ArticleId, ArticlePatch, ArticleRecord, ArticleValidationError,
};
pub use repo::article_repo::{
    ArticleListQuery, ArticleRepository, MemoryArticleRepository, RepoError, RepoResult,
};
pub use repo::sqlite_repo::SqliteArticleRepository;
pub use search::filter::{filter_articles, matches_query};
pub use service::article_service::ArticleService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
