//! Article store contracts and backend implementations.
//!
//! # Responsibility
//! - Define the data-access contract consumed by the presentation layer.
//! - Keep backend details (owned collection vs. SQLite) behind one trait.
//!
//! # Invariants
//! - Write paths enforce `ArticleRecord::validate()` before committing.
//! - Store APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod article_repo;
pub mod sqlite_repo;
