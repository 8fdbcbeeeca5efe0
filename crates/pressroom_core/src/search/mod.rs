//! Free-text narrowing of article listings.
//!
//! # Responsibility
//! - Expose the single query predicate used by every store backend.
//! - Keep filter semantics identical regardless of where records live.

pub mod filter;
