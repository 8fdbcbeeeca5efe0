//! CLI smoke entry point.
//!
//! # Responsibility
//! - Exercise `pressroom_core` end to end without any real frontend.
//! - Keep output deterministic for quick local sanity checks.

use pressroom_core::{
    patch_from_form, ArticleListQuery, ArticlePatch, ArticleService, MemoryArticleRepository,
};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("pressroom_core version={}", pressroom_core::core_version());

    let mut service = ArticleService::new(MemoryArticleRepository::new());

    let first = service.create_empty_article()?;
    service.update_article(
        first.id,
        &ArticlePatch {
            page: Some("wintergarten".to_string()),
            title: Some("Der Wintergarten".to_string()),
            author: Some("E. Berger".to_string()),
            edition_name: Some("Herbstausgabe".to_string()),
            index: Some(1),
            ..ArticlePatch::default()
        },
    )?;

    let second = service.create_empty_article()?;
    service.update_article(
        second.id,
        &ArticlePatch {
            page: Some("stadtrand".to_string()),
            title: Some("Am Stadtrand".to_string()),
            author: Some("M. Keller".to_string()),
            edition_name: Some("Herbstausgabe".to_string()),
            index: Some(2),
            ..ArticlePatch::default()
        },
    )?;

    // The star button posts favorite=true as text; decode it like the
    // presentation layer would.
    let patch = patch_from_form([("favorite", "true")])?;
    service.update_article(first.id, &patch)?;

    let all = service.list_articles(&ArticleListQuery::default())?;
    println!("articles={}", all.len());
    for article in &all {
        println!(
            "page={} title={} favorite={}",
            article.page.as_deref().unwrap_or("-"),
            article.title.as_deref().unwrap_or("-"),
            article.favorite
        );
    }

    let hits = service.list_articles(&ArticleListQuery::with_text("stadt"))?;
    println!("query=stadt hits={}", hits.len());

    service.delete_article(second.id)?;
    let remaining = service.list_articles(&ArticleListQuery::default())?;
    println!("after_delete={}", remaining.len());

    Ok(())
}
