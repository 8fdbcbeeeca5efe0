use pressroom_core::{
    patch_from_form, ArticleListQuery, ArticlePatch, ArticleRecord, ArticleRepository,
    ArticleService, MemoryArticleRepository, RepoError,
};
use std::collections::HashSet;
use uuid::Uuid;

#[test]
fn create_and_get_roundtrip() {
    let mut repo = MemoryArticleRepository::new();

    let record = ArticleRecord::empty();
    let id = repo.create_article(&record).unwrap();

    let loaded = repo.get_article(id).unwrap().unwrap();
    assert_eq!(loaded, record);
}

#[test]
fn created_ids_are_unique() {
    let mut service = ArticleService::new(MemoryArticleRepository::new());

    let mut seen = HashSet::new();
    for _ in 0..50 {
        let record = service.create_empty_article().unwrap();
        assert!(!record.id.is_nil());
        assert!(seen.insert(record.id), "id {} repeated", record.id);
    }
}

#[test]
fn get_unknown_id_is_absent_not_error() {
    let repo = MemoryArticleRepository::new();
    let missing = repo.get_article(Uuid::new_v4()).unwrap();
    assert!(missing.is_none());
}

#[test]
fn update_merges_patch_and_returns_updated_copy() {
    let mut repo = MemoryArticleRepository::new();
    let record = ArticleRecord::empty();
    repo.create_article(&record).unwrap();

    let patch = ArticlePatch {
        title: Some("Der Wintergarten".to_string()),
        author: Some("E. Berger".to_string()),
        ..ArticlePatch::default()
    };
    let updated = repo.update_article(record.id, &patch).unwrap();

    assert_eq!(updated.title.as_deref(), Some("Der Wintergarten"));
    assert_eq!(updated.author.as_deref(), Some("E. Berger"));
    assert_eq!(repo.get_article(record.id).unwrap().unwrap(), updated);
}

#[test]
fn favorite_patch_leaves_other_fields_untouched_and_is_idempotent() {
    let mut repo = MemoryArticleRepository::new();
    let mut record = ArticleRecord::empty();
    record.title = Some("A".to_string());
    repo.create_article(&record).unwrap();

    let first = repo
        .update_article(record.id, &ArticlePatch::favorite(true))
        .unwrap();
    let second = repo
        .update_article(record.id, &ArticlePatch::favorite(true))
        .unwrap();

    assert!(first.favorite);
    assert_eq!(first.title.as_deref(), Some("A"));
    assert_eq!(first, second);
}

#[test]
fn update_unknown_id_returns_not_found() {
    let mut repo = MemoryArticleRepository::new();
    let id = Uuid::new_v4();

    let err = repo
        .update_article(id, &ArticlePatch::favorite(true))
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(missing) if missing == id));
}

#[test]
fn failed_validation_leaves_stored_record_untouched() {
    let mut repo = MemoryArticleRepository::new();
    let mut record = ArticleRecord::empty();
    record.title = Some("A".to_string());
    repo.create_article(&record).unwrap();

    let patch = ArticlePatch {
        page: Some("Not A Slug".to_string()),
        title: Some("B".to_string()),
        ..ArticlePatch::default()
    };
    let err = repo.update_article(record.id, &patch).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    let stored = repo.get_article(record.id).unwrap().unwrap();
    assert_eq!(stored.title.as_deref(), Some("A"));
    assert_eq!(stored.page, None);
}

#[test]
fn duplicate_id_insert_is_rejected() {
    let mut repo = MemoryArticleRepository::new();
    let record = ArticleRecord::empty();
    repo.create_article(&record).unwrap();

    let err = repo.create_article(&record).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
    assert_eq!(repo.len(), 1);
}

#[test]
fn delete_removes_record_and_is_not_found_afterwards() {
    let mut repo = MemoryArticleRepository::new();
    let record = ArticleRecord::empty();
    repo.create_article(&record).unwrap();

    repo.delete_article(record.id).unwrap();
    assert!(repo.get_article(record.id).unwrap().is_none());

    let err = repo.delete_article(record.id).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == record.id));
}

#[test]
fn list_preserves_insertion_order_across_updates() {
    let mut repo = MemoryArticleRepository::new();

    let a = fixed_record("00000000-0000-4000-8000-000000000001");
    let b = fixed_record("00000000-0000-4000-8000-000000000002");
    let c = fixed_record("00000000-0000-4000-8000-000000000003");
    repo.create_article(&a).unwrap();
    repo.create_article(&b).unwrap();
    repo.create_article(&c).unwrap();

    repo.update_article(a.id, &ArticlePatch::favorite(true))
        .unwrap();

    let listed = repo.list_articles(&ArticleListQuery::default()).unwrap();
    let ids: Vec<_> = listed.iter().map(|record| record.id).collect();
    assert_eq!(ids, [a.id, b.id, c.id]);
}

#[test]
fn string_form_favorite_is_decoded_then_applied() {
    let mut service = ArticleService::new(MemoryArticleRepository::new());
    let record = service.create_empty_article().unwrap();

    // The star button delivers favorite as text, exactly as submitted.
    let patch = patch_from_form([("favorite", "true")]).unwrap();
    service.update_article(record.id, &patch).unwrap();

    let loaded = service.get_article(record.id).unwrap().unwrap();
    assert!(loaded.favorite);
}

#[test]
fn service_set_favorite_round_trips() {
    let mut service = ArticleService::new(MemoryArticleRepository::new());
    let record = service.create_empty_article().unwrap();

    service.set_favorite(record.id, true).unwrap();
    assert!(service.get_article(record.id).unwrap().unwrap().favorite);

    service.set_favorite(record.id, false).unwrap();
    assert!(!service.get_article(record.id).unwrap().unwrap().favorite);
}

fn fixed_record(id: &str) -> ArticleRecord {
    ArticleRecord::empty_with_id(Uuid::parse_str(id).unwrap()).unwrap()
}
