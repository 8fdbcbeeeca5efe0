use pressroom_core::{ArticlePatch, ArticleRecord, ArticleValidationError};
use uuid::Uuid;

#[test]
fn empty_record_sets_defaults() {
    let record = ArticleRecord::empty();

    assert!(!record.id.is_nil());
    assert_eq!(record.page, None);
    assert_eq!(record.title, None);
    assert_eq!(record.author, None);
    assert_eq!(record.author_details, None);
    assert_eq!(record.article_content, None);
    assert_eq!(record.notes, None);
    assert_eq!(record.article_image, None);
    assert!(!record.favorite);
    assert_eq!(record.edition_name, None);
    assert_eq!(record.index, None);
}

#[test]
fn empty_with_id_rejects_nil_uuid() {
    let err = ArticleRecord::empty_with_id(Uuid::nil()).unwrap_err();
    assert_eq!(err, ArticleValidationError::NilId);
}

#[test]
fn validate_rejects_bad_page_slug() {
    let mut record = ArticleRecord::empty();
    record.page = Some("Seite Eins".to_string());

    let err = record.validate().unwrap_err();
    assert_eq!(
        err,
        ArticleValidationError::InvalidPageSlug {
            slug: "Seite Eins".to_string(),
        }
    );

    record.page = Some("seite-1".to_string());
    record.validate().unwrap();
}

#[test]
fn patch_overwrites_present_fields_only() {
    let mut record = ArticleRecord::empty();
    record.title = Some("A".to_string());
    record.author = Some("B".to_string());

    let patch = ArticlePatch {
        favorite: Some(true),
        ..ArticlePatch::default()
    };
    patch.apply_to(&mut record);

    assert!(record.favorite);
    assert_eq!(record.title.as_deref(), Some("A"));
    assert_eq!(record.author.as_deref(), Some("B"));
}

#[test]
fn patch_application_is_idempotent() {
    let mut once = ArticleRecord::empty();
    let mut twice = once.clone();

    let patch = ArticlePatch {
        title: Some("Titel".to_string()),
        favorite: Some(true),
        index: Some(3),
        ..ArticlePatch::default()
    };

    patch.apply_to(&mut once);
    patch.apply_to(&mut twice);
    patch.apply_to(&mut twice);

    assert_eq!(once, twice);
}

#[test]
fn empty_string_in_patch_clears_the_field() {
    let mut record = ArticleRecord::empty();
    record.notes = Some("draft notes".to_string());

    let patch = ArticlePatch {
        notes: Some(String::new()),
        ..ArticlePatch::default()
    };
    patch.apply_to(&mut record);

    assert_eq!(record.notes, None);
}

#[test]
fn serialization_uses_camel_case_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut record = ArticleRecord::empty_with_id(id).unwrap();
    record.page = Some("wintergarten".to_string());
    record.author_details = Some("writes from Vienna".to_string());
    record.article_content = Some("Es war einmal ...".to_string());
    record.article_image = Some("images/wintergarten.webp".to_string());
    record.edition_name = Some("Herbstausgabe".to_string());
    record.favorite = true;
    record.index = Some(4);

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["page"], "wintergarten");
    assert_eq!(json["authorDetails"], "writes from Vienna");
    assert_eq!(json["articleContent"], "Es war einmal ...");
    assert_eq!(json["articleImage"], "images/wintergarten.webp");
    assert_eq!(json["editionName"], "Herbstausgabe");
    assert_eq!(json["favorite"], true);
    assert_eq!(json["index"], 4);

    let decoded: ArticleRecord = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, record);
}
