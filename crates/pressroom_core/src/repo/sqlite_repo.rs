//! SQLite-backed article store.
//!
//! # Responsibility
//! - Implement the store contract over a migrated `articles` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Insertion order is rowid order; updates never reorder a listing.
//! - Read paths reject invalid persisted state instead of masking it.
//! - Filtering goes through the shared query filter, so both backends
//!   narrow listings identically.

use crate::db::migrations::latest_version;
use crate::model::article::{ArticleId, ArticlePatch, ArticleRecord};
use crate::repo::article_repo::{ArticleListQuery, ArticleRepository, RepoError, RepoResult};
use crate::search::filter::filter_articles;
use rusqlite::{params, Connection, OptionalExtension, Row};
use uuid::Uuid;

const ARTICLE_SELECT_SQL: &str = "SELECT
    id,
    page,
    title,
    author,
    author_details,
    article_content,
    notes,
    article_image,
    favorite,
    edition_name,
    display_index
FROM articles";

/// Article store over a migrated SQLite connection.
#[derive(Debug)]
pub struct SqliteArticleRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteArticleRepository<'conn> {
    /// Constructs a store from a migrated/ready connection.
    ///
    /// # Errors
    /// - `InvalidData` when the connection has not been migrated to the
    ///   schema version this binary expects.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let db_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        if db_version != latest_version() {
            return Err(RepoError::InvalidData(format!(
                "connection schema version {db_version} does not match expected {}; \
                 open it through db::open_db",
                latest_version()
            )));
        }
        Ok(Self { conn })
    }
}

impl ArticleRepository for SqliteArticleRepository<'_> {
    fn create_article(&mut self, record: &ArticleRecord) -> RepoResult<ArticleId> {
        record.validate()?;

        let inserted = self.conn.execute(
            "INSERT OR IGNORE INTO articles (
                id,
                page,
                title,
                author,
                author_details,
                article_content,
                notes,
                article_image,
                favorite,
                edition_name,
                display_index
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11);",
            params![
                record.id.to_string(),
                record.page.as_deref(),
                record.title.as_deref(),
                record.author.as_deref(),
                record.author_details.as_deref(),
                record.article_content.as_deref(),
                record.notes.as_deref(),
                record.article_image.as_deref(),
                bool_to_int(record.favorite),
                record.edition_name.as_deref(),
                record.index.map(i64::from),
            ],
        )?;

        if inserted == 0 {
            return Err(RepoError::InvalidData(format!(
                "duplicate article id {}",
                record.id
            )));
        }

        Ok(record.id)
    }

    fn get_article(&self, id: ArticleId) -> RepoResult<Option<ArticleRecord>> {
        let record = self
            .conn
            .query_row(
                &format!("{ARTICLE_SELECT_SQL} WHERE id = ?1;"),
                [id.to_string()],
                |row| Ok(parse_article_row(row)),
            )
            .optional()?
            .transpose()?;
        Ok(record)
    }

    fn list_articles(&self, query: &ArticleListQuery) -> RepoResult<Vec<ArticleRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ARTICLE_SELECT_SQL} ORDER BY rowid ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(parse_article_row(row)?);
        }

        if let Some(edition) = &query.edition {
            records.retain(|record| record.edition_name.as_deref() == Some(edition.as_str()));
        }

        Ok(filter_articles(records, query.text.as_deref()))
    }

    fn update_article(
        &mut self,
        id: ArticleId,
        patch: &ArticlePatch,
    ) -> RepoResult<ArticleRecord> {
        let mut merged = self
            .get_article(id)?
            .ok_or(RepoError::NotFound(id))?;
        patch.apply_to(&mut merged);
        merged.validate()?;

        let changed = self.conn.execute(
            "UPDATE articles
             SET
                page = ?1,
                title = ?2,
                author = ?3,
                author_details = ?4,
                article_content = ?5,
                notes = ?6,
                article_image = ?7,
                favorite = ?8,
                edition_name = ?9,
                display_index = ?10,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?11;",
            params![
                merged.page.as_deref(),
                merged.title.as_deref(),
                merged.author.as_deref(),
                merged.author_details.as_deref(),
                merged.article_content.as_deref(),
                merged.notes.as_deref(),
                merged.article_image.as_deref(),
                bool_to_int(merged.favorite),
                merged.edition_name.as_deref(),
                merged.index.map(i64::from),
                merged.id.to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(merged)
    }

    fn delete_article(&mut self, id: ArticleId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM articles WHERE id = ?1;", [id.to_string()])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn parse_article_row(row: &Row<'_>) -> RepoResult<ArticleRecord> {
    let id_text: String = row.get("id")?;
    let id = Uuid::parse_str(&id_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{id_text}` in articles.id"))
    })?;

    let favorite = match row.get::<_, i64>("favorite")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid favorite value `{other}` in articles.favorite"
            )));
        }
    };

    let index = match row.get::<_, Option<i64>>("display_index")? {
        Some(value) => Some(u32::try_from(value).map_err(|_| {
            RepoError::InvalidData(format!(
                "invalid display_index value `{value}` in articles.display_index"
            ))
        })?),
        None => None,
    };

    let record = ArticleRecord {
        id,
        page: row.get("page")?,
        title: row.get("title")?,
        author: row.get("author")?,
        author_details: row.get("author_details")?,
        article_content: row.get("article_content")?,
        notes: row.get("notes")?,
        article_image: row.get("article_image")?,
        favorite,
        edition_name: row.get("edition_name")?,
        index,
    };
    record.validate()?;
    Ok(record)
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
