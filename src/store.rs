// Persistence layer: the catalog is one JSON document on disk, read and
// written as a whole. The file is the source of truth; `Catalog` snapshots
// are rebuilt from it on demand.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::path::Path;

use crate::factory::{create_article, get_or_create_author, get_or_create_category};
use crate::model::{ArticleId, Catalog};

/// File used when no other path is configured.
pub const DEFAULT_DATABASE_FILE: &str = "database.json";

/// Format of `published_at` in the persisted document.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Every record carries `extra`: keys this tool does not know about are
// kept and written back unchanged on save.

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorRecord {
    pub name: String,
    pub email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AuthorRecord {
    pub fn new(name: &str, email: &str) -> Self {
        AuthorRecord {
            name: name.to_string(),
            email: email.to_string(),
            extra: Map::new(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryRecord {
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CategoryRecord {
    pub fn new(name: &str) -> Self {
        CategoryRecord {
            name: name.to_string(),
            extra: Map::new(),
        }
    }
}

/// Persisted article. `author` is the author's email and `category` the
/// category name; `published_at` is `null` for drafts.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleRecord {
    pub title: String,
    pub content: String,
    pub author: String,
    pub category: String,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The whole database file. Missing arrays read as empty.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogDocument {
    #[serde(default)]
    pub authors: Vec<AuthorRecord>,
    #[serde(default)]
    pub categories: Vec<CategoryRecord>,
    #[serde(default)]
    pub articles: Vec<ArticleRecord>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Reads the catalog at `path`. A missing file is an empty catalog; a file
/// that does not parse is an error.
pub fn load(path: &Path) -> Result<CatalogDocument> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            info!("event=load status=missing path={}", path.display());
            return Ok(CatalogDocument::default());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to read {}", path.display()));
        }
    };
    let doc: CatalogDocument = serde_json::from_str(&text)
        .with_context(|| format!("Malformed catalog file {}", path.display()))?;
    info!(
        "event=load status=ok path={} authors={} categories={} articles={}",
        path.display(),
        doc.authors.len(),
        doc.categories.len(),
        doc.articles.len()
    );
    Ok(doc)
}

/// Overwrites `path` with the pretty-printed document (4-space indent).
pub fn save(doc: &CatalogDocument, path: &Path) -> Result<()> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    doc.serialize(&mut ser)
        .context("Failed to serialize catalog")?;
    std::fs::write(path, buf).with_context(|| format!("Failed to write {}", path.display()))?;
    info!(
        "event=save status=ok path={} articles={}",
        path.display(),
        doc.articles.len()
    );
    Ok(())
}

impl CatalogDocument {
    /// Rebuilds an in-memory snapshot.
    ///
    /// Only the `authors`/`categories` arrays seed the dedup maps. An article
    /// pointing at a key missing from them is linked to an unlisted entity
    /// named after the key. A `published_at` that does not parse is logged
    /// and the article is treated as a draft; the file itself is untouched.
    pub fn to_catalog(&self) -> Result<Catalog> {
        let mut catalog = Catalog::new();
        for a in &self.authors {
            get_or_create_author(&a.name, &a.email, &mut catalog.authors);
        }
        for c in &self.categories {
            get_or_create_category(&c.name, &mut catalog.categories);
        }
        for (i, rec) in self.articles.iter().enumerate() {
            let published_at = rec.published_at.as_deref().and_then(|s| {
                NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
                    .map_err(|err| {
                        warn!(
                            "event=bad_timestamp article={} value={:?} err={}",
                            i + 1,
                            s,
                            err
                        );
                    })
                    .ok()
            });
            let author = match catalog.authors.get_mut(&rec.author) {
                Some(author) => author,
                None => get_or_create_author(
                    &rec.author,
                    &rec.author,
                    &mut catalog.unlisted_authors,
                ),
            };
            let category = match catalog.categories.get_mut(&rec.category) {
                Some(category) => category,
                None => get_or_create_category(&rec.category, &mut catalog.unlisted_categories),
            };
            let id = create_article(
                &rec.title,
                &rec.content,
                author,
                category,
                &mut catalog.articles,
                false,
            );
            if let Some(article) = catalog.article_mut(id) {
                article.set_published_at(published_at);
            }
        }
        Ok(catalog)
    }

    /// Appends the article `id` of `catalog`, adding its author and category
    /// only when their key is not already in the document.
    pub fn append_article(&mut self, catalog: &Catalog, id: ArticleId) -> Result<()> {
        let article = catalog
            .article(id)
            .with_context(|| format!("No article with id {}", id.index()))?;
        let author = catalog
            .author(article.author())
            .with_context(|| format!("Unknown author {}", article.author()))?;

        if !self.authors.iter().any(|a| a.email == author.email()) {
            self.authors
                .push(AuthorRecord::new(author.name(), author.email()));
        }
        if !self.categories.iter().any(|c| c.name == article.category()) {
            self.categories.push(CategoryRecord::new(article.category()));
        }
        self.articles.push(ArticleRecord {
            title: article.title().to_string(),
            content: article.content().to_string(),
            author: author.email().to_string(),
            category: article.category().to_string(),
            published_at: article.published_at_display(),
            extra: Map::new(),
        });
        Ok(())
    }
}
