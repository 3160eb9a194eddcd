// Entity model: authors, categories and articles held in memory.
// Articles live in a single arena (`Catalog::articles`) and owners keep
// `ArticleId`s into it, so there are no mutual references between entities.

use chrono::{Local, NaiveDateTime};
use std::collections::HashMap;
use std::fmt;

use crate::store::TIMESTAMP_FORMAT;

/// Position of an article inside the catalog arena. Ids are never reused
/// because articles are never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleId(pub(crate) usize);

impl ArticleId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// An author, identified by email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    name: String,
    email: String,
    articles: Vec<ArticleId>,
}

impl Author {
    pub fn new(name: &str, email: &str) -> Self {
        Author {
            name: name.to_string(),
            email: email.to_string(),
            articles: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Articles written by this author, in creation order.
    pub fn articles(&self) -> &[ArticleId] {
        &self.articles
    }

    pub(crate) fn add_article(&mut self, id: ArticleId) {
        self.articles.push(id);
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Author: {} ({})", self.name, self.email)
    }
}

/// A category, identified by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    articles: Vec<ArticleId>,
}

impl Category {
    pub fn new(name: &str) -> Self {
        Category {
            name: name.to_string(),
            articles: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn articles(&self) -> &[ArticleId] {
        &self.articles
    }

    pub(crate) fn add_article(&mut self, id: ArticleId) {
        self.articles.push(id);
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Category: {}", self.name)
    }
}

/// An article. `author` and `category` hold the dedup keys (email and
/// category name) of the owning entities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    title: String,
    content: String,
    author: String,
    category: String,
    published_at: Option<NaiveDateTime>,
}

impl Article {
    /// Builds a draft. Registration into the owners' lists is done by
    /// `factory::create_article`, which also assigns the arena slot.
    pub(crate) fn draft(title: &str, content: &str, author: &Author, category: &Category) -> Self {
        Article {
            title: title.to_string(),
            content: content.to_string(),
            author: author.email().to_string(),
            category: category.name().to_string(),
            published_at: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Email of the author.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Name of the category.
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn published_at(&self) -> Option<NaiveDateTime> {
        self.published_at
    }

    pub fn is_published(&self) -> bool {
        self.published_at.is_some()
    }

    /// Replaces title and content unconditionally.
    pub fn edit(&mut self, new_title: &str, new_content: &str) {
        self.title = new_title.to_string();
        self.content = new_content.to_string();
    }

    /// Stamps the article with the current local time, replacing any
    /// earlier stamp.
    pub fn publish(&mut self) {
        self.published_at = Some(Local::now().naive_local());
    }

    pub(crate) fn set_published_at(&mut self, at: Option<NaiveDateTime>) {
        self.published_at = at;
    }

    /// Publication time in the persisted `YYYY-MM-DD HH:MM:SS` form.
    pub fn published_at_display(&self) -> Option<String> {
        self.published_at
            .map(|at| at.format(TIMESTAMP_FORMAT).to_string())
    }
}

/// In-memory snapshot of the whole catalog.
///
/// `authors` and `categories` hold only entities listed in the database
/// file and are the maps the factory dedups against. Owners that articles
/// reference but the file never lists go to the `unlisted_*` maps, so a
/// later add with the same key still creates a proper entity.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    pub(crate) authors: HashMap<String, Author>,
    pub(crate) categories: HashMap<String, Category>,
    pub(crate) unlisted_authors: HashMap<String, Author>,
    pub(crate) unlisted_categories: HashMap<String, Category>,
    pub(crate) articles: Vec<Article>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn article(&self, id: ArticleId) -> Option<&Article> {
        self.articles.get(id.0)
    }

    pub fn article_mut(&mut self, id: ArticleId) -> Option<&mut Article> {
        self.articles.get_mut(id.0)
    }

    pub fn articles(&self) -> impl Iterator<Item = (ArticleId, &Article)> {
        self.articles
            .iter()
            .enumerate()
            .map(|(i, a)| (ArticleId(i), a))
    }

    /// Listed authors, in no particular order.
    pub fn authors(&self) -> impl Iterator<Item = &Author> {
        self.authors.values()
    }

    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }

    /// Looks up an author by email, listed ones first.
    pub fn author(&self, email: &str) -> Option<&Author> {
        self.authors
            .get(email)
            .or_else(|| self.unlisted_authors.get(email))
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories
            .get(name)
            .or_else(|| self.unlisted_categories.get(name))
    }

    /// Whether `email` is only known from an article reference.
    pub fn is_unlisted_author(&self, email: &str) -> bool {
        !self.authors.contains_key(email) && self.unlisted_authors.contains_key(email)
    }

    pub fn articles_by_author(&self, email: &str) -> Vec<&Article> {
        self.resolve(self.author(email).map(Author::articles))
    }

    pub fn articles_by_category(&self, name: &str) -> Vec<&Article> {
        self.resolve(self.category(name).map(Category::articles))
    }

    fn resolve(&self, ids: Option<&[ArticleId]>) -> Vec<&Article> {
        ids.unwrap_or_default()
            .iter()
            .filter_map(|id| self.article(*id))
            .collect()
    }

    /// One-line summary such as `Article: Hello by Ana in Tech (Draft)`.
    pub fn describe_article(&self, id: ArticleId) -> Option<String> {
        let article = self.article(id)?;
        let author = self
            .author(article.author())
            .map(Author::name)
            .unwrap_or(article.author());
        let status = match article.published_at_display() {
            Some(at) => format!(" (Published: {})", at),
            None => " (Draft)".to_string(),
        };
        Some(format!(
            "Article: {} by {} in {}{}",
            article.title(),
            author,
            article.category(),
            status
        ))
    }
}
