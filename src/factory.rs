// Factory layer: memoizing constructors keyed by email / category name,
// plus article creation that links the new article into its owners.

use log::debug;
use std::collections::HashMap;

use crate::model::{Article, ArticleId, Author, Catalog, Category};

/// Returns the author stored under `email`, creating it on first use.
///
/// An existing author keeps the name it was created with even when a
/// different `name` is passed here.
pub fn get_or_create_author<'a>(
    name: &str,
    email: &str,
    authors: &'a mut HashMap<String, Author>,
) -> &'a mut Author {
    authors.entry(email.to_string()).or_insert_with(|| {
        debug!("creating author email={}", email);
        Author::new(name, email)
    })
}

/// Returns the category stored under `name`, creating it on first use.
pub fn get_or_create_category<'a>(
    name: &str,
    categories: &'a mut HashMap<String, Category>,
) -> &'a mut Category {
    categories.entry(name.to_string()).or_insert_with(|| {
        debug!("creating category name={}", name);
        Category::new(name)
    })
}

/// Appends a new article to `articles` and registers it with its author and
/// category. Published immediately when `publish` is set. Identical input
/// twice yields two distinct articles.
pub fn create_article(
    title: &str,
    content: &str,
    author: &mut Author,
    category: &mut Category,
    articles: &mut Vec<Article>,
    publish: bool,
) -> ArticleId {
    let mut article = Article::draft(title, content, author, category);
    if publish {
        article.publish();
    }
    let id = ArticleId(articles.len());
    articles.push(article);
    author.add_article(id);
    category.add_article(id);
    id
}

impl Catalog {
    /// Resolves (or creates) the author and category, then creates the
    /// article linked to both.
    pub fn add_article(
        &mut self,
        author_name: &str,
        author_email: &str,
        category_name: &str,
        title: &str,
        content: &str,
        publish: bool,
    ) -> ArticleId {
        let author = get_or_create_author(author_name, author_email, &mut self.authors);
        let category = get_or_create_category(category_name, &mut self.categories);
        create_article(title, content, author, category, &mut self.articles, publish)
    }
}
