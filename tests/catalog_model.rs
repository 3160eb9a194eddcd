use catalog_cli::factory::{create_article, get_or_create_author, get_or_create_category};
use catalog_cli::{Author, Catalog, Category};
use std::collections::HashMap;

#[test]
fn repeated_email_keeps_first_name() {
    let mut authors = HashMap::new();
    for name in ["Ana", "Ana Maria", "A."] {
        get_or_create_author(name, "ana@x.com", &mut authors);
    }

    assert_eq!(authors.len(), 1);
    let author = &authors["ana@x.com"];
    assert_eq!(author.name(), "Ana");
    assert_eq!(author.email(), "ana@x.com");
}

#[test]
fn category_lookup_reuses_instance() {
    let mut categories = HashMap::new();
    get_or_create_category("Tech", &mut categories);
    get_or_create_category("Tech", &mut categories);
    get_or_create_category("Life", &mut categories);

    assert_eq!(categories.len(), 2);
}

#[test]
fn articles_register_with_owners_in_order() {
    let mut catalog = Catalog::new();
    let first = catalog.add_article("Ana", "ana@x.com", "Tech", "One", "1", true);
    let second = catalog.add_article("Ana", "ana@x.com", "Life", "Two", "2", true);
    let third = catalog.add_article("Bia", "bia@x.com", "Tech", "Three", "3", false);

    assert_eq!(catalog.author("ana@x.com").unwrap().articles(), &[first, second]);
    assert_eq!(catalog.author("bia@x.com").unwrap().articles(), &[third]);
    assert_eq!(catalog.category("Tech").unwrap().articles(), &[first, third]);
    assert_eq!(catalog.category("Life").unwrap().articles(), &[second]);

    let titles: Vec<_> = catalog
        .articles_by_category("Tech")
        .iter()
        .map(|a| a.title())
        .collect();
    assert_eq!(titles, vec!["One", "Three"]);
}

#[test]
fn identical_input_creates_distinct_articles() {
    let mut catalog = Catalog::new();
    let a = catalog.add_article("Ana", "ana@x.com", "Tech", "Hello", "World", true);
    let b = catalog.add_article("Ana", "ana@x.com", "Tech", "Hello", "World", true);

    assert_ne!(a, b);
    assert_eq!(catalog.articles().count(), 2);
    assert_eq!(catalog.articles_by_author("ana@x.com").len(), 2);
}

#[test]
fn publish_sets_timestamp_and_draft_has_none() {
    let mut author = Author::new("Ana", "ana@x.com");
    let mut category = Category::new("Tech");
    let mut articles = Vec::new();

    let published = create_article("P", "c", &mut author, &mut category, &mut articles, true);
    let draft = create_article("D", "c", &mut author, &mut category, &mut articles, false);

    assert!(articles[published.index()].published_at().is_some());
    assert!(articles[draft.index()].published_at().is_none());
    assert_eq!(articles[draft.index()].published_at_display(), None);

    articles[draft.index()].publish();
    assert!(articles[draft.index()].is_published());
}

#[test]
fn edit_replaces_title_and_content() {
    let mut catalog = Catalog::new();
    let id = catalog.add_article("Ana", "ana@x.com", "Tech", "Old", "old body", false);

    catalog.article_mut(id).unwrap().edit("", "new body");

    let article = catalog.article(id).unwrap();
    assert_eq!(article.title(), "");
    assert_eq!(article.content(), "new body");
    assert_eq!(article.author(), "ana@x.com");
}

#[test]
fn display_forms() {
    let mut catalog = Catalog::new();
    let id = catalog.add_article("Ana", "ana@x.com", "Tech", "Hello", "World", false);

    assert_eq!(
        catalog.author("ana@x.com").unwrap().to_string(),
        "Author: Ana (ana@x.com)"
    );
    assert_eq!(catalog.category("Tech").unwrap().to_string(), "Category: Tech");
    assert_eq!(
        catalog.describe_article(id).unwrap(),
        "Article: Hello by Ana in Tech (Draft)"
    );

    catalog.article_mut(id).unwrap().publish();
    let published = catalog.describe_article(id).unwrap();
    assert!(published.starts_with("Article: Hello by Ana in Tech (Published: "));
}
