use catalog_cli::store::{ArticleRecord, AuthorRecord, CatalogDocument, CategoryRecord};
use catalog_cli::ui::{
    render_article_list, render_catalog, render_selection, resolve_selection, Selection,
};

fn two_articles() -> CatalogDocument {
    let article = |title: &str| ArticleRecord {
        title: title.into(),
        content: format!("{} body", title),
        author: "ana@x.com".into(),
        category: "Tech".into(),
        published_at: Some("2024-05-01 10:20:30".into()),
        ..Default::default()
    };
    CatalogDocument {
        authors: vec![AuthorRecord::new("Ana", "ana@x.com")],
        categories: vec![CategoryRecord::new("Tech")],
        articles: vec![article("First"), article("Second")],
        ..Default::default()
    }
}

fn rendered<F>(f: F) -> String
where
    F: FnOnce(&mut Vec<u8>) -> std::io::Result<()>,
{
    let mut buf = Vec::new();
    f(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn empty_catalog_reports_no_articles() {
    let doc = CatalogDocument::default();
    let mut buf = Vec::new();

    let has_articles = render_article_list(&doc, &mut buf).unwrap();

    assert!(!has_articles);
    assert!(String::from_utf8(buf).unwrap().contains("No articles registered."));
    assert!(rendered(|out| render_catalog(&doc, out)).contains("No articles registered."));
}

#[test]
fn catalog_lists_every_section() {
    let text = rendered(|out| render_catalog(&two_articles(), out));

    assert!(text.contains("- Ana (ana@x.com)"));
    assert!(text.contains("- Tech"));
    assert!(text.contains("- \"First\" by ana@x.com in Tech (2024-05-01 10:20:30)"));
}

#[test]
fn article_list_is_numbered_from_one() {
    let text = rendered(|out| render_article_list(&two_articles(), out).map(|_| ()));

    assert!(text.contains("1. First (by ana@x.com)"));
    assert!(text.contains("2. Second (by ana@x.com)"));
}

#[test]
fn valid_selection_shows_content() {
    let doc = two_articles();
    let selection = resolve_selection(&doc.articles, " 2 ");

    assert_eq!(selection, Selection::Article(&doc.articles[1]));
    let text = rendered(|out| render_selection(&selection, out));
    assert!(text.contains("Title: Second"));
    assert!(text.contains("Second body"));
}

#[test]
fn out_of_range_selection_is_reported() {
    let doc = two_articles();

    for input in ["99", "0", "-1", "+3", "99999999999999999999", "-99999999999999999999"] {
        let selection = resolve_selection(&doc.articles, input);
        assert_eq!(selection, Selection::OutOfRange);
        assert_eq!(rendered(|out| render_selection(&selection, out)), "Invalid number.\n");
    }
}

#[test]
fn non_numeric_selection_is_reported() {
    let doc = two_articles();
    let selection = resolve_selection(&doc.articles, "abc");

    assert_eq!(selection, Selection::NotANumber);
    for input in ["", "-", "1.5", "1e3", "12a"] {
        assert_eq!(resolve_selection(&doc.articles, input), Selection::NotANumber);
    }
    assert!(rendered(|out| render_selection(&selection, out)).contains("Please enter a number"));
}
