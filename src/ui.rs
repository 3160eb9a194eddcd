// UI layer: interactive menus built on `dialoguer`. Every top-level menu
// pass loads a fresh snapshot from disk; nothing survives between passes.
// Rendering and selection parsing are plain functions so they can be
// exercised without a terminal.

use anyhow::Result;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use dialoguer::{Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use std::io::{self, Write};
use std::time::Duration;

use crate::config::Config;
use crate::store::{self, ArticleRecord, CatalogDocument};

/// What the caller should do after a submenu returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Outcome of parsing the user's article number.
#[derive(Debug, PartialEq, Eq)]
pub enum Selection<'a> {
    Article(&'a ArticleRecord),
    OutOfRange,
    NotANumber,
}

/// Maps 1-based user input onto `articles`. Anything that reads as an
/// integer but is not a valid position, however large, is out of range.
pub fn resolve_selection<'a>(articles: &'a [ArticleRecord], input: &str) -> Selection<'a> {
    let input = input.trim();
    let digits = input.strip_prefix(['+', '-']).unwrap_or(input);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Selection::NotANumber;
    }
    let position = match input.parse::<i64>().map(usize::try_from) {
        Ok(Ok(n)) if n >= 1 => n,
        _ => return Selection::OutOfRange,
    };
    match articles.get(position - 1) {
        Some(article) => Selection::Article(article),
        None => Selection::OutOfRange,
    }
}

fn published_label(rec: &ArticleRecord) -> &str {
    rec.published_at.as_deref().unwrap_or("draft")
}

/// Writes the full catalog: authors, categories, then articles.
pub fn render_catalog(doc: &CatalogDocument, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "=== CATALOG ===\n")?;

    writeln!(out, "Authors\n")?;
    for author in &doc.authors {
        writeln!(out, "- {} ({})", author.name, author.email)?;
    }

    writeln!(out, "\nCategories\n")?;
    for category in &doc.categories {
        writeln!(out, "- {}", category.name)?;
    }

    writeln!(out, "\nArticles\n")?;
    if doc.articles.is_empty() {
        writeln!(out, "No articles registered.")?;
    }
    for article in &doc.articles {
        writeln!(
            out,
            "- \"{}\" by {} in {} ({})",
            article.title,
            article.author,
            article.category,
            published_label(article)
        )?;
    }
    Ok(())
}

/// Writes the numbered article list. Returns `false` when there is nothing
/// to choose from.
pub fn render_article_list(doc: &CatalogDocument, out: &mut impl Write) -> io::Result<bool> {
    if doc.articles.is_empty() {
        writeln!(out, "No articles registered.")?;
        return Ok(false);
    }
    writeln!(out, "=== ARTICLE LIST ===")?;
    for (i, article) in doc.articles.iter().enumerate() {
        writeln!(out, "{}. {} (by {})", i + 1, article.title, article.author)?;
    }
    Ok(true)
}

pub fn render_article(article: &ArticleRecord, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "=== SELECTED ARTICLE ===")?;
    writeln!(out, "Title: {}", article.title)?;
    writeln!(out, "Author: {}", article.author)?;
    writeln!(out, "Category: {}", article.category)?;
    writeln!(out, "Published at: {}", published_label(article))?;
    writeln!(out, "\nContent:")?;
    writeln!(out, "{}", article.content)
}

/// Writes the response to a selection: the article, or an inline error.
pub fn render_selection(selection: &Selection<'_>, out: &mut impl Write) -> io::Result<()> {
    match selection {
        Selection::Article(article) => render_article(article, out),
        Selection::OutOfRange => writeln!(out, "Invalid number."),
        Selection::NotANumber => writeln!(out, "Invalid input. Please enter a number."),
    }
}

fn clear_screen() -> Result<()> {
    execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
    Ok(())
}

fn wait_for_return() -> Result<()> {
    let _: String = Input::new()
        .with_prompt("Press Enter to return")
        .allow_empty(true)
        .interact_text()?;
    Ok(())
}

/// Main interactive menu. Runs until the user picks "Exit" here or in a
/// submenu.
pub fn main_menu(config: &Config) -> Result<()> {
    loop {
        clear_screen()?;
        println!("=== MAIN MENU ===\n");
        let items = vec!["View catalog", "Add a new article", "Exit"];
        let selection = Select::new().items(&items).default(0).interact()?;
        let flow = match selection {
            0 => catalog_menu(config)?,
            1 => handle_add_article(config)?,
            _ => Flow::Exit,
        };
        if flow == Flow::Exit {
            break;
        }
    }
    info!("event=app_exit");
    Ok(())
}

fn catalog_menu(config: &Config) -> Result<Flow> {
    loop {
        let doc = store::load(&config.database_path)?;
        clear_screen()?;
        render_catalog(&doc, &mut io::stdout())?;
        println!();

        let items = vec!["View article content", "Back to main menu", "Exit"];
        match Select::new().items(&items).default(0).interact()? {
            0 => {
                clear_screen()?;
                handle_view_article(&doc)?;
                wait_for_return()?;
            }
            1 => return Ok(Flow::Continue),
            _ => return Ok(Flow::Exit),
        }
    }
}

fn handle_view_article(doc: &CatalogDocument) -> Result<()> {
    let mut out = io::stdout();
    if !render_article_list(doc, &mut out)? {
        return Ok(());
    }
    let input: String = Input::new()
        .with_prompt("Number of the article to read")
        .allow_empty(true)
        .interact_text()?;
    let selection = resolve_selection(&doc.articles, &input);
    match selection {
        Selection::Article(_) => clear_screen()?,
        _ => warn!("event=invalid_selection input={:?}", input),
    }
    render_selection(&selection, &mut out)?;
    Ok(())
}

/// Collects the article fields, links them into a fresh snapshot and
/// persists the result.
fn handle_add_article(config: &Config) -> Result<Flow> {
    let mut doc = store::load(&config.database_path)?;
    let mut catalog = doc.to_catalog()?;

    let name: String = Input::new().with_prompt("Author name").interact_text()?;
    let email: String = Input::new().with_prompt("Author email").interact_text()?;
    let category: String = Input::new().with_prompt("Category name").interact_text()?;
    let title: String = Input::new().with_prompt("Article title").interact_text()?;
    let content: String = Input::new().with_prompt("Article content").interact_text()?;

    let id = catalog.add_article(&name, &email, &category, &title, &content, true);
    doc.append_article(&catalog, id)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message("Saving...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    let saved = store::save(&doc, &config.database_path);
    spinner.finish_and_clear();
    saved?;
    info!("event=article_added author={} category={}", email, category);

    clear_screen()?;
    println!("Article saved successfully!");
    let items = vec!["Back to main menu", "Exit"];
    match Select::new().items(&items).default(0).interact()? {
        0 => Ok(Flow::Continue),
        _ => Ok(Flow::Exit),
    }
}
