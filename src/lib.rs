// Library root
// -----------
// The binary (`main.rs`) drives the interactive menus in `ui`; everything
// else is usable on its own.
//
// Module responsibilities:
// - `model`: authors, categories and the article arena.
// - `factory`: dedup lookups and article creation.
// - `store`: the JSON database file (load, save, snapshot rebuild).
// - `config` / `logging`: runtime setup.
// - `ui`: terminal menus and rendering.
pub mod config;
pub mod factory;
pub mod logging;
pub mod model;
pub mod store;
pub mod ui;

pub use model::{Article, ArticleId, Author, Catalog, Category};
pub use store::{load, save, CatalogDocument};
