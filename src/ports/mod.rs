// src/ports/mod.rs
pub mod html;
pub mod table;

pub use html::HtmlPresenter;
pub use table::TablePresenter;
