// src/infrastructure/mod.rs
pub mod config;
pub mod renderer;
pub mod rest;

pub use config::Config;
pub use renderer::ContentRenderer;
pub use rest::RestNoteRepository;
