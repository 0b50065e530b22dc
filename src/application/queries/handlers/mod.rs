//! Query Handlers

mod import_handlers;

pub use import_handlers::{DetectChaptersHandler, DetectChaptersResponse};
