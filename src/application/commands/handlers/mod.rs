//! Command Handlers

mod import_handlers;

pub use import_handlers::{
    BuildChapterListHandler, ImportDocumentHandler, ImportDocumentResponse, LoadDocumentHandler,
};
