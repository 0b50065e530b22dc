//! HTTP Handlers

mod import;
mod ping;

pub use import::*;
pub use ping::*;
